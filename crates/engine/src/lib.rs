use std::sync::Arc;

use chrono::{DateTime, FixedOffset, NaiveDate};
use tokio::sync::RwLock;

pub use clock::{Clock, FixedClock, SystemClock};
pub use entry::{Entry, EntryMethod, NewEntry};
pub use error::EngineError;
pub use summary::{CategorySummary, DailySummary};
pub use voice::VoiceHints;

mod clock;
mod entry;
mod error;
mod summary;
pub mod voice;

type ResultEngine<T> = Result<T, EngineError>;

/// In-memory store of expense entries.
///
/// Entries live for the lifetime of the process. Every read and write goes
/// through a single lock around the whole store.
pub struct Ledger {
    entries: RwLock<Vec<Entry>>,
    clock: Arc<dyn Clock>,
}

impl Ledger {
    /// Return a builder for `Ledger`. Help to build the struct.
    pub fn builder() -> LedgerBuilder {
        LedgerBuilder::default()
    }

    /// Current timestamp according to the ledger clock, as UTC offset.
    pub fn now(&self) -> DateTime<FixedOffset> {
        self.clock.now().fixed_offset()
    }

    /// Current UTC date according to the ledger clock.
    pub fn today(&self) -> NaiveDate {
        self.clock.now().date_naive()
    }

    /// Store a new entry and return it.
    ///
    /// A missing `occurred_at` is replaced by the clock's current time.
    pub async fn add_entry(&self, new: NewEntry) -> Entry {
        let occurred_at = new.occurred_at().unwrap_or_else(|| self.now());
        let entry = Entry::new(new, occurred_at);
        tracing::debug!(id = %entry.id, date = %entry.date, "adding entry: {entry}");

        self.entries.write().await.push(entry.clone());
        entry
    }

    /// List entries, most recent first, optionally only those of `date`.
    ///
    /// Entries sharing the same instant keep insertion order.
    pub async fn list_entries(&self, date: Option<NaiveDate>) -> Vec<Entry> {
        let mut entries: Vec<Entry> = self
            .entries
            .read()
            .await
            .iter()
            .filter(|entry| date.is_none_or(|date| entry.date == date))
            .cloned()
            .collect();
        entries.sort_by(|a, b| b.occurred_at.cmp(&a.occurred_at));
        entries
    }

    /// Aggregate the spending of `date` by category.
    pub async fn summarize_day(&self, date: NaiveDate) -> DailySummary {
        let entries = self.list_entries(Some(date)).await;
        DailySummary::from_entries(date, &entries)
    }

    /// Number of stored entries.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

impl std::fmt::Debug for Ledger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ledger").finish_non_exhaustive()
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Ledger::builder().build()
    }
}

pub struct LedgerBuilder {
    clock: Arc<dyn Clock>,
}

impl Default for LedgerBuilder {
    fn default() -> Self {
        Self {
            clock: Arc::new(SystemClock),
        }
    }
}

impl LedgerBuilder {
    /// Pass the time source used for default timestamps
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> LedgerBuilder {
        self.clock = clock;
        self
    }

    /// Construct `Ledger`
    pub fn build(self) -> Ledger {
        Ledger {
            entries: RwLock::new(Vec::new()),
            clock: self.clock,
        }
    }
}
