use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

/// How an entry was recorded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryMethod {
    #[default]
    Manual,
    Voice,
}

/// Optional `?date=YYYY-MM-DD` filter shared by list and dashboard endpoints.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct DateQuery {
    pub date: Option<NaiveDate>,
}

pub mod timestamp {
    //! Timestamps accepted on input: RFC3339 with an offset, or a naive
    //! `YYYY-MM-DDTHH:MM:SS[.f]` (also with a space separator) taken as UTC.
    use chrono::NaiveDateTime;
    use serde::{Deserializer, de::Error as _};

    use super::*;

    const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

    pub fn parse(value: &str) -> Option<DateTime<FixedOffset>> {
        if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
            return Some(parsed);
        }
        NAIVE_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
            .map(|naive| naive.and_utc().fixed_offset())
    }

    pub fn deserialize_option<'de, D>(
        deserializer: D,
    ) -> Result<Option<DateTime<FixedOffset>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let Some(raw) = Option::<String>::deserialize(deserializer)? else {
            return Ok(None);
        };
        parse(&raw)
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("invalid timestamp: {raw}")))
    }
}

pub mod health {
    use super::*;

    #[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct Health {
        pub status: String,
    }

    impl Health {
        pub fn ok() -> Self {
            Self {
                status: "ok".to_string(),
            }
        }
    }
}

pub mod entry {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct EntryCreate {
        /// Must be > 0.
        pub amount: f64,
        /// Must not be empty.
        pub category: String,
        #[serde(default)]
        pub note: Option<String>,
        /// RFC3339 timestamp. Without an offset it is read as UTC. If absent,
        /// server uses now().
        #[serde(default, deserialize_with = "crate::timestamp::deserialize_option")]
        pub occurred_at: Option<DateTime<FixedOffset>>,
        #[serde(default)]
        pub method: EntryMethod,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct EntryView {
        pub id: String,
        pub amount: f64,
        pub category: String,
        pub note: Option<String>,
        pub method: EntryMethod,
        pub occurred_at: DateTime<FixedOffset>,
        /// Calendar date of `occurred_at`, in its own offset.
        pub date: NaiveDate,
    }
}

pub mod voice {
    use super::*;
    use crate::entry::EntryView;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct VoiceEntryRequest {
        /// Speech-to-text output, must not be empty.
        pub transcript: String,
        /// Amount already extracted by the client.
        #[serde(default)]
        pub amount_hint: Option<f64>,
        /// Category already extracted by the client.
        #[serde(default)]
        pub category_hint: Option<String>,
        /// Note already extracted by the client.
        #[serde(default)]
        pub note_hint: Option<String>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct VoiceEntryResponse {
        pub entry: EntryView,
        pub transcript: String,
        /// Always true: inferred fields should be confirmed by the user.
        pub requires_confirmation: bool,
    }
}

pub mod dashboard {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct CategorySummary {
        pub category: String,
        pub amount: f64,
        /// Share of the day's total, 0..=100.
        pub percentage: f64,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct DashboardSummary {
        pub date: NaiveDate,
        pub total_spending: f64,
        /// Sorted by amount, highest first.
        pub categories: Vec<CategorySummary>,
        pub top_category: Option<String>,
        pub entry_count: usize,
    }
}
