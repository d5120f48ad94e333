//! Per-day spending aggregates.
use std::collections::HashMap;

use chrono::NaiveDate;

use crate::Entry;

/// Total spent on one category in a day.
#[derive(Clone, Debug, PartialEq)]
pub struct CategorySummary {
    pub category: String,
    pub amount: f64,
    /// Share of the day's total, 0 when the total is 0.
    pub percentage: f64,
}

/// Spending for a single calendar day.
#[derive(Clone, Debug, PartialEq)]
pub struct DailySummary {
    pub date: NaiveDate,
    pub total_spending: f64,
    /// Highest amount first.
    pub categories: Vec<CategorySummary>,
    pub top_category: Option<String>,
    pub entry_count: usize,
}

impl DailySummary {
    /// Aggregate `entries`, which must all fall on `date`.
    ///
    /// Categories with the same amount keep the order in which they first
    /// appear in `entries`.
    pub fn from_entries(date: NaiveDate, entries: &[Entry]) -> Self {
        let total_spending = entries.iter().fold(0.0, |acc, entry| acc + entry.amount);

        let mut positions: HashMap<&str, usize> = HashMap::new();
        let mut totals: Vec<(&str, f64)> = Vec::new();
        for entry in entries {
            match positions.get(entry.category.as_str()) {
                Some(&idx) => totals[idx].1 += entry.amount,
                None => {
                    positions.insert(entry.category.as_str(), totals.len());
                    totals.push((entry.category.as_str(), entry.amount));
                }
            }
        }

        let mut categories: Vec<CategorySummary> = totals
            .into_iter()
            .map(|(category, amount)| CategorySummary {
                category: category.to_string(),
                amount,
                percentage: percentage_of(amount, total_spending),
            })
            .collect();
        // stable: ties keep first-seen order
        categories.sort_by(|a, b| b.amount.total_cmp(&a.amount));

        let top_category = categories.first().map(|c| c.category.clone());

        Self {
            date,
            total_spending,
            categories,
            top_category,
            entry_count: entries.len(),
        }
    }
}

fn percentage_of(amount: f64, total: f64) -> f64 {
    if total == 0.0 {
        0.0
    } else {
        amount / total * 100.0
    }
}

#[cfg(test)]
mod tests {
    use chrono::DateTime;

    use super::*;
    use crate::NewEntry;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 10).unwrap()
    }

    fn entry(amount: f64, category: &str) -> Entry {
        let occurred_at = DateTime::parse_from_rfc3339("2024-05-10T12:00:00Z").unwrap();
        Entry::new(NewEntry::new(amount, category).unwrap(), occurred_at)
    }

    #[test]
    fn empty_day() {
        let summary = DailySummary::from_entries(day(), &[]);
        assert_eq!(summary.total_spending, 0.0);
        assert!(summary.categories.is_empty());
        assert_eq!(summary.top_category, None);
        assert_eq!(summary.entry_count, 0);
    }

    #[test]
    fn groups_and_sorts_categories() {
        let entries = [
            entry(4.0, "coffee"),
            entry(10.0, "food"),
            entry(6.0, "food"),
            entry(20.0, "transport"),
        ];
        let summary = DailySummary::from_entries(day(), &entries);

        assert_eq!(summary.total_spending, 40.0);
        assert_eq!(summary.entry_count, 4);
        let labels: Vec<_> = summary
            .categories
            .iter()
            .map(|c| c.category.as_str())
            .collect();
        assert_eq!(labels, ["transport", "food", "coffee"]);
        assert_eq!(summary.categories[0].percentage, 50.0);
        assert_eq!(summary.categories[1].amount, 16.0);
        assert_eq!(summary.categories[1].percentage, 40.0);
        assert_eq!(summary.top_category.as_deref(), Some("transport"));
    }

    #[test]
    fn percentages_add_up_to_hundred() {
        let entries = [entry(1.0, "a"), entry(1.0, "b"), entry(1.0, "c")];
        let summary = DailySummary::from_entries(day(), &entries);
        let sum: f64 = summary.categories.iter().map(|c| c.percentage).sum();
        assert!((sum - 100.0).abs() < 1e-9);
    }

    #[test]
    fn ties_keep_first_seen_category() {
        let entries = [entry(5.0, "housing"), entry(5.0, "food")];
        let summary = DailySummary::from_entries(day(), &entries);
        assert_eq!(summary.top_category.as_deref(), Some("housing"));
        assert_eq!(summary.categories[1].category, "food");
    }
}
