//! Dashboard API endpoints
use api_types::{
    DateQuery,
    dashboard::{CategorySummary, DashboardSummary},
};
use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};

use crate::{ServerError, entries::date_filter, server::ServerState};

fn map_summary(summary: engine::DailySummary) -> DashboardSummary {
    DashboardSummary {
        date: summary.date,
        total_spending: summary.total_spending,
        categories: summary
            .categories
            .into_iter()
            .map(|c| CategorySummary {
                category: c.category,
                amount: c.amount,
                percentage: c.percentage,
            })
            .collect(),
        top_category: summary.top_category,
        entry_count: summary.entry_count,
    }
}

/// Spending of one day by category.
///
/// Without `?date=` the day is today's UTC date from the ledger clock, not
/// the server's local date.
pub async fn daily(
    State(state): State<ServerState>,
    query: Result<Query<DateQuery>, QueryRejection>,
) -> Result<Json<DashboardSummary>, ServerError> {
    let date = date_filter(query)?.unwrap_or_else(|| state.ledger.today());

    let summary = state.ledger.summarize_day(date).await;
    Ok(Json(map_summary(summary)))
}
