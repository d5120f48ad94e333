//! Entries API endpoints
use api_types::{
    DateQuery,
    entry::{EntryCreate, EntryView},
    voice::{VoiceEntryRequest, VoiceEntryResponse},
};
use axum::{
    Json,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
};
use engine::{NewEntry, VoiceHints, voice};

use crate::{ServerError, server::ServerState};

fn map_method(method: engine::EntryMethod) -> api_types::EntryMethod {
    match method {
        engine::EntryMethod::Manual => api_types::EntryMethod::Manual,
        engine::EntryMethod::Voice => api_types::EntryMethod::Voice,
    }
}

fn parse_method(method: api_types::EntryMethod) -> engine::EntryMethod {
    match method {
        api_types::EntryMethod::Manual => engine::EntryMethod::Manual,
        api_types::EntryMethod::Voice => engine::EntryMethod::Voice,
    }
}

fn map_entry(entry: engine::Entry) -> EntryView {
    EntryView {
        id: entry.id.to_string(),
        amount: entry.amount,
        category: entry.category,
        note: entry.note,
        method: map_method(entry.method),
        occurred_at: entry.occurred_at,
        date: entry.date,
    }
}

/// Extract the optional `date` filter, reporting a malformed one as 422.
pub(crate) fn date_filter(
    query: Result<Query<DateQuery>, QueryRejection>,
) -> Result<Option<chrono::NaiveDate>, ServerError> {
    query
        .map(|Query(query)| query.date)
        .map_err(|rejection| ServerError::InvalidQuery(rejection.body_text()))
}

pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<EntryCreate>, JsonRejection>,
) -> Result<(StatusCode, Json<EntryView>), ServerError> {
    let Json(payload) = payload?;
    let new = NewEntry::new(payload.amount, payload.category)?
        .with_note(payload.note)
        .with_occurred_at(payload.occurred_at)
        .with_method(parse_method(payload.method));

    let entry = state.ledger.add_entry(new).await;
    Ok((StatusCode::CREATED, Json(map_entry(entry))))
}

pub async fn create_voice(
    State(state): State<ServerState>,
    payload: Result<Json<VoiceEntryRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<VoiceEntryResponse>), ServerError> {
    let Json(payload) = payload?;
    let hints = VoiceHints {
        amount: payload.amount_hint,
        category: payload.category_hint,
        note: payload.note_hint,
    };
    let draft = voice::draft_entry(&payload.transcript, hints)?;

    let entry = state.ledger.add_entry(draft).await;
    Ok((
        StatusCode::CREATED,
        Json(VoiceEntryResponse {
            entry: map_entry(entry),
            transcript: payload.transcript,
            requires_confirmation: true,
        }),
    ))
}

pub async fn list(
    State(state): State<ServerState>,
    query: Result<Query<DateQuery>, QueryRejection>,
) -> Result<Json<Vec<EntryView>>, ServerError> {
    let date = date_filter(query)?;

    let entries = state
        .ledger
        .list_entries(date)
        .await
        .into_iter()
        .map(map_entry)
        .collect();
    Ok(Json(entries))
}
