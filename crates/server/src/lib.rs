use axum::{
    Json, extract::rejection::JsonRejection, http::StatusCode, response::IntoResponse,
};
use engine::EngineError;

use serde::Serialize;
pub use server::{router, run_with_listener, spawn_with_listener};

mod dashboard;
mod entries;
mod health;
mod server;

pub mod types {
    pub mod entry {
        pub use api_types::EntryMethod;
        pub use api_types::entry::{EntryCreate, EntryView};
    }

    pub mod voice {
        pub use api_types::voice::{VoiceEntryRequest, VoiceEntryResponse};
    }

    pub mod dashboard {
        pub use api_types::dashboard::{CategorySummary, DashboardSummary};
    }

    pub mod health {
        pub use api_types::health::Health;
    }
}

#[derive(Debug)]
pub enum ServerError {
    Engine(EngineError),
    InvalidQuery(String),
    /// Body that is not JSON or does not match the request type.
    InvalidBody(JsonRejection),
}

#[derive(Serialize)]
struct Error {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<&'static str>,
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let (status, body) = match self {
            ServerError::Engine(err) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Error {
                    field: Some(err.field()),
                    error: err.to_string(),
                },
            ),
            ServerError::InvalidQuery(err) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Error {
                    error: err,
                    field: Some("date"),
                },
            ),
            ServerError::InvalidBody(rejection) => (
                rejection.status(),
                Error {
                    error: rejection.body_text(),
                    field: None,
                },
            ),
        };
        tracing::debug!(%status, error = %body.error, "request rejected");

        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for ServerError {
    fn from(value: JsonRejection) -> Self {
        Self::InvalidBody(value)
    }
}

impl From<EngineError> for ServerError {
    fn from(value: EngineError) -> Self {
        Self::Engine(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_amount_maps_to_422() {
        let res =
            ServerError::from(EngineError::InvalidAmount("x".to_string())).into_response();
        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn amount_not_detected_maps_to_422() {
        let res = ServerError::from(EngineError::AmountNotDetected).into_response();
        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn empty_transcript_maps_to_422() {
        let res = ServerError::from(EngineError::EmptyTranscript).into_response();
        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn invalid_query_maps_to_422() {
        let res = ServerError::InvalidQuery("bad date".to_string()).into_response();
        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
