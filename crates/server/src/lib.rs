use api_types::error::ErrorBody;
use axum::{Json, http::StatusCode, response::IntoResponse};
use engine::EngineError;

pub use orders::batch_orders;
pub use server::{router, run_with_listener};

mod orders;
mod server;

const INTERNAL_ERROR_MESSAGE: &str = "An unexpected error occurred.";

pub enum ServerError {
    Engine(EngineError),
    BadRequest(String),
}

/// Engine errors are storage faults: logged, then masked behind a generic
/// message.
fn message_for_engine_error(err: EngineError) -> String {
    match err {
        EngineError::Database(db_err) => tracing::error!("database error: {db_err}"),
        EngineError::InvalidRecord(record) => tracing::error!("invalid record: {record}"),
    }
    INTERNAL_ERROR_MESSAGE.to_string()
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            ServerError::Engine(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                message_for_engine_error(err),
            ),
            ServerError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
        };

        let body = ErrorBody {
            status: status.as_u16(),
            message,
        };
        (status, Json(body)).into_response()
    }
}

impl From<EngineError> for ServerError {
    fn from(value: EngineError) -> Self {
        Self::Engine(value)
    }
}
