//! JSON responses for lookup failures other than a missing record.
//!
//! Directory pages answer `NotFound` with their own HTML. Whatever else
//! escapes a handler ends up here: a store outage is a 503 carrying its
//! message, any other failure a 500 whose message never leaves the process.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use tracing::error;

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Result type returned by the directory handlers.
pub type ApiResult<T> = Result<T, Error>;

const REDACTED_MESSAGE: &str = "Internal server error";

fn http_status(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Envelope sent to the client; internal failures keep only their trace id.
fn client_envelope(error: &Error) -> Error {
    if error.code() != ErrorCode::InternalError {
        return error.clone();
    }
    let envelope = Error::internal(REDACTED_MESSAGE);
    match error.trace_id() {
        Some(id) => envelope.with_trace_id(id),
        None => envelope,
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        http_status(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            error!(
                %status,
                trace_id = self.trace_id(),
                message = self.message(),
                "directory request failed"
            );
        }

        let mut response = HttpResponse::build(status);
        if let Some(id) = self.trace_id() {
            response.insert_header((TRACE_ID_HEADER, id));
        }
        response.json(client_envelope(self))
    }
}
