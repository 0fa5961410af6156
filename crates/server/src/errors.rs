//! Translation of application errors into JSON responses.
//!
//! Every failure leaves the server as `{"status": "error", "message": ...}`
//! with the status code the error carries. Anything that is not a client
//! error is logged here and reported as a bare 500.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use models::market::Violation;
use serde::Serialize;
use serde_json::Value;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::{error, warn};

pub const NOT_FOUND_MESSAGE: &str = "item not found";
pub const MALFORMED_MESSAGE: &str = "Error";
pub const INTERNAL_MESSAGE: &str = "internal server error";

#[derive(Debug, Error)]
#[error("http error {status}: {message}")]
pub struct HttpError {
    pub status: StatusCode,
    pub message: Value,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    status: &'static str,
    message: &'a Value,
}

impl HttpError {
    pub fn new(status: StatusCode, message: impl Into<Value>) -> Self {
        Self { status, message: message.into() }
    }

    pub fn validation(violations: Vec<Violation>) -> Self {
        let message = serde_json::to_value(violations).unwrap_or_else(|_| Value::Array(Vec::new()));
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE)
    }

    pub fn malformed() -> Self {
        Self::new(StatusCode::BAD_REQUEST, MALFORMED_MESSAGE)
    }

    pub fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE)
    }
}

impl From<ServiceError> for HttpError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Validation(v) => HttpError::validation(v.into_violations()),
            ServiceError::NotFound(_) => HttpError::not_found(),
            ServiceError::Malformed(detail) => {
                warn!(error = %detail, "store rejected request");
                HttpError::malformed()
            }
            ServiceError::Db(detail) => {
                error!(error = %detail, "database failure");
                HttpError::internal()
            }
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body = ErrorBody { status: "error", message: &self.message };
        (self.status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use models::market::ValidationError;
    use sea_orm::DbErr;
    use serde_json::json;

    async fn render(err: HttpError) -> (StatusCode, Value) {
        let res = err.into_response();
        let status = res.status();
        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn not_found_renders_plain_message() {
        let (status, body) = render(ServiceError::not_found("item").into()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"status": "error", "message": "item not found"}));
    }

    #[tokio::test]
    async fn validation_renders_violation_list() {
        let v = Violation { loc: vec!["title".into()], msg: "too long".into(), kind: "value_error".into() };
        let (status, body) = render(ServiceError::Validation(ValidationError(vec![v])).into()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["status"], "error");
        assert_eq!(body["message"][0]["loc"], json!(["title"]));
        assert_eq!(body["message"][0]["type"], "value_error");
    }

    #[tokio::test]
    async fn malformed_renders_generic_error() {
        let (status, body) = render(ServiceError::Malformed("value too long".into()).into()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"status": "error", "message": "Error"}));
    }

    #[tokio::test]
    async fn read_side_decode_failure_is_internal() {
        let err = ServiceError::from(DbErr::Type("could not decode creation_time".into()));
        let (status, body) = render(err.into()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"status": "error", "message": "internal server error"}));
    }

    #[tokio::test]
    async fn db_failure_hides_details() {
        let (status, body) = render(ServiceError::Db("connection refused at 10.0.0.1".into()).into()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"status": "error", "message": "internal server error"}));
    }
}
