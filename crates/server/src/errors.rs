use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::error;

use common::metrics::record_response;
use common::types::{ResultCode, R};
use service::errors::ServiceError;

pub const GENERIC_PREFIX: &str = "global exception handling: ";
pub const ARITHMETIC_PREFIX: &str = "specific exception handling: ";

/// Any failure a handler can return.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Service(#[from] ServiceError),
    /// Request could not be extracted (bad JSON, bad path segment).
    #[error("{0}")]
    Rejection(String),
    /// Success payload could not be turned into envelope data.
    #[error("response encoding failed: {0}")]
    Encode(String),
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        Self::Encode(e.to_string())
    }
}

impl From<JsonRejection> for AppError {
    fn from(r: JsonRejection) -> Self {
        Self::Rejection(r.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(r: PathRejection) -> Self {
        Self::Rejection(r.body_text())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Domain,
    Arithmetic,
    Generic,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Domain => "domain",
            Category::Arithmetic => "arithmetic",
            Category::Generic => "generic",
        }
    }
}

impl AppError {
    pub fn category(&self) -> Category {
        match self {
            AppError::Service(ServiceError::Domain { .. }) => Category::Domain,
            AppError::Service(ServiceError::Arithmetic(_)) => Category::Arithmetic,
            _ => Category::Generic,
        }
    }

    /// Envelope for this failure.
    pub fn to_envelope(&self) -> R {
        match self {
            AppError::Service(ServiceError::Domain { code, message }) => {
                R::error().code(*code).message(message.clone())
            }
            AppError::Service(ServiceError::Arithmetic(desc)) => {
                R::error().code(ResultCode::ERROR).message(format!("{ARITHMETIC_PREFIX}{desc}"))
            }
            other => R::error().code(ResultCode::ERROR).message(format!("{GENERIC_PREFIX}{other}")),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let category = self.category();
        let envelope = self.to_envelope();
        error!(
            event = "request_failed",
            category = category.as_str(),
            code = envelope.code,
            error = ?self,
            "{}",
            envelope.message
        );
        record_response(category.as_str());
        (StatusCode::OK, Json(envelope)).into_response()
    }
}

pub type ApiResult<T = Json<R>> = Result<T, AppError>;

/// Wrap a success envelope and count it.
pub fn ok(r: R) -> ApiResult {
    record_response("ok");
    Ok(Json(r))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_passes_code_and_message_through() {
        let e = AppError::from(ServiceError::domain("delete course failed"));
        assert_eq!(e.category(), Category::Domain);
        let r = e.to_envelope();
        assert!(!r.success);
        assert_eq!(r.code, 20001);
        assert_eq!(r.message, "delete course failed");
    }

    #[test]
    fn custom_domain_code_survives() {
        let e = AppError::from(ServiceError::Domain { code: 30005, message: "custom".into() });
        assert_eq!(e.to_envelope().code, 30005);
    }

    #[test]
    fn arithmetic_gets_specific_prefix() {
        let e = AppError::from(ServiceError::Arithmetic("attempt to divide by zero".into()));
        let r = e.to_envelope();
        assert_eq!(r.code, ResultCode::ERROR);
        assert_eq!(r.message, "specific exception handling: attempt to divide by zero");
    }

    #[test]
    fn everything_else_is_generic() {
        let db = AppError::from(ServiceError::Db(sea_orm::DbErr::Custom("connection reset".into())));
        assert_eq!(db.category(), Category::Generic);
        assert!(db.to_envelope().message.starts_with(GENERIC_PREFIX));
        assert!(db.to_envelope().message.contains("connection reset"));

        let validation = AppError::from(ServiceError::Validation("course id required".into()));
        assert_eq!(validation.category(), Category::Generic);

        let encode = AppError::from(serde_json::from_str::<u8>("x").unwrap_err());
        assert_eq!(encode.category(), Category::Generic);
        assert!(encode.to_envelope().message.starts_with("global exception handling: response encoding failed"));

        let rejection = AppError::Rejection("missing field `title`".into());
        assert_eq!(rejection.to_envelope().message, "global exception handling: missing field `title`");
    }

    #[tokio::test]
    async fn response_is_always_http_200() {
        let resp = AppError::from(ServiceError::domain("x")).into_response();
        assert_eq!(resp.status(), StatusCode::OK);
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let r: R = serde_json::from_slice(&body).unwrap();
        assert_eq!(r.message, "x");
        assert!(r.data.is_empty());
    }
}
