use thiserror::Error;

/// Code carried by every domain failure raised in this crate.
pub const DOMAIN_ERROR_CODE: i32 = 20001;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Deliberate failure with a caller-facing code and message, e.g. a write
    /// that affected zero rows.
    #[error("{message}")]
    Domain { code: i32, message: String },
    /// Numeric fault while processing a request.
    #[error("arithmetic error: {0}")]
    Arithmetic(String),
    #[error("validation error: {0}")]
    Validation(String),
    #[error("database error: {0}")]
    Db(#[from] sea_orm::DbErr),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
}

impl ServiceError {
    pub fn domain(message: impl Into<String>) -> Self {
        Self::Domain { code: DOMAIN_ERROR_CODE, message: message.into() }
    }

    pub fn not_found(entity: &str) -> Self {
        Self::domain(format!("{} not found", entity))
    }

    /// Fail with a domain error when a write reports no effect.
    pub fn ensure_affected(rows: u64, message: &str) -> Result<(), Self> {
        if rows == 0 {
            return Err(Self::domain(message));
        }
        Ok(())
    }
}
