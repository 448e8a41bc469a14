//! The module contains the errors the engine can throw.
//!
//! Rejected batches are not errors: they are reported through
//! [`BatchOutcome::Rejected`]. The errors are:
//!
//! - [`InvalidRecord`] thrown when a persisted row does not fit the domain.
//! - [`Database`] thrown when the storage fails.
//!
//!  [`BatchOutcome::Rejected`]: crate::BatchOutcome::Rejected
//!  [`Database`]: EngineError::Database
//!  [`InvalidRecord`]: EngineError::InvalidRecord
use sea_orm::DbErr;
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid record: {0}")]
    InvalidRecord(String),
    #[error(transparent)]
    Database(#[from] DbErr),
}

impl PartialEq for EngineError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::InvalidRecord(a), Self::InvalidRecord(b)) => a == b,
            (Self::Database(a), Self::Database(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}
