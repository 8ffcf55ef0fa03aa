//! Domain error types.

use common::InstitutionId;
use institution_store::StoreError;
use thiserror::Error;

use crate::institution::InstitutionError;

/// Errors that can occur during domain operations.
#[derive(Debug, Error)]
pub enum DomainError {
    /// An error occurred in the institution store.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// The submitted fields are malformed.
    #[error("Validation error: {0}")]
    Validation(#[from] InstitutionError),

    /// No institution has the given ID.
    #[error("Institution not found: {id}")]
    NotFound { id: InstitutionId },
}

impl DomainError {
    /// Returns true if this is a validation failure.
    pub fn is_validation(&self) -> bool {
        matches!(self, DomainError::Validation(_))
    }

    /// Returns true if the target institution does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, DomainError::NotFound { .. })
    }
}
