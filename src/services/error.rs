//! Error types for the service layer.

use crate::store::StoreError;

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Error type for service-layer operations.
///
/// Referential-integrity failures (`UnknownStop`, `UnknownRoute`,
/// `MissingVehicle`) reject the write before anything is persisted. Lookups
/// that merely find nothing return empty collections, not errors.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// A required field was missing or empty.
    #[error("validation error: {0}")]
    Validation(String),

    /// A route references a stop that does not exist in the catalog.
    #[error("unknown stop: {0}")]
    UnknownStop(String),

    /// A shift references a base route that does not exist.
    #[error("unknown route: {0}")]
    UnknownRoute(String),

    /// A shift was submitted without a vehicle reference.
    #[error("shift has no vehicle reference")]
    MissingVehicle,

    /// A referenced document does not exist.
    #[error("{0}")]
    NotFound(String),

    /// An external collaborator failed.
    #[error("external service failure: {0}")]
    External(String),

    /// The underlying document store failed.
    #[error("store error: {0}")]
    Store(StoreError),
}

impl From<StoreError> for ServiceError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { message, .. } => ServiceError::NotFound(message),
            err @ StoreError::Connection { .. } => ServiceError::External(err.to_string()),
            other => ServiceError::Store(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_not_found_becomes_service_not_found() {
        let err: ServiceError = StoreError::not_found("Shift s1 not found").into();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[test]
    fn test_store_unavailability_is_an_external_failure() {
        let err: ServiceError = StoreError::connection("down").into();
        assert!(matches!(err, ServiceError::External(_)));
    }

    #[test]
    fn test_other_store_errors_stay_wrapped() {
        let err: ServiceError = StoreError::query("bad scan").into();
        assert!(matches!(err, ServiceError::Store(_)));
    }
}
