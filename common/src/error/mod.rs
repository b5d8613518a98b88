//! Error types for the accounts service
//!
//! This module provides the error taxonomy shared by the repository, the
//! account service and the gRPC layer. The validation and repository kinds
//! are unit variants so callers can compare against them directly.

use thiserror::Error;
use tonic::Status;

/// Accounts service error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Request carried an empty user identifier
    #[error("invalid user_id")]
    InvalidUserId,

    /// Create request carried an empty currency
    #[error("invalid currency")]
    InvalidCurrency,

    /// The account repository reported a failure
    #[error("repository error")]
    RepositoryError,

    /// Failure raised inside a repository backend
    #[error("Storage error: {0}")]
    Storage(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Trait for converting other error types to our Error type
pub trait IntoError {
    /// Convert to Error
    fn into_error(self, message: &str) -> Error;
}

impl<E: std::error::Error> IntoError for E {
    fn into_error(self, message: &str) -> Error {
        Error::Internal(format!("{}: {}", message, self))
    }
}

impl From<Error> for Status {
    fn from(error: Error) -> Self {
        match error {
            Error::InvalidUserId | Error::InvalidCurrency => {
                Status::invalid_argument(error.to_string())
            }
            Error::RepositoryError => Status::internal(error.to_string()),
            // Backend detail stays server-side
            Error::Storage(_) => Status::internal("Storage error"),
            Error::ConfigurationError(msg) | Error::Internal(msg) => Status::internal(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tonic::Code;

    #[test]
    fn test_validation_errors_map_to_invalid_argument() {
        let status = Status::from(Error::InvalidUserId);
        assert_eq!(status.code(), Code::InvalidArgument);
        assert_eq!(status.message(), "invalid user_id");

        let status = Status::from(Error::InvalidCurrency);
        assert_eq!(status.code(), Code::InvalidArgument);
        assert_eq!(status.message(), "invalid currency");
    }

    #[test]
    fn test_repository_error_maps_to_internal() {
        let status = Status::from(Error::RepositoryError);
        assert_eq!(status.code(), Code::Internal);
        assert_eq!(status.message(), "repository error");
    }

    #[test]
    fn test_storage_detail_is_not_exposed() {
        let status = Status::from(Error::Storage("disk on fire".to_string()));
        assert_eq!(status.code(), Code::Internal);
        assert!(!status.message().contains("disk on fire"));
    }

    #[test]
    fn test_into_error_keeps_context() {
        let io = std::io::Error::new(std::io::ErrorKind::AddrInUse, "address in use");
        let err = io.into_error("failed to listen");
        assert_eq!(err, Error::Internal("failed to listen: address in use".to_string()));
    }
}
