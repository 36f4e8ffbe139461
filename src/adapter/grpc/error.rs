use crate::domain::error::DomainError;
use thiserror::Error;

pub const ACCOUNT_NOT_FOUND: &str = "Account not found";
pub const INVALID_ACCOUNT_TYPE: &str = "Invalid account type.";

/// Outcome classes a handler can fail with. Each maps to one gRPC code.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    InvalidArgument(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn internal(err: impl std::fmt::Display) -> Self {
        ApiError::Internal(err.to_string())
    }
}

/// Only explicit lookups become `NotFound`; every other domain failure,
/// including validation of stored data, is an internal fault here.
impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound(_) => ApiError::NotFound(ACCOUNT_NOT_FOUND.to_string()),
            other => ApiError::internal(other),
        }
    }
}

impl From<ApiError> for tonic::Status {
    fn from(err: ApiError) -> Self {
        let message = err.to_string();
        match err {
            ApiError::InvalidArgument(_) => tonic::Status::invalid_argument(message),
            ApiError::NotFound(_) => tonic::Status::not_found(message),
            ApiError::Internal(_) => tonic::Status::internal(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tonic::Code;

    #[test]
    fn test_status_codes_stay_distinct() {
        let invalid: tonic::Status = ApiError::InvalidArgument(INVALID_ACCOUNT_TYPE.to_string()).into();
        assert_eq!(invalid.code(), Code::InvalidArgument);
        assert_eq!(invalid.message(), "Invalid account type.");

        let missing: tonic::Status = ApiError::from(DomainError::NotFound("7".to_string())).into();
        assert_eq!(missing.code(), Code::NotFound);
        assert_eq!(missing.message(), "Account not found");

        let internal: tonic::Status = ApiError::from(DomainError::Database("disk full".to_string())).into();
        assert_eq!(internal.code(), Code::Internal);
        assert_eq!(internal.message(), "Internal error: Database error: disk full");
    }

    #[test]
    fn test_stored_type_validation_is_internal() {
        let status: tonic::Status =
            ApiError::from(DomainError::Validation("unknown account type".to_string())).into();
        assert_eq!(status.code(), Code::Internal);
    }
}
