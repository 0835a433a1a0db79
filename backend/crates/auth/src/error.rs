//! Auth Error Types
//!
//! Auth-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.
//!
//! The HTTP mapping intentionally collapses `SignInRequired`,
//! `AdminRequired` and `InvalidInput` onto 403: that is the wire
//! contract the frontend was built against. The enum keeps the three
//! failure kinds distinct so the mapping can change in one place.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Target user not found
    #[error("User not found")]
    UserNotFound,

    /// Login already exists
    #[error("Login already exists")]
    LoginTaken,

    /// Caller has no authenticated identity (anonymous session)
    #[error("Sign-in required")]
    SignInRequired,

    /// Caller is authenticated but not in the admins group
    #[error("Admin access required")]
    AdminRequired,

    /// Malformed signup payload
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The anonymous sentinel row is missing from the store
    #[error("Anonymous sentinel user is missing")]
    SentinelMissing,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the ErrorKind for this error
    ///
    /// The kind drives the HTTP status code; see the module docs for
    /// why the 403 bucket is wide.
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::UserNotFound => ErrorKind::NotFound,
            AuthError::LoginTaken => ErrorKind::Conflict,
            AuthError::SignInRequired | AuthError::AdminRequired | AuthError::InvalidInput(_) => {
                ErrorKind::Forbidden
            }
            AuthError::SentinelMissing | AuthError::Internal(_) => ErrorKind::InternalServerError,
            AuthError::Database(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::SentinelMissing => {
                tracing::error!("Anonymous sentinel user is missing from the store");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::AdminRequired => {
                tracing::warn!("Privileged operation attempted without admin group");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        AuthError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permission_failures_map_to_403() {
        assert_eq!(AuthError::SignInRequired.kind().status_code(), 403);
        assert_eq!(AuthError::AdminRequired.kind().status_code(), 403);
        assert_eq!(
            AuthError::InvalidInput("x".to_string()).kind().status_code(),
            403
        );
    }

    #[test]
    fn test_distinct_failure_kinds() {
        assert_eq!(AuthError::UserNotFound.kind().status_code(), 404);
        assert_eq!(AuthError::LoginTaken.kind().status_code(), 409);
        assert!(AuthError::SentinelMissing.kind().is_server_error());
    }
}
