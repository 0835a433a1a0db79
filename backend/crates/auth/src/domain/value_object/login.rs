//! Login Value Object
//!
//! The login is the user's unique handle. It is case-sensitive,
//! trimmed, immutable after creation (there is no rename operation)
//! and must be non-empty. Uniqueness is enforced by the store.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Reserved login of the anonymous sentinel user.
///
/// Exactly one user record with this login exists in the store; every
/// failed or absent identity resolution falls back to it.
pub const ANONYMOUS_LOGIN: &str = "anonymousUser";

/// Error returned when login validation fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginError {
    /// Login is empty after trimming
    Empty,
}

impl fmt::Display for LoginError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Login cannot be empty"),
        }
    }
}

impl std::error::Error for LoginError {}

/// Validated login handle
///
/// # Invariants
/// - Non-empty after trimming
/// - Stored exactly as entered (case-sensitive), minus surrounding
///   whitespace
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Login(String);

impl Login {
    /// Create a new Login from raw input, trimming surrounding whitespace.
    pub fn new(input: impl AsRef<str>) -> Result<Self, LoginError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(LoginError::Empty);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// The anonymous sentinel login.
    pub fn anonymous() -> Self {
        Self(ANONYMOUS_LOGIN.to_string())
    }

    /// Whether this is the anonymous sentinel login.
    pub fn is_anonymous(&self) -> bool {
        self.0 == ANONYMOUS_LOGIN
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Login {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for Login {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Login({})", self.0)
    }
}

impl TryFrom<String> for Login {
    type Error = LoginError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Login> for String {
    fn from(login: Login) -> Self {
        login.0
    }
}
