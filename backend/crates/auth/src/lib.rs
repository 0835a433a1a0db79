//! Auth (Access Control) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - User signup/login with login + password
//! - Server-side sessions with cookie-based tokens
//! - Group-based access (loggedInUsers, notYetApprovedUsers, members, admins)
//! - Admin-gated user approval workflow
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, credential material kept off the
//!   User entity
//! - Session tokens HMAC-signed, 24h fixed TTL
//! - Failed or absent identity resolution always falls back to the
//!   anonymous sentinel user; callers never see "no user"

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use application::config::AccessConfig;
pub use error::{AuthError, AuthResult};
pub use infra::memory::MemoryRepository;
pub use infra::postgres::PgAccessRepository;
pub use presentation::router::access_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod store {
    pub use crate::infra::postgres::PgAccessRepository as AccessStore;
}

pub mod router {
    pub use crate::presentation::router::*;
}
