//! Application Layer
//!
//! Use cases and application services. One use case per boundary
//! operation; the calling layer resolves the session token to an
//! identity before invoking privileged use cases.

pub mod approve_user;
pub mod config;
pub mod list_unapproved;
pub mod log_in;
pub mod log_out;
pub mod resolve_identity;
pub mod sign_up;
pub mod token;

// Re-exports
pub use approve_user::ApproveUserUseCase;
pub use config::AccessConfig;
pub use list_unapproved::ListUnapprovedUsersUseCase;
pub use log_in::{LogInInput, LogInOutput, LogInUseCase};
pub use log_out::LogOutUseCase;
pub use resolve_identity::ResolveIdentityUseCase;
pub use sign_up::{SignUpInput, SignUpOutput, SignUpUseCase};
