//! Repository Traits
//!
//! Interfaces for data persistence. Implementations are in the
//! infrastructure layer.

use uuid::Uuid;

use crate::domain::entity::{credential::Credential, session::Session, user::User};
use crate::domain::value_object::{group::GroupSet, user_id::UserId};
use crate::error::AuthResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Create a new user. Fails with `LoginTaken` if the login exists.
    async fn create(&self, user: &User) -> AuthResult<()>;

    /// Find user by ID
    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>>;

    /// Find user by login (exact, case-sensitive)
    async fn find_by_login(&self, login: &str) -> AuthResult<Option<User>>;

    /// Atomically replace a user's group set, returning the updated
    /// record, or `None` if the user does not exist. Concurrent calls
    /// are last-write-wins.
    async fn replace_groups(&self, user_id: &UserId, groups: &GroupSet)
    -> AuthResult<Option<User>>;

    /// All users whose group set contains the given group, as an exact
    /// case-insensitive token match.
    async fn find_by_group(&self, group: &str) -> AuthResult<Vec<User>>;

    /// Provision the anonymous sentinel row if absent; returns it.
    /// Called at store initialization.
    async fn ensure_anonymous(&self) -> AuthResult<User>;
}

/// Credential repository trait
#[trait_variant::make(CredentialRepository: Send)]
pub trait LocalCredentialRepository {
    /// Create credentials for a user
    async fn create(&self, credential: &Credential) -> AuthResult<()>;

    /// Find credentials by user ID
    async fn find_by_user_id(&self, user_id: &UserId) -> AuthResult<Option<Credential>>;
}

/// Session repository trait
#[trait_variant::make(SessionRepository: Send)]
pub trait LocalSessionRepository {
    /// Create a new session
    async fn create(&self, session: &Session) -> AuthResult<()>;

    /// Find session by ID
    async fn find_by_id(&self, session_id: Uuid) -> AuthResult<Option<Session>>;

    /// Delete a session. Deleting an absent session is not an error.
    async fn delete(&self, session_id: Uuid) -> AuthResult<()>;

    /// Clean up expired sessions, returning the number deleted
    async fn cleanup_expired(&self) -> AuthResult<u64>;
}
