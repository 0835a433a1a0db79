//! Approve User Use Case
//!
//! Admin-gated privileged mutation. The caller passes the already
//! resolved identity (an explicit context, never ambient session
//! state); authorization is decided here, not at the route layer.

use std::sync::Arc;

use crate::domain::entity::user::User;
use crate::domain::policy;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{group::GroupSet, user_id::UserId};
use crate::error::{AuthError, AuthResult};

/// Approve user use case
pub struct ApproveUserUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> ApproveUserUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    /// Approve the target user.
    ///
    /// Failure order: anonymous caller, then non-admin caller, then
    /// missing target. Each is a distinct failure kind.
    pub async fn execute(&self, identity: &User, target_id: &UserId) -> AuthResult<User> {
        if !policy::is_authenticated(identity) {
            return Err(AuthError::SignInRequired);
        }

        if !policy::is_admin(identity) {
            return Err(AuthError::AdminRequired);
        }

        // Replace, not merge: approval drops notYetApprovedUsers and
        // any other group the target held. Concurrent approvals are
        // last-write-wins by design.
        let updated = self
            .user_repo
            .replace_groups(target_id, &GroupSet::approved())
            .await?
            .ok_or(AuthError::UserNotFound)?;

        tracing::info!(
            admin = %identity.user_id,
            target = %updated.user_id,
            "User approved"
        );

        Ok(updated)
    }
}
