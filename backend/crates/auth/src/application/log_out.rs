//! Log Out Use Case
//!
//! Destroys the session unconditionally and returns the anonymous
//! sentinel as the confirmation payload. Idempotent: logging out with
//! no live session, or twice in a row, behaves the same.

use std::sync::Arc;

use crate::application::config::AccessConfig;
use crate::application::token;
use crate::domain::entity::user::User;
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::domain::value_object::login::ANONYMOUS_LOGIN;
use crate::error::{AuthError, AuthResult};

/// Log out use case
pub struct LogOutUseCase<U, S>
where
    U: UserRepository,
    S: SessionRepository,
{
    user_repo: Arc<U>,
    session_repo: Arc<S>,
    config: Arc<AccessConfig>,
}

impl<U, S> LogOutUseCase<U, S>
where
    U: UserRepository,
    S: SessionRepository,
{
    pub fn new(user_repo: Arc<U>, session_repo: Arc<S>, config: Arc<AccessConfig>) -> Self {
        Self {
            user_repo,
            session_repo,
            config,
        }
    }

    pub async fn execute(&self, session_token: Option<&str>) -> AuthResult<User> {
        if let Some(session_token) = session_token {
            if let Some(session_id) =
                token::parse_session_token(&self.config.session_secret, session_token)
            {
                self.session_repo.delete(session_id).await?;
                tracing::info!(session_id = %session_id, "User logged out");
            }
        }

        self.user_repo
            .find_by_login(ANONYMOUS_LOGIN)
            .await?
            .ok_or(AuthError::SentinelMissing)
    }
}
