//! Resolve Identity Use Case
//!
//! Total token-to-identity resolution: every input — absent,
//! malformed, unsigned, expired or dangling — yields a concrete
//! identity, falling back to the anonymous sentinel. Only store
//! failures surface as errors. The fallback is NOT written back into
//! the session store; resolution is read-only apart from reaping an
//! expired session when one is found.

use std::sync::Arc;

use crate::application::config::AccessConfig;
use crate::application::token;
use crate::domain::entity::user::User;
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::domain::value_object::login::ANONYMOUS_LOGIN;
use crate::error::{AuthError, AuthResult};

/// Resolve identity use case
pub struct ResolveIdentityUseCase<U, S>
where
    U: UserRepository,
    S: SessionRepository,
{
    user_repo: Arc<U>,
    session_repo: Arc<S>,
    config: Arc<AccessConfig>,
}

impl<U, S> ResolveIdentityUseCase<U, S>
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

    /// Resolve a session token to an identity. Never returns "no user".
    pub async fn execute(&self, session_token: Option<&str>) -> AuthResult<User> {
        if let Some(user) = self.resolve_session(session_token).await? {
            return Ok(user);
        }

        self.user_repo
            .find_by_login(ANONYMOUS_LOGIN)
            .await?
            .ok_or(AuthError::SentinelMissing)
    }

    async fn resolve_session(&self, session_token: Option<&str>) -> AuthResult<Option<User>> {
        let Some(session_token) = session_token else {
            return Ok(None);
        };

        let Some(session_id) =
            token::parse_session_token(&self.config.session_secret, session_token)
        else {
            return Ok(None);
        };

        let Some(session) = self.session_repo.find_by_id(session_id).await? else {
            return Ok(None);
        };

        if session.is_expired() {
            self.session_repo.delete(session_id).await?;
            tracing::debug!(session_id = %session_id, "Reaped expired session");
            return Ok(None);
        }

        // A dangling user reference (deleted out-of-band) falls through
        // to the anonymous identity.
        self.user_repo.find_by_id(&session.user_id).await
    }
}
