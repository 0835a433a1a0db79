//! Log In Use Case
//!
//! Authenticates a user and binds the session to the resulting
//! identity. This operation fails open to the anonymous sentinel:
//! unknown logins and bad passwords still produce a session and a
//! concrete identity payload, just an unauthenticated one. The session
//! write happens before the output is produced in both branches.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::application::config::AccessConfig;
use crate::application::token;
use crate::domain::entity::{session::Session, user::User};
use crate::domain::repository::{CredentialRepository, SessionRepository, UserRepository};
use crate::domain::value_object::login::ANONYMOUS_LOGIN;
use crate::error::{AuthError, AuthResult};

/// Log in input
pub struct LogInInput {
    pub login: String,
    pub password: String,
}

/// Log in output
pub struct LogInOutput {
    /// The identity now bound to the session (anonymous on failure)
    pub user: User,
    /// Signed session token for the cookie
    pub session_token: String,
    /// Whether credentials verified
    pub authenticated: bool,
}

/// Log in use case
pub struct LogInUseCase<U, C, S>
where
    U: UserRepository,
    C: CredentialRepository,
    S: SessionRepository,
{
    user_repo: Arc<U>,
    credential_repo: Arc<C>,
    session_repo: Arc<S>,
    config: Arc<AccessConfig>,
}

impl<U, C, S> LogInUseCase<U, C, S>
where
    U: UserRepository,
    C: CredentialRepository,
    S: SessionRepository,
{
    pub fn new(
        user_repo: Arc<U>,
        credential_repo: Arc<C>,
        session_repo: Arc<S>,
        config: Arc<AccessConfig>,
    ) -> Self {
        Self {
            user_repo,
            credential_repo,
            session_repo,
            config,
        }
    }

    pub async fn execute(&self, input: LogInInput) -> AuthResult<LogInOutput> {
        if let Some(user) = self.user_repo.find_by_login(&input.login).await? {
            if self.verify_password(&user, &input.password).await? {
                let session_token = self.open_session(&user).await?;

                tracing::info!(user_id = %user.user_id, "User logged in");

                return Ok(LogInOutput {
                    user,
                    session_token,
                    authenticated: true,
                });
            }
        }

        // Unknown login or failed verification: bind the session to the
        // anonymous sentinel and report it as the identity.
        let anonymous = self.anonymous_identity().await?;
        let session_token = self.open_session(&anonymous).await?;

        tracing::warn!(login = %input.login.trim(), "Login failed, session bound to anonymous identity");

        Ok(LogInOutput {
            user: anonymous,
            session_token,
            authenticated: false,
        })
    }

    /// Verify the password against the stored credential.
    ///
    /// Users without a credential row (the anonymous sentinel) can
    /// never verify.
    async fn verify_password(&self, user: &User, password: &str) -> AuthResult<bool> {
        let Some(credential) = self.credential_repo.find_by_user_id(&user.user_id).await? else {
            return Ok(false);
        };

        let clear = match ClearTextPassword::new(password.to_string()) {
            Ok(clear) => clear,
            Err(_) => return Ok(false),
        };

        Ok(credential.password_hash.verify(&clear, self.config.pepper()))
    }

    async fn anonymous_identity(&self) -> AuthResult<User> {
        self.user_repo
            .find_by_login(ANONYMOUS_LOGIN)
            .await?
            .ok_or(AuthError::SentinelMissing)
    }

    async fn open_session(&self, user: &User) -> AuthResult<String> {
        let session = Session::new(user.user_id, self.config.session_ttl);
        self.session_repo.create(&session).await?;
        Ok(token::sign_session_token(
            &self.config.session_secret,
            session.session_id,
        ))
    }
}
