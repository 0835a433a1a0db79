//! Sign Up Use Case
//!
//! Creates a new user account, binds the session to it and returns it.
//! Validation short-circuits in contract order: login presence,
//! password presence, password match. A validation failure persists
//! nothing and leaves the session untouched.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::application::config::AccessConfig;
use crate::application::token;
use crate::domain::entity::{credential::Credential, session::Session, user::User};
use crate::domain::repository::{CredentialRepository, SessionRepository, UserRepository};
use crate::domain::value_object::{group::GroupSet, login::Login};
use crate::error::{AuthError, AuthResult};

/// Sign up input
pub struct SignUpInput {
    pub login: String,
    pub password1: String,
    pub password2: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// Sign up output
#[derive(Debug)]
pub struct SignUpOutput {
    /// The newly created user, now bound to the session
    pub user: User,
    /// Signed session token for the cookie
    pub session_token: String,
}

/// Sign up use case
pub struct SignUpUseCase<U, C, S>
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

impl<U, C, S> SignUpUseCase<U, C, S>
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

    pub async fn execute(&self, input: SignUpInput) -> AuthResult<SignUpOutput> {
        // Validation order is part of the contract.
        let login = Login::new(&input.login)
            .map_err(|_| AuthError::InvalidInput("login must not be empty".to_string()))?;

        if input.password1.trim().is_empty() {
            return Err(AuthError::InvalidInput(
                "password must not be empty".to_string(),
            ));
        }

        if input.password1 != input.password2 {
            return Err(AuthError::InvalidInput(
                "passwords do not match".to_string(),
            ));
        }

        let clear = ClearTextPassword::new(input.password1)
            .map_err(|e| AuthError::InvalidInput(e.to_string()))?;
        let password_hash = clear
            .hash(self.config.pepper())
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        let user = User::new(
            login,
            GroupSet::initial_signup(),
            input.first_name,
            input.last_name,
            input.email,
        );
        let credential = Credential::new(user.user_id, password_hash);

        // LoginTaken surfaces here if the login is already in use.
        self.user_repo.create(&user).await?;
        self.credential_repo.create(&credential).await?;

        let session = Session::new(user.user_id, self.config.session_ttl);
        self.session_repo.create(&session).await?;
        let session_token =
            token::sign_session_token(&self.config.session_secret, session.session_id);

        tracing::info!(
            user_id = %user.user_id,
            login = %user.login,
            "User signed up"
        );

        Ok(SignUpOutput {
            user,
            session_token,
        })
    }
}
