//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use std::sync::Arc;

use platform::cookie::CookieConfig;

use crate::application::config::AccessConfig;
use crate::application::{
    ApproveUserUseCase, ListUnapprovedUsersUseCase, LogInInput, LogInUseCase, LogOutUseCase,
    ResolveIdentityUseCase, SignUpInput, SignUpUseCase,
};
use crate::domain::repository::{CredentialRepository, SessionRepository, UserRepository};
use crate::domain::value_object::user_id::UserId;
use crate::error::AuthResult;
use crate::presentation::dto::{
    ApproveUserRequest, ApproveUserResponse, CurrentUserResponse, LogInRequest, SignUpRequest,
    UnapprovedUsersResponse, UserResponse,
};

/// Shared state for access-control handlers
#[derive(Clone)]
pub struct AccessAppState<R>
where
    R: UserRepository + CredentialRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AccessConfig>,
}

// ============================================================================
// Log In
// ============================================================================

/// POST /login
///
/// Both branches carry a fresh session cookie and a user body; a failed
/// attempt answers 403 with the anonymous identity rather than an error
/// document.
pub async fn log_in<R>(
    State(state): State<AccessAppState<R>>,
    Json(req): Json<LogInRequest>,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + CredentialRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let use_case = LogInUseCase::new(
        state.repo.clone(),
        state.repo.clone(),
        state.repo.clone(),
        state.config.clone(),
    );

    let output = use_case
        .execute(LogInInput {
            login: req.login,
            password: req.password,
        })
        .await?;

    let status = if output.authenticated {
        StatusCode::OK
    } else {
        StatusCode::FORBIDDEN
    };
    let cookie = build_session_cookie(&state.config, &output.session_token);

    Ok((
        status,
        [(header::SET_COOKIE, cookie)],
        Json(UserResponse::from(output.user)),
    ))
}

// ============================================================================
// Sign Up
// ============================================================================

/// POST /signup
pub async fn sign_up<R>(
    State(state): State<AccessAppState<R>>,
    Json(req): Json<SignUpRequest>,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + CredentialRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let use_case = SignUpUseCase::new(
        state.repo.clone(),
        state.repo.clone(),
        state.repo.clone(),
        state.config.clone(),
    );

    let output = use_case
        .execute(SignUpInput {
            login: req.user.login,
            password1: req.user.password1,
            password2: req.user.password2,
            first_name: req.user.first_name,
            last_name: req.user.last_name,
            email: req.user.email,
        })
        .await?;

    let cookie = build_session_cookie(&state.config, &output.session_token);

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(UserResponse::from(output.user)),
    ))
}

// ============================================================================
// Current User
// ============================================================================

/// GET /currentuser
///
/// Total: always answers 200 with a concrete identity, anonymous when
/// the cookie is absent, invalid or expired.
pub async fn current_user<R>(
    State(state): State<AccessAppState<R>>,
    headers: HeaderMap,
) -> AuthResult<Json<CurrentUserResponse>>
where
    R: UserRepository + CredentialRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let token = extract_session_cookie(&headers, &state.config.session_cookie_name);

    let use_case =
        ResolveIdentityUseCase::new(state.repo.clone(), state.repo.clone(), state.config.clone());

    let user = use_case.execute(token.as_deref()).await?;

    Ok(Json(CurrentUserResponse {
        user: UserResponse::from(user),
    }))
}

// ============================================================================
// Approve User
// ============================================================================

/// POST /approveuser
pub async fn approve_user<R>(
    State(state): State<AccessAppState<R>>,
    headers: HeaderMap,
    Json(req): Json<ApproveUserRequest>,
) -> AuthResult<Json<ApproveUserResponse>>
where
    R: UserRepository + CredentialRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let token = extract_session_cookie(&headers, &state.config.session_cookie_name);

    let resolve =
        ResolveIdentityUseCase::new(state.repo.clone(), state.repo.clone(), state.config.clone());
    let identity = resolve.execute(token.as_deref()).await?;

    let use_case = ApproveUserUseCase::new(state.repo.clone());
    let updated = use_case
        .execute(&identity, &UserId::from_uuid(req.id))
        .await?;

    Ok(Json(ApproveUserResponse {
        result: UserResponse::from(updated),
    }))
}

// ============================================================================
// Unapproved Users
// ============================================================================

/// GET /notyetapprovedusers
pub async fn unapproved_users<R>(
    State(state): State<AccessAppState<R>>,
) -> AuthResult<Json<UnapprovedUsersResponse>>
where
    R: UserRepository + CredentialRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListUnapprovedUsersUseCase::new(state.repo.clone());

    let users = use_case.execute().await?;

    Ok(Json(UnapprovedUsersResponse {
        users: users.into_iter().map(UserResponse::from).collect(),
    }))
}

// ============================================================================
// Log Out
// ============================================================================

/// GET /logout
pub async fn log_out<R>(
    State(state): State<AccessAppState<R>>,
    headers: HeaderMap,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + CredentialRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let token = extract_session_cookie(&headers, &state.config.session_cookie_name);

    let use_case = LogOutUseCase::new(state.repo.clone(), state.repo.clone(), state.config.clone());
    let anonymous = use_case.execute(token.as_deref()).await?;

    let cookie = build_clear_cookie(&state.config);

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(UserResponse::from(anonymous)),
    ))
}

// ============================================================================
// Helper Functions
// ============================================================================

fn extract_session_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    platform::cookie::extract_cookie(headers, name)
}

fn cookie_config(config: &AccessConfig, max_age_secs: Option<i64>) -> CookieConfig {
    CookieConfig {
        name: config.session_cookie_name.clone(),
        secure: config.cookie_secure,
        http_only: true,
        same_site: config.cookie_same_site,
        path: "/".to_string(),
        max_age_secs,
    }
}

fn build_session_cookie(config: &AccessConfig, token: &str) -> String {
    cookie_config(config, Some(config.session_ttl_secs() as i64)).build_set_cookie(token)
}

fn build_clear_cookie(config: &AccessConfig) -> String {
    cookie_config(config, None).build_delete_cookie()
}
