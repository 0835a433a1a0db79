//! Access Router

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::config::AccessConfig;
use crate::domain::repository::{CredentialRepository, SessionRepository, UserRepository};
use crate::infra::postgres::PgAccessRepository;
use crate::presentation::handlers::{self, AccessAppState};

/// Create the access router with the PostgreSQL repository
pub fn access_router(repo: PgAccessRepository, config: AccessConfig) -> Router {
    access_router_generic(repo, config)
}

/// Create the access router for any repository implementation
pub fn access_router_generic<R>(repo: R, config: AccessConfig) -> Router
where
    R: UserRepository + CredentialRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let state = AccessAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    Router::new()
        .route("/login", post(handlers::log_in::<R>))
        .route("/signup", post(handlers::sign_up::<R>))
        .route("/currentuser", get(handlers::current_user::<R>))
        .route("/approveuser", post(handlers::approve_user::<R>))
        .route("/notyetapprovedusers", get(handlers::unapproved_users::<R>))
        .route("/logout", get(handlers::log_out::<R>))
        .with_state(state)
}
