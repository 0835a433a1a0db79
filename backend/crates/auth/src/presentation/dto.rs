//! API DTOs (Data Transfer Objects)
//!
//! Wire shapes match the frontend the original service shipped with:
//! camelCase fields, signup payload nested under `user`, response
//! envelopes `{user}`, `{result}` and `{users}`. User payloads never
//! carry credential material.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entity::user::User;

// ============================================================================
// User payload
// ============================================================================

/// User as exposed over the wire
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Uuid,
    pub login: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub groups: Vec<String>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: *user.user_id.as_uuid(),
            login: user.login.as_str().to_string(),
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            groups: user.groups.iter().map(str::to_string).collect(),
        }
    }
}

// ============================================================================
// Log In
// ============================================================================

/// Log in request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogInRequest {
    pub login: String,
    pub password: String,
}

// ============================================================================
// Sign Up
// ============================================================================

/// Sign up request; the user object is nested, as the original wire
/// format has it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    pub user: SignUpUser,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpUser {
    pub login: String,
    pub password1: String,
    pub password2: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
}

// ============================================================================
// Current User
// ============================================================================

/// Current user response envelope
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUserResponse {
    pub user: UserResponse,
}

// ============================================================================
// Approve User
// ============================================================================

/// Approve user request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApproveUserRequest {
    /// Target user id
    pub id: Uuid,
}

/// Approve user response envelope
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApproveUserResponse {
    pub result: UserResponse,
}

// ============================================================================
// Unapproved Users
// ============================================================================

/// Unapproved users response envelope
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnapprovedUsersResponse {
    pub users: Vec<UserResponse>,
}
