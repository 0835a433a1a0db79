//! In-Memory Repository Implementation
//!
//! Backs the test suite and local experimentation. Mirrors the
//! Postgres implementation's semantics: unique logins, atomic
//! per-record group replacement, whole-token group matching.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entity::{credential::Credential, session::Session, user::User};
use crate::domain::repository::{CredentialRepository, SessionRepository, UserRepository};
use crate::domain::value_object::{group::GroupSet, login::ANONYMOUS_LOGIN, user_id::UserId};
use crate::error::{AuthError, AuthResult};

/// In-memory access-control repository
#[derive(Clone, Default)]
pub struct MemoryRepository {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
    credentials: Arc<RwLock<HashMap<Uuid, Credential>>>,
    sessions: Arc<RwLock<HashMap<Uuid, Session>>>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserRepository for MemoryRepository {
    async fn create(&self, user: &User) -> AuthResult<()> {
        let mut users = self.users.write().await;

        if users.values().any(|u| u.login == user.login) {
            return Err(AuthError::LoginTaken);
        }

        users.insert(*user.user_id.as_uuid(), user.clone());
        Ok(())
    }

    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>> {
        Ok(self.users.read().await.get(user_id.as_uuid()).cloned())
    }

    async fn find_by_login(&self, login: &str) -> AuthResult<Option<User>> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|u| u.login.as_str() == login)
            .cloned())
    }

    async fn replace_groups(
        &self,
        user_id: &UserId,
        groups: &GroupSet,
    ) -> AuthResult<Option<User>> {
        let mut users = self.users.write().await;

        Ok(users.get_mut(user_id.as_uuid()).map(|user| {
            user.set_groups(groups.clone());
            user.clone()
        }))
    }

    async fn find_by_group(&self, group: &str) -> AuthResult<Vec<User>> {
        let mut matched: Vec<User> = self
            .users
            .read()
            .await
            .values()
            .filter(|u| u.groups.contains_ignore_case(group))
            .cloned()
            .collect();

        matched.sort_by_key(|u| u.created_at);
        Ok(matched)
    }

    async fn ensure_anonymous(&self) -> AuthResult<User> {
        if let Some(existing) = self.find_by_login(ANONYMOUS_LOGIN).await? {
            return Ok(existing);
        }

        let sentinel = User::anonymous();
        self.users
            .write()
            .await
            .insert(*sentinel.user_id.as_uuid(), sentinel.clone());
        Ok(sentinel)
    }
}

impl CredentialRepository for MemoryRepository {
    async fn create(&self, credential: &Credential) -> AuthResult<()> {
        self.credentials
            .write()
            .await
            .insert(*credential.user_id.as_uuid(), credential.clone());
        Ok(())
    }

    async fn find_by_user_id(&self, user_id: &UserId) -> AuthResult<Option<Credential>> {
        Ok(self
            .credentials
            .read()
            .await
            .get(user_id.as_uuid())
            .cloned())
    }
}

impl SessionRepository for MemoryRepository {
    async fn create(&self, session: &Session) -> AuthResult<()> {
        self.sessions
            .write()
            .await
            .insert(session.session_id, session.clone());
        Ok(())
    }

    async fn find_by_id(&self, session_id: Uuid) -> AuthResult<Option<Session>> {
        Ok(self.sessions.read().await.get(&session_id).cloned())
    }

    async fn delete(&self, session_id: Uuid) -> AuthResult<()> {
        self.sessions.write().await.remove(&session_id);
        Ok(())
    }

    async fn cleanup_expired(&self) -> AuthResult<u64> {
        let now_ms = Utc::now().timestamp_millis();
        let mut sessions = self.sessions.write().await;

        let before = sessions.len();
        sessions.retain(|_, s| s.expires_at_ms >= now_ms);

        Ok((before - sessions.len()) as u64)
    }
}
