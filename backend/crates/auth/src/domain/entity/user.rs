//! User Entity
//!
//! Core user record. Credential material is NOT part of this entity;
//! it lives in the [`Credential`](super::credential::Credential)
//! entity so that user records handed to callers structurally cannot
//! leak a password hash.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{group::GroupSet, login::Login, user_id::UserId};

/// User entity
#[derive(Debug, Clone)]
pub struct User {
    /// Internal UUID identifier, immutable
    pub user_id: UserId,
    /// Unique login handle, case-sensitive, immutable
    pub login: Login,
    /// Group tags conferring capabilities
    pub groups: GroupSet,
    /// Informational profile fields, no invariants
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user
    pub fn new(
        login: Login,
        groups: GroupSet,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        let now = Utc::now();

        Self {
            user_id: UserId::new(),
            login,
            groups,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            created_at: now,
            updated_at: now,
        }
    }

    /// The anonymous sentinel record: fixed login, empty group set.
    pub fn anonymous() -> Self {
        Self::new(Login::anonymous(), GroupSet::new(), "", "", "")
    }

    /// Whether this is the anonymous sentinel
    pub fn is_anonymous(&self) -> bool {
        self.login.is_anonymous()
    }

    /// Replace the whole group set
    pub fn set_groups(&mut self, groups: GroupSet) {
        self.groups = groups;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::group;

    #[test]
    fn test_new_user_carries_given_groups() {
        let user = User::new(
            Login::new("alice").unwrap(),
            GroupSet::initial_signup(),
            "Alice",
            "Smith",
            "alice@example.com",
        );
        assert!(user.groups.contains(group::LOGGED_IN_USERS));
        assert!(user.groups.contains(group::NOT_YET_APPROVED_USERS));
        assert!(!user.is_anonymous());
    }

    #[test]
    fn test_anonymous_sentinel_shape() {
        let anon = User::anonymous();
        assert!(anon.is_anonymous());
        assert!(anon.groups.is_empty());
    }
}
