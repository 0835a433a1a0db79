//! List Unapproved Users Use Case
//!
//! Returns users still carrying the `notYetApprovedUsers` group, as an
//! exact case-insensitive membership test. This operation carries no
//! authorization gate; that matches the shipped behavior and is
//! recorded as a known gap rather than silently changed.

use std::sync::Arc;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::group;
use crate::error::AuthResult;

/// List unapproved users use case
pub struct ListUnapprovedUsersUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> ListUnapprovedUsersUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(&self) -> AuthResult<Vec<User>> {
        self.user_repo
            .find_by_group(group::NOT_YET_APPROVED_USERS)
            .await
    }
}
