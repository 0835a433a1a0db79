//! Access-Control Policy
//!
//! Pure membership and capability checks. These functions are total
//! over their inputs: they never fail and have no side effects. An
//! empty group set is "member of nothing", not an error.

use crate::domain::entity::user::User;
use crate::domain::value_object::group;

/// Exact group membership, whitespace-insensitive at the token edges.
pub fn is_in_group(user: &User, group: &str) -> bool {
    user.groups.contains(group)
}

/// Any identity other than the anonymous sentinel is authenticated.
pub fn is_authenticated(user: &User) -> bool {
    !user.is_anonymous()
}

/// Admins may perform privileged mutations.
pub fn is_admin(user: &User) -> bool {
    is_in_group(user, group::ADMINS)
}

/// Approved users carry the `members` group.
pub fn is_approved(user: &User) -> bool {
    is_in_group(user, group::MEMBERS)
}
