//! Access Group Value Objects
//!
//! Groups are string tags conferring capabilities. Business logic only
//! sees the structured [`GroupSet`]; the comma-delimited text form of
//! the legacy data model exists solely at the persistence edge
//! ([`GroupSet::parse`] / [`GroupSet::to_delimited`]).

use std::collections::BTreeSet;
use std::fmt;

/// Every authenticated, non-anonymous user belongs to this group.
pub const LOGGED_IN_USERS: &str = "loggedInUsers";

/// Newly signed-up users carry this group until approved.
pub const NOT_YET_APPROVED_USERS: &str = "notYetApprovedUsers";

/// Granted on approval, replacing `notYetApprovedUsers`.
pub const MEMBERS: &str = "members";

/// Grants access to privileged operations. Provisioned out-of-band;
/// no endpoint grants this group.
pub const ADMINS: &str = "admins";

/// Structured set of group tags.
///
/// Tokens are stored trimmed; empty tokens are dropped. An empty set
/// means "member of nothing" and is never an error.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GroupSet(BTreeSet<String>);

impl GroupSet {
    /// Empty group set
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from individual group tags, trimming each and dropping
    /// empty ones.
    pub fn from_groups<I, S>(groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            groups
                .into_iter()
                .map(|g| g.as_ref().trim().to_string())
                .filter(|g| !g.is_empty())
                .collect(),
        )
    }

    /// Group set assigned at signup: `{loggedInUsers, notYetApprovedUsers}`.
    pub fn initial_signup() -> Self {
        Self::from_groups([LOGGED_IN_USERS, NOT_YET_APPROVED_USERS])
    }

    /// Group set assigned on approval: `{loggedInUsers, members}`.
    ///
    /// Approval replaces the whole set; nothing from the prior set
    /// survives.
    pub fn approved() -> Self {
        Self::from_groups([LOGGED_IN_USERS, MEMBERS])
    }

    /// Parse the comma-delimited persistence form. Internal whitespace
    /// around tokens is insignificant.
    pub fn parse(raw: &str) -> Self {
        Self::from_groups(raw.split(','))
    }

    /// Serialize to the comma-delimited persistence form.
    pub fn to_delimited(&self) -> String {
        self.0.iter().cloned().collect::<Vec<_>>().join(",")
    }

    /// Exact membership test. The candidate is trimmed before
    /// comparison; match is case-sensitive.
    pub fn contains(&self, group: &str) -> bool {
        self.0.contains(group.trim())
    }

    /// Exact token membership, ignoring ASCII case.
    ///
    /// This is a whole-token match: `notYetApprovedUsers` does not
    /// match a set containing only `notYetApprovedUsersArchive`.
    pub fn contains_ignore_case(&self, group: &str) -> bool {
        let wanted = group.trim();
        self.0.iter().any(|g| g.eq_ignore_ascii_case(wanted))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for GroupSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_delimited())
    }
}
