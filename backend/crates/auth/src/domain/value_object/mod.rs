//! Value Objects

pub mod group;
pub mod login;
pub mod user_id;
