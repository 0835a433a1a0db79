//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Password hashing (Argon2id, zeroized clear-text handling)
//! - Cookie management

pub mod cookie;
pub mod password;
