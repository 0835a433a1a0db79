//! Domain Layer
//!
//! Entities, value objects, pure access-control policy and repository
//! traits. No I/O here.

pub mod entity;
pub mod policy;
pub mod repository;
pub mod value_object;
