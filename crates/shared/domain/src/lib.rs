//! Domain layer - Core entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! Persistence adapters bind these types to concrete stores.

pub mod constants;
pub mod entity;
pub mod error;
pub mod text;
pub mod user;

pub use constants::*;
pub use entity::{Entity, EntityId};
pub use error::{DomainError, DomainResult};
pub use user::User;
