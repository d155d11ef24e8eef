//! User domain entity.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::constants::TRANSIENT_ID;
use crate::entity::{Entity, EntityId};
use crate::error::DomainResult;
use crate::text;

/// User domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct User {
    pub id: EntityId,
    #[validate(length(min = 3, max = 80, message = "Name must be between 3 and 80 characters"))]
    pub name: String,
    #[validate(
        email(message = "Invalid email format"),
        length(max = 180, message = "Email must be at most 180 characters")
    )]
    pub email: String,
    #[serde(skip_serializing, default)]
    #[validate(length(min = 6, max = 80, message = "Password must be between 6 and 80 characters"))]
    pub password: String,
}

impl User {
    /// Create a transient user; the store assigns the id on create.
    pub fn new(name: impl Into<String>, email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            id: TRANSIENT_ID,
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    /// Same user with an explicit identifier.
    pub fn with_id(mut self, id: EntityId) -> Self {
        self.id = id;
        self
    }

    /// Case-insensitive exact email match
    pub fn has_email(&self, email: &str) -> bool {
        text::eq_folded(&self.email, email)
    }

    /// Case-insensitive email substring match
    pub fn email_contains(&self, fragment: &str) -> bool {
        text::contains_folded(&self.email, fragment)
    }

    /// Case-insensitive name substring match
    pub fn name_contains(&self, fragment: &str) -> bool {
        text::contains_folded(&self.name, fragment)
    }
}

impl Entity for User {
    fn id(&self) -> EntityId {
        self.id
    }

    fn validate(&self) -> DomainResult<()> {
        Validate::validate(self)?;
        Ok(())
    }
}
