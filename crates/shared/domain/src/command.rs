//! Commands - transient, request-scoped intents that turn into entities.

use crate::error::DomainResult;
use crate::role::Role;
use crate::token::TokenGenerator;
use crate::user::User;

/// Request to register a new user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterUser {
    pub username: Option<String>,
}

impl RegisterUser {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
        }
    }

    /// Build the unsaved user entity, issuing its token.
    pub fn into_entity(self, tokens: &dyn TokenGenerator) -> DomainResult<User> {
        User::new(self.username, tokens)
    }
}

/// Request to store a named role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveRole {
    pub name: Option<String>,
}

impl SaveRole {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }

    /// Build the unsaved role entity.
    pub fn into_entity(self) -> DomainResult<Role> {
        Role::new(self.name)
    }
}
