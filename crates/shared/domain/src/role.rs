//! Role domain entity.

use crate::constants::FIELD_ROLE_NAME;
use crate::error::{DomainError, DomainResult};

/// Named role that can be associated with many users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Role {
    id: Option<i64>,
    name: String,
}

impl Role {
    /// Create a new, not yet stored role.
    ///
    /// # Errors
    /// Returns `DomainError::InvalidParameter("Role.name")` when `name` is absent.
    pub fn new(name: Option<String>) -> DomainResult<Self> {
        let name = name.ok_or_else(|| DomainError::invalid_parameter(FIELD_ROLE_NAME))?;
        Ok(Self { id: None, name })
    }

    /// Rebuild a role loaded from storage.
    pub fn restore(id: i64, name: String) -> Self {
        Self { id: Some(id), name }
    }

    /// Storage identity, `None` until the role has been stored
    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Check if the role has been assigned an identity by the store
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_role_is_transient() {
        let role = Role::new(Some("admin".to_string())).unwrap();
        assert_eq!(role.name(), "admin");
        assert_eq!(role.id(), None);
        assert!(!role.is_persisted());
    }

    #[test]
    fn test_role_without_name_fails() {
        let err = Role::new(None).unwrap_err();
        assert_eq!(err, DomainError::InvalidParameter("Role.name".to_string()));
        assert_eq!(err.field(), "Role.name");
    }

    #[test]
    fn test_empty_name_is_accepted() {
        // Only presence is checked at this layer
        let role = Role::new(Some(String::new())).unwrap();
        assert_eq!(role.name(), "");
    }

    #[test]
    fn test_restored_role_keeps_identity() {
        let role = Role::restore(7, "member".to_string());
        assert_eq!(role.id(), Some(7));
        assert!(role.is_persisted());
    }
}
