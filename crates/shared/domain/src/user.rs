//! User domain entity and related types.

use crate::constants::{FIELD_ROLE_ID, FIELD_USER_USERNAME, USER_TOKEN_PREFIX};
use crate::error::{DomainError, DomainResult};
use crate::role::Role;
use crate::token::TokenGenerator;

/// Optional profile columns kept on the user record.
///
/// Registration leaves all of them empty; they are filled by other
/// workflows (local sign-up, social login, refresh token rotation).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserProfile {
    pub email: Option<String>,
    pub password: Option<String>,
    pub phone_number: Option<String>,
    pub current_hashed_refresh_token: Option<String>,
    pub kakao_id: Option<String>,
}

/// User domain entity
///
/// `user_token` is generated exactly once, when a new user is constructed,
/// and is never accepted from outside. `username` cannot change afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: Option<i64>,
    user_token: String,
    username: String,
    profile: UserProfile,
    roles: Vec<Role>,
}

impl User {
    /// Create a new, not yet stored user and issue its token.
    ///
    /// # Errors
    /// Returns `DomainError::InvalidParameter("User.username")` when
    /// `username` is absent. No length or format checks happen here.
    pub fn new(username: Option<String>, tokens: &dyn TokenGenerator) -> DomainResult<Self> {
        let username =
            username.ok_or_else(|| DomainError::invalid_parameter(FIELD_USER_USERNAME))?;

        Ok(Self {
            id: None,
            user_token: tokens.generate(USER_TOKEN_PREFIX),
            username,
            profile: UserProfile::default(),
            roles: Vec::new(),
        })
    }

    /// Rebuild a user loaded from storage, token included.
    pub fn restore(
        id: i64,
        user_token: String,
        username: String,
        profile: UserProfile,
        roles: Vec<Role>,
    ) -> Self {
        Self {
            id: Some(id),
            user_token,
            username,
            profile,
            roles,
        }
    }

    /// Storage identity, `None` until the user has been stored
    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub fn user_token(&self) -> &str {
        &self.user_token
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    /// Consume the user, returning its token
    pub fn into_user_token(self) -> String {
        self.user_token
    }

    /// Associate a stored role with this user.
    ///
    /// Assigning the same role twice is a no-op.
    ///
    /// # Errors
    /// Returns `DomainError::InvalidParameter("Role.id")` if the role has not
    /// been stored yet.
    pub fn assign_role(&mut self, role: Role) -> DomainResult<()> {
        let role_id = role
            .id()
            .ok_or_else(|| DomainError::invalid_parameter(FIELD_ROLE_ID))?;

        if !self.roles.iter().any(|r| r.id() == Some(role_id)) {
            self.roles.push(role);
        }
        Ok(())
    }
}
