//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// Tokens
// =============================================================================

/// Prefix of every token issued to a user at registration
pub const USER_TOKEN_PREFIX: &str = "user_";

/// Number of random alphanumeric characters following the token prefix
pub const TOKEN_RANDOM_LENGTH: usize = 20;

// =============================================================================
// Field identifiers
// =============================================================================

/// Field reported when a user is constructed without a username
pub const FIELD_USER_USERNAME: &str = "User.username";

/// Field reported when a role is constructed without a name
pub const FIELD_ROLE_NAME: &str = "Role.name";

/// Field reported when an unsaved role is assigned to a user
pub const FIELD_ROLE_ID: &str = "Role.id";
