//! Opaque token generation.
//!
//! Tokens are the only externally visible identifier of a user and nothing
//! else in the system checks them for uniqueness, so they are drawn from a
//! cryptographically secure generator.

use rand::{distributions::Alphanumeric, Rng};

use crate::constants::TOKEN_RANDOM_LENGTH;

/// Source of opaque identifiers.
///
/// Injected into use cases so callers can swap the randomness source.
pub trait TokenGenerator: Send + Sync {
    /// Produce a fresh random token starting with `prefix`.
    fn generate(&self, prefix: &str) -> String;
}

/// Token generator backed by the thread-local CSPRNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomTokenGenerator;

impl RandomTokenGenerator {
    /// Random alphanumeric characters appended to `prefix`.
    pub fn random_character_with_prefix(prefix: &str) -> String {
        let mut token = String::with_capacity(prefix.len() + TOKEN_RANDOM_LENGTH);
        token.push_str(prefix);
        token.extend(
            rand::thread_rng()
                .sample_iter(&Alphanumeric)
                .take(TOKEN_RANDOM_LENGTH)
                .map(char::from),
        );
        token
    }
}

impl TokenGenerator for RandomTokenGenerator {
    fn generate(&self, prefix: &str) -> String {
        Self::random_character_with_prefix(prefix)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::constants::USER_TOKEN_PREFIX;

    #[test]
    fn test_token_starts_with_prefix() {
        let token = RandomTokenGenerator.generate(USER_TOKEN_PREFIX);
        assert!(token.starts_with("user_"));
        assert_eq!(token.len(), USER_TOKEN_PREFIX.len() + TOKEN_RANDOM_LENGTH);
    }

    #[test]
    fn test_token_suffix_is_alphanumeric() {
        let token = RandomTokenGenerator::random_character_with_prefix("role_");
        let suffix = &token["role_".len()..];
        assert!(suffix.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_empty_prefix() {
        let token = RandomTokenGenerator.generate("");
        assert_eq!(token.len(), TOKEN_RANDOM_LENGTH);
    }

    #[test]
    fn test_tokens_do_not_repeat() {
        let tokens: HashSet<String> = (0..1_000)
            .map(|_| RandomTokenGenerator.generate(USER_TOKEN_PREFIX))
            .collect();
        assert_eq!(tokens.len(), 1_000);
    }
}
