//! # Argon2 Credential Hasher
//!
//! Production implementation of [`CredentialHasher`] using argon2 with a
//! per-hash random salt. The salt is embedded in the PHC-format credential
//! string, so no separate salt column is needed for verification.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use checkout_core::{CoreError, CoreResult};

use crate::ports::CredentialHasher;

/// Salted adaptive credential hasher backed by argon2 defaults.
#[derive(Debug, Clone, Copy, Default)]
pub struct Argon2Hasher;

impl Argon2Hasher {
    /// Creates a new hasher.
    pub fn new() -> Self {
        Argon2Hasher
    }
}

impl CredentialHasher for Argon2Hasher {
    fn hash(&self, plaintext: &str) -> CoreResult<String> {
        let salt = SaltString::generate(&mut OsRng);

        let hash = Argon2::default()
            .hash_password(plaintext.as_bytes(), &salt)
            .map_err(|e| CoreError::Credential(format!("failed to hash password: {e}")))?;

        Ok(hash.to_string())
    }

    fn verify(&self, plaintext: &str, stored: &str) -> bool {
        let parsed_hash = match PasswordHash::new(stored) {
            Ok(h) => h,
            Err(_) => return false,
        };

        Argon2::default()
            .verify_password(plaintext.as_bytes(), &parsed_hash)
            .is_ok()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_verify_round_trip() {
        let hasher = Argon2Hasher::new();
        let stored = hasher.hash("Password").unwrap();

        assert!(hasher.verify("Password", &stored));
        assert!(!hasher.verify("password", &stored));
    }

    #[test]
    fn test_hashes_are_salted() {
        let hasher = Argon2Hasher::new();
        let first = hasher.hash("Password").unwrap();
        let second = hasher.hash("Password").unwrap();

        // Same plaintext, different salt, different credential strings.
        assert_ne!(first, second);
        assert!(hasher.verify("Password", &first));
        assert!(hasher.verify("Password", &second));
    }

    #[test]
    fn test_verify_rejects_malformed_credential() {
        let hasher = Argon2Hasher::new();
        assert!(!hasher.verify("Password", "not-a-phc-string"));
        assert!(!hasher.verify("Password", ""));
    }

    #[test]
    fn test_credential_never_contains_plaintext() {
        let hasher = Argon2Hasher::new();
        let stored = hasher.hash("Password").unwrap();
        assert!(!stored.contains("Password"));
    }
}
