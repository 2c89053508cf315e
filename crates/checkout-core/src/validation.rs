//! # Validation Module
//!
//! Input validation rules for registration and cart mutation.
//!
//! ## Validation Strategy
//! Validation runs at the service boundary, before any store or catalog
//! lookup; a request that fails here produces no side effects at all.
//! The database adds a second layer (NOT NULL, UNIQUE, CHECK constraints).

use crate::error::{ValidationError, ValidationResult};
use crate::{DEFAULT_MIN_PASSWORD_LEN, MAX_ITEM_QUANTITY};

// =============================================================================
// Password Policy
// =============================================================================

/// Registration password policy.
///
/// The minimum length is a policy constant, not a property of any hashing
/// library; services take the policy by value so deployments can tune it.
#[derive(Debug, Clone, Copy)]
pub struct PasswordPolicy {
    /// Minimum accepted password length in characters.
    pub min_length: usize,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        PasswordPolicy {
            min_length: DEFAULT_MIN_PASSWORD_LEN,
        }
    }
}

impl PasswordPolicy {
    /// Validates a password and its confirmation.
    ///
    /// ## Rules
    /// 1. `password` and `confirm` must match exactly (case-sensitive,
    ///    byte-exact)
    /// 2. `password` must be at least `min_length` characters
    pub fn validate(&self, password: &str, confirm: &str) -> ValidationResult<()> {
        if password != confirm {
            return Err(ValidationError::Mismatch {
                field: "password".to_string(),
            });
        }

        if password.chars().count() < self.min_length {
            return Err(ValidationError::TooShort {
                field: "password".to_string(),
                min: self.min_length,
            });
        }

        Ok(())
    }
}

// =============================================================================
// Quantity Policy
// =============================================================================

/// Cart mutation quantity policy.
///
/// The upper bound guards against accidental over-ordering (1000 instead
/// of 10); deployments that take bulk orders can raise it per service.
#[derive(Debug, Clone, Copy)]
pub struct QuantityPolicy {
    /// Maximum number of repeated add/remove operations per request.
    pub max_quantity: i64,
}

impl Default for QuantityPolicy {
    fn default() -> Self {
        QuantityPolicy {
            max_quantity: MAX_ITEM_QUANTITY,
        }
    }
}

impl QuantityPolicy {
    /// Validates a cart mutation quantity.
    ///
    /// ## Rules
    /// 1. Must be positive (> 0)
    /// 2. Must not exceed `max_quantity`
    pub fn validate(&self, qty: i64) -> ValidationResult<()> {
        if qty <= 0 {
            return Err(ValidationError::MustBePositive {
                field: "quantity".to_string(),
            });
        }

        if qty > self.max_quantity {
            return Err(ValidationError::OutOfRange {
                field: "quantity".to_string(),
                min: 1,
                max: self.max_quantity,
            });
        }

        Ok(())
    }
}

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a username.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must be at most 64 characters
pub fn validate_username(username: &str) -> ValidationResult<()> {
    let username = username.trim();

    if username.is_empty() {
        return Err(ValidationError::Required {
            field: "username".to_string(),
        });
    }

    if username.chars().count() > 64 {
        return Err(ValidationError::TooLong {
            field: "username".to_string(),
            max: 64,
        });
    }

    Ok(())
}

/// Validates a cart mutation quantity against the default policy.
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    QuantityPolicy::default().validate(qty)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_mismatch_is_rejected() {
        let policy = PasswordPolicy::default();
        let err = policy.validate("Password", "password").unwrap_err();
        assert!(matches!(err, ValidationError::Mismatch { .. }));
    }

    #[test]
    fn test_password_length_boundary() {
        let policy = PasswordPolicy::default();

        // 6 characters: rejected.
        assert!(matches!(
            policy.validate("abcdef", "abcdef"),
            Err(ValidationError::TooShort { min: 7, .. })
        ));

        // 7 characters: accepted.
        assert!(policy.validate("abcdefg", "abcdefg").is_ok());
    }

    #[test]
    fn test_mismatch_checked_before_length() {
        // Both too short and mismatched; mismatch wins.
        let policy = PasswordPolicy::default();
        let err = policy.validate("abc", "abd").unwrap_err();
        assert!(matches!(err, ValidationError::Mismatch { .. }));
    }

    #[test]
    fn test_custom_policy_threshold() {
        let policy = PasswordPolicy { min_length: 12 };
        assert!(policy.validate("elevenchars", "elevenchars").is_err());
        assert!(policy.validate("twelve chars", "twelve chars").is_ok());
    }

    #[test]
    fn test_validate_username() {
        assert!(validate_username("Username").is_ok());
        assert!(validate_username("").is_err());
        assert!(validate_username("   ").is_err());
        assert!(validate_username(&"a".repeat(64)).is_ok());
        assert!(validate_username(&"a".repeat(65)).is_err());
    }

    #[test]
    fn test_username_length_counts_characters_not_bytes() {
        // 33 two-byte characters: 66 bytes, well under the 64-char cap.
        assert!(validate_username(&"ü".repeat(33)).is_ok());
        assert!(validate_username(&"ü".repeat(65)).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(999).is_ok());

        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
        assert!(validate_quantity(1000).is_err());
    }

    #[test]
    fn test_custom_quantity_cap() {
        let policy = QuantityPolicy { max_quantity: 5000 };
        assert!(policy.validate(1000).is_ok());
        assert!(policy.validate(5000).is_ok());
        assert!(matches!(
            policy.validate(5001),
            Err(ValidationError::OutOfRange { max: 5000, .. })
        ));
        assert!(policy.validate(0).is_err());
    }
}
