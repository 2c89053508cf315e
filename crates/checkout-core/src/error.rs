//! # Error Types
//!
//! Domain error taxonomy for the checkout core.
//!
//! ## Error Flow
//! ```text
//! ValidationError → CoreError → (web layer translates to status signaling)
//! DbError (checkout-db) → CoreError::{Conflict, Store}
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (username, item id)
//! 3. Errors are enum variants, never bare strings
//! 4. Every failure is a normal, expected outcome of bad input or missing
//!    data; there is no fatal class and the core never retries

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Referenced user does not exist (unknown or blank username, or
    /// unknown id).
    #[error("User not found: {0}")]
    UserNotFound(String),

    /// Referenced catalog item does not exist.
    #[error("Item not found: {0}")]
    ItemNotFound(String),

    /// Malformed registration or cart input.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Store-level duplicate or concurrent-update detection.
    #[error("Conflict on {entity}: {detail}")]
    Conflict { entity: String, detail: String },

    /// Store or catalog infrastructure failure, passed through untouched.
    #[error("Store error: {0}")]
    Store(String),

    /// Credential hashing failed.
    #[error("Credential error: {0}")]
    Credential(String),
}

impl CoreError {
    /// Creates a UserNotFound error for a username or id.
    pub fn user_not_found(who: impl Into<String>) -> Self {
        CoreError::UserNotFound(who.into())
    }

    /// Creates an ItemNotFound error for an id or a name.
    pub fn item_not_found(what: impl Into<String>) -> Self {
        CoreError::ItemNotFound(what.into())
    }

    /// Creates a Conflict error.
    pub fn conflict(entity: impl Into<String>, detail: impl Into<String>) -> Self {
        CoreError::Conflict {
            entity: entity.into(),
            detail: detail.into(),
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised before any business logic runs; a request failing validation
/// never reaches the store.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too short.
    #[error("{field} must be at least {min} characters")]
    TooShort { field: String, min: usize },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Two fields that must agree do not (password confirmation).
    #[error("{field} does not match its confirmation")]
    Mismatch { field: String },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================
