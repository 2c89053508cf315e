//! # checkout-core: Pure Business Logic for Checkout
//!
//! This crate is the heart of the system. It contains the cart engine,
//! money arithmetic, and registration validation rules as pure functions
//! with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Web layer (out of scope)                                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  checkout-service  — registration + cart mutation orchestration         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  checkout-core (THIS CRATE)                                             │
//! │    money • types • cart • validation • error                            │
//! │    NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS                   │
//! │       ▲                                                                 │
//! │       │                                                                 │
//! │  checkout-db — SQLite store implementing the service ports              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Item, User)
//! - [`cart`] - Cart engine: item mutation with full total resummation
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`requests`] - Transient request inputs (not persisted)
//! - [`validation`] - Registration and quantity validation rules
//! - [`error`] - Domain error types

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod requests;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartAction};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use requests::{CreateUserRequest, ModifyCartRequest};
pub use types::{Item, User};
pub use validation::{PasswordPolicy, QuantityPolicy};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Default minimum password length for registration.
///
/// Policy constant, not tied to any hashing library. Callers can override it
/// through [`PasswordPolicy`].
pub const DEFAULT_MIN_PASSWORD_LEN: usize = 7;

/// Default maximum number of repeated add/remove operations a single cart
/// request may apply. Guards against accidental over-ordering (1000
/// instead of 10); override through [`QuantityPolicy`].
pub const MAX_ITEM_QUANTITY: i64 = 999;
