//! # Domain Types
//!
//! Core domain types for the checkout system.
//!
//! ## Identity
//! Every persisted entity carries a store-assigned `i64` id. A freshly
//! constructed, not-yet-persisted aggregate uses id `0`; the store replaces
//! it on save and returns the persisted form.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::cart::Cart;
use crate::money::Money;

// =============================================================================
// Item
// =============================================================================

/// A purchasable catalog entry.
///
/// Immutable after creation; the cart engine only reads items, never mutates
/// or owns them. Names are non-empty but not guaranteed unique.
#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Unique identifier, assigned by the catalog store.
    pub id: i64,

    /// Display name (non-empty, not necessarily unique).
    pub name: String,

    /// Free-form description.
    pub description: String,

    /// Price in cents (non-negative).
    pub price_cents: i64,

    /// When the item was created in the catalog.
    pub created_at: DateTime<Utc>,
}

impl Item {
    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

/// Item equality is defined by id alone.
///
/// Carts hold item references that may be re-fetched from the catalog
/// between an add and a remove; two fetches of the same item must compare
/// equal even if timestamps or descriptions drifted.
impl PartialEq for Item {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

// =============================================================================
// User
// =============================================================================

/// An account aggregate.
///
/// ## Invariant
/// A persisted User always owns exactly one Cart; the cart is created empty
/// at registration and lives and dies with the user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier, assigned by the store.
    pub id: i64,

    /// Unique, non-empty login name.
    pub username: String,

    /// Stored credential. After registration this is always the hashed
    /// form, never plaintext.
    pub password: String,

    /// Optional salt adjunct. `None` under PHC-style hashes, which embed
    /// the salt in the credential string itself.
    pub salt: Option<String>,

    /// The user's cart (owned 1:1).
    pub cart: Cart,

    /// When the account was created.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Builds a not-yet-persisted user with an empty cart.
    ///
    /// The store assigns `id` (and the cart's id) on save.
    pub fn new(username: impl Into<String>, password_hash: impl Into<String>) -> Self {
        User {
            id: 0,
            username: username.into(),
            password: password_hash.into(),
            salt: None,
            cart: Cart::new(),
            created_at: Utc::now(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
