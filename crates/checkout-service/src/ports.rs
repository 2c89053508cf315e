//! # Collaborator Ports
//!
//! Trait boundaries for everything the services need from the outside
//! world. Production implementations live in checkout-db (store, catalog)
//! and [`crate::hasher`] (credentials); tests substitute hand-rolled mocks.
//!
//! Store and catalog calls are treated as synchronous from the caller's
//! point of view: no internal timeout or cancellation logic, no retries.
//! That policy belongs to the web layer above.

use async_trait::async_trait;

use checkout_core::{Cart, CoreResult, Item, User};

// =============================================================================
// Catalog Lookup
// =============================================================================

/// Read-only source of purchasable item records.
#[async_trait]
pub trait CatalogLookup: Send + Sync {
    /// Find an item by its catalog id.
    async fn find_item(&self, id: i64) -> CoreResult<Option<Item>>;

    /// Find all items carrying the given name (names are not unique).
    async fn find_items_by_name(&self, name: &str) -> CoreResult<Vec<Item>>;

    /// List the whole catalog.
    async fn list_items(&self) -> CoreResult<Vec<Item>>;
}

// =============================================================================
// User/Cart Store
// =============================================================================

/// Durable storage for User and Cart aggregates.
///
/// ## Concurrency
/// Concurrent mutations of the *same* user's cart require the store to
/// provide read-modify-write atomicity (row locking or optimistic
/// versioning); the cart engine itself is stateless and does not serialize
/// access.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Find a user by username. Blank or unknown usernames yield `None`.
    async fn find_by_username(&self, username: &str) -> CoreResult<Option<User>>;

    /// Find a user by id.
    async fn find_by_id(&self, id: i64) -> CoreResult<Option<User>>;

    /// Persist a new user (and transitively their cart). Returns the
    /// persisted form with store-assigned ids.
    async fn save_user(&self, user: User) -> CoreResult<User>;

    /// Persist a cart's current items and total. Returns the persisted
    /// form.
    async fn save_cart(&self, cart: Cart) -> CoreResult<Cart>;
}

// =============================================================================
// Credential Hasher
// =============================================================================

/// One-way, salted transform of a plaintext password into a stored
/// credential string, plus the paired verifier.
///
/// Stateless; two calls with the same plaintext need not produce identical
/// output (salted), but `verify` must succeed for previously hashed input.
pub trait CredentialHasher: Send + Sync {
    /// Hash a plaintext password for storage.
    fn hash(&self, plaintext: &str) -> CoreResult<String>;

    /// Verify a plaintext password against a stored credential.
    fn verify(&self, plaintext: &str, stored: &str) -> bool;
}
