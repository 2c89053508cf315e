//! # checkout-service: Service Layer for Checkout
//!
//! Orchestrates the pure core (checkout-core) against injected
//! collaborators. Services never perform I/O directly; every lookup and
//! save goes through a port, so any store, catalog, or hasher can be
//! substituted, which is exactly how the tests exercise them.
//!
//! ## Modules
//!
//! - [`ports`] - Collaborator traits (catalog lookup, user/cart store,
//!   credential hasher)
//! - [`users`] - Registration and user lookup
//! - [`cart`] - Add-to-cart / remove-from-cart orchestration
//! - [`items`] - Catalog read accessors
//! - [`hasher`] - Argon2 credential hasher

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod hasher;
pub mod items;
pub mod ports;
pub mod users;

#[cfg(test)]
mod testing;

// =============================================================================
// Re-exports
// =============================================================================

pub use cart::CartService;
pub use hasher::Argon2Hasher;
pub use items::ItemService;
pub use ports::{CatalogLookup, CredentialHasher, UserStore};
pub use users::UserService;
