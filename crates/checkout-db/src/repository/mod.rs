//! Repository implementations.
//!
//! One repository per aggregate root: users (with their carts) and catalog
//! items. Each repository owns a pool clone and implements the matching
//! checkout-service port.

pub mod item;
pub mod user;
