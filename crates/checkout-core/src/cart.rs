//! # Cart Engine
//!
//! Pure, side-effect-free mutation of a cart's item list with running total
//! maintenance.
//!
//! ## Invariant
//! `total == sum(item.price for item in items)` at every observable point.
//! The total is recomputed by full resummation after every mutation, never
//! incrementally adjusted, so it cannot drift from the item list.
//!
//! ## Duplicates
//! The item list is an ordered sequence and duplicates are allowed: one
//! entry per unit purchased. Removing matches exactly one occurrence.

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::Item;

// =============================================================================
// Cart Action
// =============================================================================

/// Direction of a cart mutation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CartAction {
    /// Append units of an item.
    Add,
    /// Remove units of an item.
    Remove,
}

// =============================================================================
// Cart
// =============================================================================

/// One user's pending purchase selection.
///
/// Created empty when a user is registered, exclusively owned by that user
/// for its entire lifetime.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Unique identifier, assigned by the store.
    pub id: i64,

    /// Owning user's id. Back-reference only; ownership is always derived
    /// from the user side.
    pub user_id: Option<i64>,

    /// Ordered item entries, one per unit.
    pub items: Vec<Item>,

    /// Running total in cents. Maintained by this module only.
    pub total_cents: i64,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart::default()
    }

    /// Returns the running total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }

    /// Appends one unit of `item` and recomputes the total.
    ///
    /// Always succeeds for a valid item; duplicates are expected.
    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
        self.recompute_total();
    }

    /// Removes exactly one occurrence matching `item` by id, then
    /// recomputes the total.
    ///
    /// ## Behavior
    /// An absent item is a no-op, not an error: repeated removals are safe.
    ///
    /// ## Returns
    /// Whether an occurrence was removed.
    pub fn remove_item(&mut self, item: &Item) -> bool {
        match self.items.iter().position(|i| i.id == item.id) {
            Some(index) => {
                self.items.remove(index);
                self.recompute_total();
                true
            }
            None => false,
        }
    }

    /// Applies `add_item`/`remove_item` exactly `quantity` times.
    ///
    /// ## Caller Contract
    /// `quantity` must be positive; the mutation service validates it
    /// before delegating here.
    pub fn apply(&mut self, item: &Item, quantity: i64, action: CartAction) {
        for _ in 0..quantity {
            match action {
                CartAction::Add => self.add_item(item.clone()),
                CartAction::Remove => {
                    self.remove_item(item);
                }
            }
        }
    }

    /// Recomputes the total as a full resummation of current item prices.
    fn recompute_total(&mut self) {
        let total: Money = self.items.iter().map(Item::price).sum();
        self.total_cents = total.cents();
    }

    /// Returns the number of entries (units) in the cart.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn test_item(id: i64, price_cents: i64) -> Item {
        Item {
            id,
            name: format!("Item {id}"),
            description: String::new(),
            price_cents,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_add_item_updates_total() {
        let mut cart = Cart::new();
        cart.add_item(test_item(1, 1000)); // $10.00

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total(), Money::from_cents(1000));
    }

    #[test]
    fn test_duplicates_are_separate_entries() {
        let mut cart = Cart::new();
        cart.add_item(test_item(1, 999));
        cart.add_item(test_item(1, 999));

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.total(), Money::from_cents(1998));
    }

    #[test]
    fn test_add_then_remove_round_trip() {
        let mut cart = Cart::new();
        cart.add_item(test_item(1, 500));
        let before_items = cart.items.clone();
        let before_total = cart.total();

        let item = test_item(2, 750);
        cart.add_item(item.clone());
        assert!(cart.remove_item(&item));

        assert_eq!(cart.items, before_items);
        assert_eq!(cart.total(), before_total);
    }

    #[test]
    fn test_remove_takes_one_occurrence() {
        let mut cart = Cart::new();
        let item = test_item(1, 1000);
        cart.add_item(item.clone());
        cart.add_item(item.clone());

        assert!(cart.remove_item(&item));

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total(), Money::from_cents(1000));
    }

    #[test]
    fn test_remove_absent_item_is_noop() {
        let mut cart = Cart::new();
        cart.add_item(test_item(1, 1000));

        let absent = test_item(42, 500);
        assert!(!cart.remove_item(&absent));

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total(), Money::from_cents(1000));
    }

    #[test]
    fn test_remove_matches_by_id_not_by_fields() {
        let mut cart = Cart::new();
        cart.add_item(test_item(1, 1000));

        // Re-fetched item with drifted metadata still matches by id.
        let refetched = Item {
            description: "updated copy".to_string(),
            ..test_item(1, 1000)
        };
        assert!(cart.remove_item(&refetched));
        assert!(cart.is_empty());
        assert!(cart.total().is_zero());
    }

    #[test]
    fn test_apply_quantity_batches() {
        let mut cart = Cart::new();
        let item = test_item(1, 250);

        cart.apply(&item, 4, CartAction::Add);
        assert_eq!(cart.len(), 4);
        assert_eq!(cart.total(), Money::from_cents(1000));

        cart.apply(&item, 3, CartAction::Remove);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total(), Money::from_cents(250));

        // Removing more than present drains to empty and stays a no-op.
        cart.apply(&item, 5, CartAction::Remove);
        assert!(cart.is_empty());
        assert!(cart.total().is_zero());
    }

    #[test]
    fn test_total_is_exact_over_many_mutations() {
        let mut cart = Cart::new();
        let a = test_item(1, 1099);
        let b = test_item(2, 333);

        cart.apply(&a, 100, CartAction::Add);
        cart.apply(&b, 100, CartAction::Add);
        cart.apply(&a, 50, CartAction::Remove);

        let expected: Money = cart.items.iter().map(Item::price).sum();
        assert_eq!(cart.total(), expected);
        assert_eq!(cart.total(), Money::from_cents(50 * 1099 + 100 * 333));
    }
}
