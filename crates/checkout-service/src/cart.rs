//! # Cart Mutation Service
//!
//! Orchestrates one cart-modification request end-to-end.
//!
//! ## Request Flow
//! ```text
//! ModifyCartRequest { username, itemId, quantity }
//!      │
//!      ▼
//! validate quantity (positive, capped)          → Validation error
//!      │
//!      ▼
//! UserStore::find_by_username                   → UserNotFound
//!      │   (short-circuits: the catalog is never read for an
//!      │    unknown user)
//!      ▼
//! CatalogLookup::find_item                      → ItemNotFound
//!      │
//!      ▼
//! Cart::apply(item, quantity, action)           — pure engine
//!      │
//!      ▼
//! UserStore::save_cart → persisted Cart (updated total)
//! ```
//!
//! No partial persistence: if any lookup fails, `save_cart` is never
//! invoked.

use tracing::{debug, info, warn};

use checkout_core::{Cart, CartAction, CoreError, CoreResult, ModifyCartRequest, QuantityPolicy};

use crate::ports::{CatalogLookup, UserStore};

/// Add/remove orchestration over an injected store and catalog.
#[derive(Debug, Clone)]
pub struct CartService<S, C> {
    store: S,
    catalog: C,
    policy: QuantityPolicy,
}

impl<S, C> CartService<S, C>
where
    S: UserStore,
    C: CatalogLookup,
{
    /// Creates a cart service with the default quantity policy.
    pub fn new(store: S, catalog: C) -> Self {
        Self::with_policy(store, catalog, QuantityPolicy::default())
    }

    /// Creates a cart service with an explicit quantity policy.
    pub fn with_policy(store: S, catalog: C, policy: QuantityPolicy) -> Self {
        CartService {
            store,
            catalog,
            policy,
        }
    }

    /// Adds `quantity` units of an item to the named user's cart.
    ///
    /// ## Returns
    /// The persisted cart, updated total included.
    pub async fn add_to_cart(&self, request: &ModifyCartRequest) -> CoreResult<Cart> {
        self.modify(request, CartAction::Add).await
    }

    /// Removes up to `quantity` units of an item from the named user's
    /// cart. Units beyond what the cart holds are a no-op, not an error.
    pub async fn remove_from_cart(&self, request: &ModifyCartRequest) -> CoreResult<Cart> {
        self.modify(request, CartAction::Remove).await
    }

    async fn modify(&self, request: &ModifyCartRequest, action: CartAction) -> CoreResult<Cart> {
        debug!(
            username = %request.username,
            item_id = request.item_id,
            quantity = request.quantity,
            ?action,
            "modify cart request"
        );

        self.policy.validate(request.quantity)?;

        // User check first: an unknown user never triggers a catalog read.
        let mut user = match self.store.find_by_username(&request.username).await? {
            Some(user) => user,
            None => {
                warn!(username = %request.username, "Cart request for unknown user");
                return Err(CoreError::user_not_found(&request.username));
            }
        };

        let item = self
            .catalog
            .find_item(request.item_id)
            .await?
            .ok_or_else(|| CoreError::item_not_found(format!("id {}", request.item_id)))?;

        user.cart.apply(&item, request.quantity, action);

        let persisted = self.store.save_cart(user.cart).await?;

        info!(
            username = %request.username,
            item_id = item.id,
            quantity = request.quantity,
            ?action,
            total = %persisted.total(),
            "Cart updated"
        );

        Ok(persisted)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
