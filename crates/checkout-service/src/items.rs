//! # Item Service
//!
//! Read accessors over the catalog. No business rules live here; the
//! service only translates "absent" into the domain's NotFound error so
//! the web layer gets one consistent taxonomy.

use tracing::debug;

use checkout_core::{CoreError, CoreResult, Item};

use crate::ports::CatalogLookup;

/// Catalog read accessors.
#[derive(Debug, Clone)]
pub struct ItemService<C> {
    catalog: C,
}

impl<C> ItemService<C>
where
    C: CatalogLookup,
{
    /// Creates an item service.
    pub fn new(catalog: C) -> Self {
        ItemService { catalog }
    }

    /// Lists the whole catalog.
    pub async fn list(&self) -> CoreResult<Vec<Item>> {
        self.catalog.list_items().await
    }

    /// Looks up a single item by id.
    pub async fn find_by_id(&self, id: i64) -> CoreResult<Item> {
        debug!(item_id = id, "find item by id");
        self.catalog
            .find_item(id)
            .await?
            .ok_or_else(|| CoreError::item_not_found(format!("id {id}")))
    }

    /// Looks up items by name.
    ///
    /// Names are not unique, so this returns every match; an empty result
    /// is reported as not found.
    pub async fn find_by_name(&self, name: &str) -> CoreResult<Vec<Item>> {
        let items = self.catalog.find_items_by_name(name).await?;
        if items.is_empty() {
            return Err(CoreError::item_not_found(format!("name '{name}'")));
        }
        Ok(items)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
