//! # Item Repository
//!
//! Catalog reads, plus the create used by seeding. Items are immutable
//! after creation; there is no update path.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use tracing::debug;

use checkout_core::{CoreResult, Item};
use checkout_service::CatalogLookup;

use crate::error::DbResult;

/// Database row for an item.
#[derive(Debug, Clone, sqlx::FromRow)]
struct ItemRow {
    id: i64,
    name: String,
    description: String,
    price_cents: i64,
    created_at: DateTime<Utc>,
}

impl From<ItemRow> for Item {
    fn from(row: ItemRow) -> Self {
        Item {
            id: row.id,
            name: row.name,
            description: row.description,
            price_cents: row.price_cents,
            created_at: row.created_at,
        }
    }
}

/// Repository for catalog item operations.
#[derive(Debug, Clone)]
pub struct ItemRepository {
    pool: SqlitePool,
}

impl ItemRepository {
    /// Creates a new ItemRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ItemRepository { pool }
    }

    /// Fetches an item by id.
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Item>> {
        debug!(item_id = id, "Fetching item by id");

        let row = sqlx::query_as::<_, ItemRow>(
            "SELECT id, name, description, price_cents, created_at
             FROM items WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Item::from))
    }

    /// Fetches all items carrying the given name.
    pub async fn get_by_name(&self, name: &str) -> DbResult<Vec<Item>> {
        debug!(name = %name, "Fetching items by name");

        let rows = sqlx::query_as::<_, ItemRow>(
            "SELECT id, name, description, price_cents, created_at
             FROM items WHERE name = ? ORDER BY id",
        )
        .bind(name)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Item::from).collect())
    }

    /// Lists the whole catalog.
    pub async fn list(&self) -> DbResult<Vec<Item>> {
        let rows = sqlx::query_as::<_, ItemRow>(
            "SELECT id, name, description, price_cents, created_at
             FROM items ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Item::from).collect())
    }

    /// Inserts a new catalog item and returns its persisted form.
    pub async fn create(
        &self,
        name: &str,
        description: &str,
        price_cents: i64,
    ) -> DbResult<Item> {
        let created_at = Utc::now();

        let result = sqlx::query(
            "INSERT INTO items (name, description, price_cents, created_at)
             VALUES (?, ?, ?, ?)",
        )
        .bind(name)
        .bind(description)
        .bind(price_cents)
        .bind(created_at)
        .execute(&self.pool)
        .await?;

        Ok(Item {
            id: result.last_insert_rowid(),
            name: name.to_string(),
            description: description.to_string(),
            price_cents,
            created_at,
        })
    }
}

// =============================================================================
// Port Implementation
// =============================================================================

#[async_trait]
impl CatalogLookup for ItemRepository {
    async fn find_item(&self, id: i64) -> CoreResult<Option<Item>> {
        Ok(self.get_by_id(id).await?)
    }

    async fn find_items_by_name(&self, name: &str) -> CoreResult<Vec<Item>> {
        Ok(self.get_by_name(name).await?)
    }

    async fn list_items(&self) -> CoreResult<Vec<Item>> {
        Ok(self.list().await?)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
