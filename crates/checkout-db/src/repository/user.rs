//! # User Repository
//!
//! Persistence for the User aggregate and its owned cart.
//!
//! ## Aggregate Shape
//! ```text
//! users (1) ── carts (1) ── cart_items (N, ordered, one row per unit)
//!                                │
//!                                └── items (catalog, read-only here)
//! ```
//!
//! A user row and its cart row are written in one transaction, so the
//! "persisted user always has a cart" invariant holds in the database as
//! well as in memory. Saving a cart rewrites its entry rows and stored
//! total atomically.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{Sqlite, SqlitePool, Transaction};
use tracing::debug;

use checkout_core::{Cart, CoreResult, Item, User};
use checkout_service::UserStore;

use crate::error::{DbError, DbResult};

/// Database row for a user.
#[derive(Debug, Clone, sqlx::FromRow)]
struct UserRow {
    id: i64,
    username: String,
    password: String,
    salt: Option<String>,
    created_at: DateTime<Utc>,
}

/// Database row for a cart.
#[derive(Debug, Clone, sqlx::FromRow)]
struct CartRow {
    id: i64,
    user_id: i64,
    total_cents: i64,
}

/// Database row for a cart entry joined with its catalog item.
#[derive(Debug, Clone, sqlx::FromRow)]
struct CartEntryRow {
    id: i64,
    name: String,
    description: String,
    price_cents: i64,
    created_at: DateTime<Utc>,
}

impl From<CartEntryRow> for Item {
    fn from(row: CartEntryRow) -> Self {
        Item {
            id: row.id,
            name: row.name,
            description: row.description,
            price_cents: row.price_cents,
            created_at: row.created_at,
        }
    }
}

/// Repository for user and cart persistence.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    /// Creates a new UserRepository.
    pub fn new(pool: SqlitePool) -> Self {
        UserRepository { pool }
    }

    /// Fetches a user (with cart) by username. Unknown or blank usernames
    /// yield `None`.
    pub async fn get_by_username(&self, username: &str) -> DbResult<Option<User>> {
        debug!(username = %username, "Fetching user by username");

        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, username, password, salt, created_at
             FROM users WHERE username = ?",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => Ok(Some(self.hydrate(row).await?)),
            None => Ok(None),
        }
    }

    /// Fetches a user (with cart) by id.
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<User>> {
        debug!(user_id = id, "Fetching user by id");

        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, username, password, salt, created_at
             FROM users WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => Ok(Some(self.hydrate(row).await?)),
            None => Ok(None),
        }
    }

    /// Inserts a new user together with their cart, in one transaction.
    ///
    /// ## Returns
    /// The persisted user with store-assigned ids.
    pub async fn create(&self, user: &User) -> DbResult<User> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            "INSERT INTO users (username, password, salt, created_at)
             VALUES (?, ?, ?, ?)",
        )
        .bind(&user.username)
        .bind(&user.password)
        .bind(&user.salt)
        .bind(user.created_at)
        .execute(&mut *tx)
        .await?;
        let user_id = result.last_insert_rowid();

        let result = sqlx::query("INSERT INTO carts (user_id, total_cents) VALUES (?, ?)")
            .bind(user_id)
            .bind(user.cart.total_cents)
            .execute(&mut *tx)
            .await?;
        let cart_id = result.last_insert_rowid();

        // Registration carts are empty; the loop covers the general case.
        write_entries(&mut tx, cart_id, &user.cart.items).await?;

        tx.commit().await?;

        debug!(user_id, cart_id, username = %user.username, "User persisted");

        let mut persisted = user.clone();
        persisted.id = user_id;
        persisted.cart.id = cart_id;
        persisted.cart.user_id = Some(user_id);
        Ok(persisted)
    }

    /// Rewrites a cart's entries and stored total in one transaction.
    ///
    /// ## Returns
    /// The persisted cart.
    pub async fn save_cart(&self, cart: &Cart) -> DbResult<Cart> {
        let cart_id = self.resolve_cart_id(cart).await?;

        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM cart_items WHERE cart_id = ?")
            .bind(cart_id)
            .execute(&mut *tx)
            .await?;

        write_entries(&mut tx, cart_id, &cart.items).await?;

        sqlx::query("UPDATE carts SET total_cents = ? WHERE id = ?")
            .bind(cart.total_cents)
            .bind(cart_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        debug!(cart_id, entries = cart.items.len(), total_cents = cart.total_cents, "Cart persisted");

        let mut persisted = cart.clone();
        persisted.id = cart_id;
        Ok(persisted)
    }

    /// Loads the cart for a user row and assembles the aggregate.
    async fn hydrate(&self, row: UserRow) -> DbResult<User> {
        let cart_row = sqlx::query_as::<_, CartRow>(
            "SELECT id, user_id, total_cents FROM carts WHERE user_id = ?",
        )
        .bind(row.id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| {
            // Broken invariant: every persisted user has a cart.
            DbError::Internal(format!("user {} has no cart", row.id))
        })?;

        let entries = sqlx::query_as::<_, CartEntryRow>(
            "SELECT i.id, i.name, i.description, i.price_cents, i.created_at
             FROM cart_items ci
             JOIN items i ON i.id = ci.item_id
             WHERE ci.cart_id = ?
             ORDER BY ci.position",
        )
        .bind(cart_row.id)
        .fetch_all(&self.pool)
        .await?;

        Ok(User {
            id: row.id,
            username: row.username,
            password: row.password,
            salt: row.salt,
            cart: Cart {
                id: cart_row.id,
                user_id: Some(cart_row.user_id),
                items: entries.into_iter().map(Item::from).collect(),
                total_cents: cart_row.total_cents,
            },
            created_at: row.created_at,
        })
    }

    /// Resolves a cart's row id from the cart itself or its owning user.
    async fn resolve_cart_id(&self, cart: &Cart) -> DbResult<i64> {
        if cart.id != 0 {
            return Ok(cart.id);
        }

        let user_id = cart
            .user_id
            .ok_or_else(|| DbError::Internal("cart has neither id nor owner".to_string()))?;

        let row = sqlx::query_as::<_, CartRow>(
            "SELECT id, user_id, total_cents FROM carts WHERE user_id = ?",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.id)
            .ok_or_else(|| DbError::not_found("Cart", format!("user {user_id}")))
    }
}

/// Inserts one row per cart entry, preserving order via `position`.
async fn write_entries(
    tx: &mut Transaction<'_, Sqlite>,
    cart_id: i64,
    items: &[Item],
) -> DbResult<()> {
    for (position, item) in items.iter().enumerate() {
        sqlx::query("INSERT INTO cart_items (cart_id, item_id, position) VALUES (?, ?, ?)")
            .bind(cart_id)
            .bind(item.id)
            .bind(position as i64)
            .execute(&mut **tx)
            .await?;
    }
    Ok(())
}

// =============================================================================
// Port Implementation
// =============================================================================

#[async_trait]
impl UserStore for UserRepository {
    async fn find_by_username(&self, username: &str) -> CoreResult<Option<User>> {
        Ok(self.get_by_username(username).await?)
    }

    async fn find_by_id(&self, id: i64) -> CoreResult<Option<User>> {
        Ok(self.get_by_id(id).await?)
    }

    async fn save_user(&self, user: User) -> CoreResult<User> {
        Ok(self.create(&user).await?)
    }

    async fn save_cart(&self, cart: Cart) -> CoreResult<Cart> {
        Ok(self.save_cart(&cart).await?)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
