//! Hand-rolled mock collaborators shared by the service tests.
//!
//! Mocks record call counts so tests can assert that failed operations
//! never reach the store (no partial persistence).

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;

use checkout_core::{Cart, CoreResult, Item, User};

use crate::ports::{CatalogLookup, CredentialHasher, UserStore};

// =============================================================================
// Fixtures
// =============================================================================

/// Builds a catalog item fixture.
pub fn fake_item(id: i64, price_cents: i64) -> Item {
    Item {
        id,
        name: format!("Item {id}"),
        description: "This is a fake".to_string(),
        price_cents,
        created_at: Utc::now(),
    }
}

// =============================================================================
// Mock User/Cart Store
// =============================================================================

#[derive(Default)]
struct StoreInner {
    users: Mutex<HashMap<i64, User>>,
    next_id: AtomicI64,
    save_user_calls: AtomicUsize,
    save_cart_calls: AtomicUsize,
}

/// In-memory [`UserStore`] with call counting.
#[derive(Clone, Default)]
pub struct MockStore {
    inner: Arc<StoreInner>,
}

impl MockStore {
    pub fn new() -> Self {
        MockStore::default()
    }

    /// Seeds a persisted user with an empty cart; returns the assigned id.
    pub fn insert_user(&self, username: &str, password_hash: &str) -> i64 {
        let id = self.inner.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let mut user = User::new(username, password_hash);
        user.id = id;
        user.cart.id = id;
        user.cart.user_id = Some(id);
        self.inner.users.lock().unwrap().insert(id, user);
        id
    }

    pub fn save_user_calls(&self) -> usize {
        self.inner.save_user_calls.load(Ordering::SeqCst)
    }

    pub fn save_cart_calls(&self) -> usize {
        self.inner.save_cart_calls.load(Ordering::SeqCst)
    }

    /// Returns the stored cart for a user, as the store last persisted it.
    pub fn stored_cart(&self, username: &str) -> Option<Cart> {
        self.inner
            .users
            .lock()
            .unwrap()
            .values()
            .find(|u| u.username == username)
            .map(|u| u.cart.clone())
    }
}

#[async_trait]
impl UserStore for MockStore {
    async fn find_by_username(&self, username: &str) -> CoreResult<Option<User>> {
        Ok(self
            .inner
            .users
            .lock()
            .unwrap()
            .values()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn find_by_id(&self, id: i64) -> CoreResult<Option<User>> {
        Ok(self.inner.users.lock().unwrap().get(&id).cloned())
    }

    async fn save_user(&self, mut user: User) -> CoreResult<User> {
        self.inner.save_user_calls.fetch_add(1, Ordering::SeqCst);

        let id = self.inner.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        user.id = id;
        user.cart.id = id;
        user.cart.user_id = Some(id);
        self.inner.users.lock().unwrap().insert(id, user.clone());
        Ok(user)
    }

    async fn save_cart(&self, cart: Cart) -> CoreResult<Cart> {
        self.inner.save_cart_calls.fetch_add(1, Ordering::SeqCst);

        if let Some(user_id) = cart.user_id {
            if let Some(user) = self.inner.users.lock().unwrap().get_mut(&user_id) {
                user.cart = cart.clone();
            }
        }
        Ok(cart)
    }
}

// =============================================================================
// Mock Catalog
// =============================================================================

#[derive(Default)]
struct CatalogInner {
    items: Mutex<HashMap<i64, Item>>,
    find_item_calls: AtomicUsize,
}

/// In-memory [`CatalogLookup`] with call counting.
#[derive(Clone, Default)]
pub struct MockCatalog {
    inner: Arc<CatalogInner>,
}

impl MockCatalog {
    pub fn new() -> Self {
        MockCatalog::default()
    }

    pub fn insert(&self, item: Item) {
        self.inner.items.lock().unwrap().insert(item.id, item);
    }

    pub fn find_item_calls(&self) -> usize {
        self.inner.find_item_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CatalogLookup for MockCatalog {
    async fn find_item(&self, id: i64) -> CoreResult<Option<Item>> {
        self.inner.find_item_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.inner.items.lock().unwrap().get(&id).cloned())
    }

    async fn find_items_by_name(&self, name: &str) -> CoreResult<Vec<Item>> {
        let mut items: Vec<Item> = self
            .inner
            .items
            .lock()
            .unwrap()
            .values()
            .filter(|i| i.name == name)
            .cloned()
            .collect();
        items.sort_by_key(|i| i.id);
        Ok(items)
    }

    async fn list_items(&self) -> CoreResult<Vec<Item>> {
        let mut items: Vec<Item> = self.inner.items.lock().unwrap().values().cloned().collect();
        items.sort_by_key(|i| i.id);
        Ok(items)
    }
}

// =============================================================================
// Map-Backed Hasher
// =============================================================================

/// Deterministic [`CredentialHasher`] for tests.
///
/// An explicit mapping ("Password" → "HashedPassword") takes precedence;
/// anything else hashes to a marked transform of the plaintext.
#[derive(Clone, Default)]
pub struct MapHasher {
    mappings: HashMap<String, String>,
}

impl MapHasher {
    /// Creates a hasher with a single plaintext → credential mapping.
    pub fn mapping(plaintext: &str, credential: &str) -> Self {
        let mut mappings = HashMap::new();
        mappings.insert(plaintext.to_string(), credential.to_string());
        MapHasher { mappings }
    }
}

impl CredentialHasher for MapHasher {
    fn hash(&self, plaintext: &str) -> CoreResult<String> {
        Ok(self
            .mappings
            .get(plaintext)
            .cloned()
            .unwrap_or_else(|| format!("hashed::{plaintext}")))
    }

    fn verify(&self, plaintext: &str, stored: &str) -> bool {
        match self.mappings.get(plaintext) {
            Some(credential) => credential == stored,
            None => stored == format!("hashed::{plaintext}"),
        }
    }
}
