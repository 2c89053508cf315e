//! # User Service
//!
//! Registration (validate → hash → persist) and plain user lookup.
//!
//! ## Registration Flow
//! ```text
//! CreateUserRequest
//!      │
//!      ▼
//! validate username, password/confirm, length policy   → Validation error
//!      │
//!      ▼
//! CredentialHasher::hash(password)
//!      │
//!      ▼
//! User::new(username, hash)  — fresh empty cart, total zero
//!      │
//!      ▼
//! UserStore::save_user → persisted User (hashed credential included)
//! ```
//!
//! Validation failures are terminal: nothing is hashed and nothing reaches
//! the store.

use tracing::{debug, info, warn};

use checkout_core::{CoreError, CoreResult, CreateUserRequest, PasswordPolicy, User};
use checkout_core::validation::validate_username;

use crate::ports::{CredentialHasher, UserStore};

/// Registration and lookup over an injected store and hasher.
#[derive(Debug, Clone)]
pub struct UserService<S, H> {
    store: S,
    hasher: H,
    policy: PasswordPolicy,
}

impl<S, H> UserService<S, H>
where
    S: UserStore,
    H: CredentialHasher,
{
    /// Creates a user service with the default password policy.
    pub fn new(store: S, hasher: H) -> Self {
        Self::with_policy(store, hasher, PasswordPolicy::default())
    }

    /// Creates a user service with an explicit password policy.
    pub fn with_policy(store: S, hasher: H, policy: PasswordPolicy) -> Self {
        UserService {
            store,
            hasher,
            policy,
        }
    }

    /// Validates and materializes a new user.
    ///
    /// ## Returns
    /// The persisted user, hashed credential included; this layer does not
    /// redact.
    ///
    /// ## Errors
    /// - `Validation` for empty username, password/confirm mismatch, or a
    ///   password below the policy threshold
    /// - `Conflict` when the store reports a duplicate username
    pub async fn create_user(&self, request: &CreateUserRequest) -> CoreResult<User> {
        debug!(username = %request.username, "create_user request");

        validate_username(&request.username)?;

        if let Err(e) = self
            .policy
            .validate(&request.password, &request.confirm_password)
        {
            warn!(username = %request.username, error = %e, "Registration rejected");
            return Err(e.into());
        }

        let credential = self.hasher.hash(&request.password)?;

        let user = User::new(request.username.trim(), credential);
        let persisted = self.store.save_user(user).await?;

        info!(
            user_id = persisted.id,
            username = %persisted.username,
            "User registered"
        );

        Ok(persisted)
    }

    /// Looks up a user by id.
    pub async fn find_by_id(&self, id: i64) -> CoreResult<User> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| CoreError::user_not_found(format!("id {id}")))
    }

    /// Looks up a user by username.
    pub async fn find_by_username(&self, username: &str) -> CoreResult<User> {
        self.store
            .find_by_username(username)
            .await?
            .ok_or_else(|| CoreError::user_not_found(username))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
