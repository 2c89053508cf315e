//! # Request Types
//!
//! Transient inputs handed down from the web layer. Never persisted.

use serde::{Deserialize, Serialize};

/// Request to add or remove items from a user's cart.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModifyCartRequest {
    /// Owner of the cart to mutate.
    pub username: String,

    /// Catalog id of the item.
    pub item_id: i64,

    /// Number of repeated add/remove operations to apply. Must be positive.
    pub quantity: i64,
}

/// Request to register a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    /// Desired login name (unique, non-empty).
    pub username: String,

    /// Plaintext password. Hashed before anything is persisted.
    pub password: String,

    /// Must match `password` byte-exact.
    pub confirm_password: String,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modify_cart_request_wire_shape() {
        let json = r#"{"username":"Username","itemId":1,"quantity":2}"#;
        let request: ModifyCartRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.username, "Username");
        assert_eq!(request.item_id, 1);
        assert_eq!(request.quantity, 2);
    }

    #[test]
    fn test_create_user_request_uses_camel_case_keys() {
        let request = CreateUserRequest {
            username: "Username".to_string(),
            password: "Password".to_string(),
            confirm_password: "Password".to_string(),
        };

        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"confirmPassword\""));
        assert!(!json.contains("confirm_password"));
    }
}
