/**
 * User Model and Store
 *
 * This module defines the user record and an in-memory credential store.
 * Persistence is an external concern; the store stands in for it behind
 * the same lookup operations a database-backed implementation would offer.
 */

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use uuid::Uuid;

/// User record held by the store
///
/// The `password_hash` field only ever holds a bcrypt hash, never the
/// plaintext password.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique user ID
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Email address (unique)
    pub email: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    /// Role (e.g., "user", "admin")
    pub role: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

/// Sanitized user record, safe to embed in tokens and responses
///
/// This is the record carried in the JWT claim and attached to the request
/// by the authentication gate. It never includes the password hash.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicUser {
    /// User's unique ID
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Email address
    pub email: String,
    /// Role
    pub role: String,
}

impl User {
    /// Build a new user record with a fresh id and the default role
    pub fn new(name: String, email: String, password_hash: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            password_hash,
            role: "user".to_string(),
            created_at: Utc::now(),
        }
    }

    /// Strip sensitive fields for embedding in tokens and responses
    pub fn public(&self) -> PublicUser {
        PublicUser {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
            role: self.role.clone(),
        }
    }
}

/// Errors raised by the user store
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum UserStoreError {
    /// A user with this email already exists
    #[error("Email already registered: {0}")]
    EmailTaken(String),
}

/// In-memory user store
///
/// Shared across request handlers; cloning is cheap (the map lives behind
/// an `Arc<RwLock<_>>`).
#[derive(Debug, Clone, Default)]
pub struct UserStore {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl UserStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new user
    ///
    /// # Errors
    ///
    /// Returns `UserStoreError::EmailTaken` if another user already
    /// registered the same email.
    pub async fn insert(&self, user: User) -> Result<User, UserStoreError> {
        let mut users = self.users.write().await;
        if users.values().any(|u| u.email == user.email) {
            return Err(UserStoreError::EmailTaken(user.email));
        }
        users.insert(user.id, user.clone());
        Ok(user)
    }

    /// Get a user by email
    pub async fn find_by_email(&self, email: &str) -> Option<User> {
        let users = self.users.read().await;
        users.values().find(|u| u.email == email).cloned()
    }

    /// Get a user by ID
    pub async fn find_by_id(&self, id: Uuid) -> Option<User> {
        let users = self.users.read().await;
        users.get(&id).cloned()
    }

    /// Number of registered users
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    /// Whether the store has no users
    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}
