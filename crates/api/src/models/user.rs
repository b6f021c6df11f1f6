//! User domain type.

use chrono::{DateTime, Utc};

use shopper_core::{Email, UserId};

/// A storefront user.
///
/// The password hash never leaves the repository layer; this type is safe to
/// pass around handlers and services.
#[derive(Debug, Clone)]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// Display name chosen at signup.
    pub name: String,
    /// User's email address.
    pub email: Email,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}
