//! Product domain type.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use shopper_core::ProductId;

/// A catalog product.
///
/// `id` is the externally-visible integer id (what carts and clients key on),
/// not the row's surrogate key. Field names match the public wire format:
/// `new_price` is the current sale price, `old_price` the struck-through
/// original.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Externally-visible product id.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Image URL.
    pub image: String,
    /// Category slug (`men`, `women`, `kid`).
    pub category: String,
    /// Current price.
    pub new_price: Decimal,
    /// Previous price, shown struck through.
    pub old_price: Decimal,
    /// Whether the product is available for purchase.
    pub available: bool,
    /// When the product was added to the catalog.
    pub date: DateTime<Utc>,
}
