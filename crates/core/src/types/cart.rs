//! The cart mapping: per-user quantities keyed by product id.
//!
//! This is the in-memory half of the cart state manager. Mutations here are
//! mirrored by the api crate's `CartRepository`, which applies the same
//! operations as single atomic SQL statements. Both sides uphold the same
//! invariant: a quantity is never negative, and decrementing at zero is a
//! no-op.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::ProductId;

/// A sparse cart: product ids mapped to held quantities.
///
/// Entries with quantity zero are not stored; looking up an absent id yields
/// zero. Serializes as a JSON object keyed by product id, e.g.
/// `{"3": 2, "17": 1}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: BTreeMap<ProductId, u32>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a cart from `(product, quantity)` pairs, dropping zero entries.
    ///
    /// Later duplicates overwrite earlier ones.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (ProductId, u32)>,
    {
        let items = entries.into_iter().filter(|&(_, qty)| qty > 0).collect();
        Self { items }
    }

    /// Quantity held for a product; zero when absent.
    #[must_use]
    pub fn quantity(&self, product: ProductId) -> u32 {
        self.items.get(&product).copied().unwrap_or(0)
    }

    /// Increment the quantity for a product.
    pub fn add(&mut self, product: ProductId) {
        let qty = self.items.entry(product).or_insert(0);
        *qty = qty.saturating_add(1);
    }

    /// Decrement the quantity for a product.
    ///
    /// A no-op when the quantity is already zero; a quantity that reaches
    /// zero is removed from the mapping.
    pub fn remove(&mut self, product: ProductId) {
        if let Some(qty) = self.items.get_mut(&product) {
            *qty -= 1;
            if *qty == 0 {
                self.items.remove(&product);
            }
        }
    }

    /// Total number of items across all products.
    #[must_use]
    pub fn total_items(&self) -> u64 {
        self.items.values().map(|&qty| u64::from(qty)).sum()
    }

    /// Total price of the cart, given a way to resolve unit prices.
    ///
    /// Products the catalog no longer resolves (deleted, or an id that never
    /// existed) contribute nothing rather than failing the computation.
    pub fn total_amount<F>(&self, mut price_of: F) -> Decimal
    where
        F: FnMut(ProductId) -> Option<Decimal>,
    {
        self.items
            .iter()
            .filter_map(|(&product, &qty)| {
                price_of(product).map(|price| price * Decimal::from(qty))
            })
            .sum()
    }

    /// Whether the cart holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over `(product, quantity)` entries in product-id order.
    pub fn entries(&self) -> impl Iterator<Item = (ProductId, u32)> + '_ {
        self.items.iter().map(|(&product, &qty)| (product, qty))
    }
}
