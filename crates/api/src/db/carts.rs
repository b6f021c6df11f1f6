//! Cart repository: the persisted mirror of [`shopper_core::Cart`].
//!
//! Mutations are single atomic statements, so two sessions incrementing the
//! same cart concurrently cannot lose updates, and a decrement can never
//! drive a quantity negative (the table also carries `CHECK (quantity >= 0)`).

use sqlx::PgPool;

use shopper_core::{Cart, ProductId, UserId};

use super::RepositoryError;

/// Repository for cart database operations.
pub struct CartRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CartRepository<'a> {
    /// Create a new cart repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Increment the quantity of an item in a user's cart.
    ///
    /// Inserts the row at quantity 1 when the item is not yet in the cart.
    /// Item ids are client-supplied and not required to match a product.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the statement fails.
    pub async fn add_item(&self, user: UserId, item: ProductId) -> Result<(), RepositoryError> {
        sqlx::query(
            "INSERT INTO cart_item (user_id, product_id, quantity)
             VALUES ($1, $2, 1)
             ON CONFLICT (user_id, product_id)
             DO UPDATE SET quantity = cart_item.quantity + 1",
        )
        .bind(user)
        .bind(item)
        .execute(self.pool)
        .await?;

        Ok(())
    }

    /// Decrement the quantity of an item in a user's cart.
    ///
    /// A no-op when the quantity is already zero or the item is absent; the
    /// `quantity > 0` guard is part of the statement, so concurrent
    /// decrements cannot underflow.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the statement fails.
    pub async fn remove_item(&self, user: UserId, item: ProductId) -> Result<(), RepositoryError> {
        sqlx::query(
            "UPDATE cart_item SET quantity = quantity - 1
             WHERE user_id = $1 AND product_id = $2 AND quantity > 0",
        )
        .bind(user)
        .bind(item)
        .execute(self.pool)
        .await?;

        Ok(())
    }

    /// Load a user's cart as the sparse domain mapping.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if a stored quantity does
    /// not fit the domain type.
    pub async fn get(&self, user: UserId) -> Result<Cart, RepositoryError> {
        let rows: Vec<(ProductId, i32)> = sqlx::query_as(
            "SELECT product_id, quantity FROM cart_item
             WHERE user_id = $1 AND quantity > 0",
        )
        .bind(user)
        .fetch_all(self.pool)
        .await?;

        let mut entries = Vec::with_capacity(rows.len());
        for (item, quantity) in rows {
            let quantity = u32::try_from(quantity).map_err(|_| {
                RepositoryError::DataCorruption(format!(
                    "negative quantity {quantity} for item {item}"
                ))
            })?;
            entries.push((item, quantity));
        }

        Ok(Cart::from_entries(entries))
    }
}
