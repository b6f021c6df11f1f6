//! Product repository for catalog database operations.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;

use shopper_core::ProductId;

use super::RepositoryError;
use crate::models::Product;

/// A new product to insert into the catalog.
///
/// The externally-visible id is assigned by the database sequence, not the
/// caller.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub image: String,
    pub category: String,
    pub new_price: Decimal,
    pub old_price: Decimal,
}

/// Database row for a product, mapped to [`Product`] at the boundary.
#[derive(Debug, sqlx::FromRow)]
struct ProductRow {
    product_id: ProductId,
    name: String,
    image: String,
    category: String,
    new_price: Decimal,
    old_price: Decimal,
    available: bool,
    date: DateTime<Utc>,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Self {
            id: row.product_id,
            name: row.name,
            image: row.image,
            category: row.category,
            new_price: row.new_price,
            old_price: row.old_price,
            available: row.available,
            date: row.date,
        }
    }
}

const PRODUCT_COLUMNS: &str =
    "product_id, name, image, category, new_price, old_price, available, date";

/// Repository for catalog database operations.
pub struct ProductRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new product; the external id comes from the catalog sequence.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, product: &NewProduct) -> Result<Product, RepositoryError> {
        let row: ProductRow = sqlx::query_as(
            "INSERT INTO product (name, image, category, new_price, old_price)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING product_id, name, image, category, new_price, old_price, available, date",
        )
        .bind(&product.name)
        .bind(&product.image)
        .bind(&product.category)
        .bind(product.new_price)
        .bind(product.old_price)
        .fetch_one(self.pool)
        .await?;

        Ok(row.into())
    }

    /// Delete a product by its external id.
    ///
    /// Returns the deleted product's name, or `None` if no product had that
    /// id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn delete(&self, id: ProductId) -> Result<Option<String>, RepositoryError> {
        let name: Option<(String,)> =
            sqlx::query_as("DELETE FROM product WHERE product_id = $1 RETURNING name")
                .bind(id)
                .fetch_optional(self.pool)
                .await?;

        Ok(name.map(|(n,)| n))
    }

    /// List the entire catalog in external-id order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let rows: Vec<ProductRow> = sqlx::query_as(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM product ORDER BY product_id"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    /// List the most recently added products, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_newest(&self, limit: i64) -> Result<Vec<Product>, RepositoryError> {
        let rows: Vec<ProductRow> = sqlx::query_as(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM product ORDER BY id DESC LIMIT $1"
        ))
        .bind(limit)
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    /// List products in a category, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_by_category(
        &self,
        category: &str,
        limit: i64,
    ) -> Result<Vec<Product>, RepositoryError> {
        let rows: Vec<ProductRow> = sqlx::query_as(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM product WHERE category = $1 ORDER BY id LIMIT $2"
        ))
        .bind(category)
        .bind(limit)
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    /// Resolve current prices for a set of external ids.
    ///
    /// Ids with no matching product are simply absent from the result; cart
    /// totals rely on that to survive references to deleted products.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn prices_for(
        &self,
        ids: &[ProductId],
    ) -> Result<HashMap<ProductId, Decimal>, RepositoryError> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let raw_ids: Vec<i32> = ids.iter().map(|id| id.as_i32()).collect();
        let rows: Vec<(ProductId, Decimal)> =
            sqlx::query_as("SELECT product_id, new_price FROM product WHERE product_id = ANY($1)")
                .bind(&raw_ids)
                .fetch_all(self.pool)
                .await?;

        Ok(rows.into_iter().collect())
    }
}
