//! Catalog route handlers.
//!
//! `addproduct` and `removeproduct` serve the admin panel; the listing
//! endpoints feed the public storefront. The admin endpoints carry no
//! authentication - reachability is the only gate, matching the deployed
//! contract.

use axum::{Json, extract::State};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::instrument;

use shopper_core::ProductId;

use crate::db::products::{NewProduct, ProductRepository};
use crate::error::{AppError, Result};
use crate::models::Product;
use crate::state::AppState;

/// How many products `newcollections` returns.
const NEW_COLLECTIONS_LIMIT: i64 = 8;
/// How many products `popularinwomen` returns.
const POPULAR_IN_WOMEN_LIMIT: i64 = 4;

/// Add-product request body.
#[derive(Debug, Deserialize)]
pub struct AddProductRequest {
    pub name: String,
    pub image: String,
    pub category: String,
    pub new_price: Decimal,
    pub old_price: Decimal,
}

/// Remove-product request body.
#[derive(Debug, Deserialize)]
pub struct RemoveProductRequest {
    pub id: ProductId,
}

/// Add a product to the catalog.
///
/// The external id is assigned by the catalog sequence, never the client.
#[instrument(skip(state, request), fields(name = %request.name))]
pub async fn add_product(
    State(state): State<AppState>,
    Json(request): Json<AddProductRequest>,
) -> Result<Json<Value>> {
    let new_product = NewProduct {
        name: request.name,
        image: request.image,
        category: request.category,
        new_price: request.new_price,
        old_price: request.old_price,
    };

    let product = ProductRepository::new(state.pool())
        .create(&new_product)
        .await?;

    tracing::info!(id = %product.id, "product added");

    Ok(Json(json!({ "success": true, "name": product.name })))
}

/// Remove a product from the catalog by external id.
#[instrument(skip(state))]
pub async fn remove_product(
    State(state): State<AppState>,
    Json(request): Json<RemoveProductRequest>,
) -> Result<Json<Value>> {
    let name = ProductRepository::new(state.pool())
        .delete(request.id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("product {}", request.id)))?;

    tracing::info!(id = %request.id, "product removed");

    Ok(Json(json!({ "success": true, "name": name })))
}

/// List the entire catalog.
#[instrument(skip(state))]
pub async fn all_products(State(state): State<AppState>) -> Result<Json<Vec<Product>>> {
    let products = ProductRepository::new(state.pool()).list_all().await?;
    Ok(Json(products))
}

/// The newest additions to the catalog, for the "new collections" rail.
#[instrument(skip(state))]
pub async fn new_collections(State(state): State<AppState>) -> Result<Json<Vec<Product>>> {
    let products = ProductRepository::new(state.pool())
        .list_newest(NEW_COLLECTIONS_LIMIT)
        .await?;
    Ok(Json(products))
}

/// A short rail of products from the women category.
#[instrument(skip(state))]
pub async fn popular_in_women(State(state): State<AppState>) -> Result<Json<Vec<Product>>> {
    let products = ProductRepository::new(state.pool())
        .list_by_category("women", POPULAR_IN_WOMEN_LIMIT)
        .await?;
    Ok(Json(products))
}
