//! Cart route handlers.
//!
//! Every endpoint here requires a valid bearer token; the [`AuthUser`]
//! extractor rejects anything else with a uniform 401. Mutations are atomic
//! at the database layer, so concurrent sessions on the same account cannot
//! lose updates or drive a quantity negative.

use axum::{Json, extract::State};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::instrument;

use shopper_core::{Cart, ProductId};

use crate::db::carts::CartRepository;
use crate::db::products::ProductRepository;
use crate::error::Result;
use crate::middleware::AuthUser;
use crate::state::AppState;

/// Cart mutation request body.
///
/// Item ids are client-supplied; they are not required to resolve to a
/// catalog product (a cart can reference an item that is later deleted).
#[derive(Debug, Deserialize)]
pub struct CartItemRequest {
    #[serde(rename = "itemId")]
    pub item_id: ProductId,
}

/// Increment an item's quantity in the caller's cart.
#[instrument(skip(state), fields(user = %user_id))]
pub async fn add_to_cart(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(request): Json<CartItemRequest>,
) -> Result<Json<Value>> {
    CartRepository::new(state.pool())
        .add_item(user_id, request.item_id)
        .await?;

    Ok(Json(json!({ "success": true, "message": "Added to cart" })))
}

/// Decrement an item's quantity in the caller's cart.
///
/// A no-op when the quantity is already zero.
#[instrument(skip(state), fields(user = %user_id))]
pub async fn remove_from_cart(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(request): Json<CartItemRequest>,
) -> Result<Json<Value>> {
    CartRepository::new(state.pool())
        .remove_item(user_id, request.item_id)
        .await?;

    Ok(Json(json!({ "success": true, "message": "Removed from cart" })))
}

/// Fetch the caller's cart mapping.
///
/// The response is a sparse object keyed by item id; clients treat missing
/// keys as quantity zero.
#[instrument(skip(state), fields(user = %user_id))]
pub async fn get_cart(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<Cart>> {
    let cart = CartRepository::new(state.pool()).get(user_id).await?;
    Ok(Json(cart))
}

/// Item count and priced total for the caller's cart.
///
/// Prices are resolved against the current catalog; items whose product has
/// been deleted still count toward `total_items` but contribute nothing to
/// `total_amount`.
#[instrument(skip(state), fields(user = %user_id))]
pub async fn cart_summary(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<Value>> {
    let cart = CartRepository::new(state.pool()).get(user_id).await?;

    let ids: Vec<ProductId> = cart.entries().map(|(item, _)| item).collect();
    let prices = ProductRepository::new(state.pool()).prices_for(&ids).await?;

    let total_amount = cart.total_amount(|item| prices.get(&item).copied());

    Ok(Json(json!({
        "success": true,
        "total_items": cart.total_items(),
        "total_amount": total_amount,
    })))
}
