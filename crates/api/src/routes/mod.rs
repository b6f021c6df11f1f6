//! HTTP route handlers for the storefront API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /api                    - Liveness message
//!
//! # Catalog
//! POST /api/addproduct         - Add a product (admin panel)
//! POST /api/removeproduct      - Remove a product by external id (admin panel)
//! GET  /api/allproducts        - Full catalog listing
//! GET  /api/newcollections     - 8 most recently added products
//! GET  /api/popularinwomen     - 4 products in the women category
//!
//! # Auth (rate limited)
//! POST /api/signup             - Create account, returns bearer token
//! POST /api/login              - Authenticate, returns bearer token
//!
//! # Cart (requires auth-token header)
//! POST /api/addtocart          - Increment an item quantity
//! POST /api/removefromcart     - Decrement an item quantity (floor at zero)
//! POST /api/getcart            - Fetch the cart mapping
//! POST /api/cartsummary        - Item count and priced total
//! ```

pub mod auth;
pub mod cart;
pub mod products;

use axum::{
    Json,
    Router,
    routing::{get, post},
};
use serde_json::{Value, json};

use crate::middleware::{api_rate_limiter, auth_rate_limiter};
use crate::state::AppState;

/// Create the catalog routes router.
pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/api/addproduct", post(products::add_product))
        .route("/api/removeproduct", post(products::remove_product))
        .route("/api/allproducts", get(products::all_products))
        .route("/api/newcollections", get(products::new_collections))
        .route("/api/popularinwomen", get(products::popular_in_women))
}

/// Create the auth routes router (strictly rate limited).
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/api/signup", post(auth::signup))
        .route("/api/login", post(auth::login))
        .layer(auth_rate_limiter())
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/api/addtocart", post(cart::add_to_cart))
        .route("/api/removefromcart", post(cart::remove_from_cart))
        .route("/api/getcart", post(cart::get_cart))
        .route("/api/cartsummary", post(cart::cart_summary))
        .layer(api_rate_limiter())
}

/// Assemble the full application router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api", get(root))
        .merge(catalog_routes())
        .merge(auth_routes())
        .merge(cart_routes())
}

/// Liveness message at the API root.
async fn root() -> Json<Value> {
    Json(json!({ "message": "Backend is running" }))
}
