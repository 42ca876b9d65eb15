//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Health check
//! GET  /catalog                - Product catalog, sections in order
//! GET  /session                - Current order-session snapshot
//!
//! # Cart
//! POST /cart/change            - Step one item's quantity by a delta
//! POST /cart/set               - Set one item's quantity from raw input
//!
//! # Contact form
//! POST /contact                - Overwrite one contact-form field
//!
//! # Orders
//! POST /orders                 - Submit the current order
//! POST /orders/reset           - Start a new order after a submitted one
//! ```

pub mod cart;
pub mod catalog;
pub mod contact;
pub mod orders;
pub mod session;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check the intake
/// endpoint; that collaborator is only contacted on submission.
async fn health() -> &'static str {
    "ok"
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/change", post(cart::change))
        .route("/set", post(cart::set))
}

/// Create the order routes router.
pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(orders::submit))
        .route("/reset", post(orders::reset))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        // Catalog and session reads
        .route("/catalog", get(catalog::show))
        .route("/session", get(session::show))
        // Cart routes
        .nest("/cart", cart_routes())
        // Contact form
        .route("/contact", post(contact::set_field))
        // Order routes
        .nest("/orders", order_routes())
}
