//! Catalog route handlers.

use axum::{Json, extract::State};
use tracing::instrument;

use pie_orders_core::catalog::CatalogSection;

use crate::state::AppState;

/// Serve the full catalog.
///
/// Sections and items come back in display order with numeric prices.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> Json<Vec<CatalogSection>> {
    Json(state.catalog().sections().to_vec())
}
