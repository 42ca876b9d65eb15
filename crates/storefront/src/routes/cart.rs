//! Cart route handlers.
//!
//! Both edit operations respond with the refreshed cart view so the
//! client can re-render the order summary without a second round trip.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use pie_orders_core::cart::Cart;
use pie_orders_core::catalog::Catalog;
use pie_orders_core::types::{ItemId, Price};

use crate::state::AppState;

/// Cart line display data.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineView {
    pub id: String,
    pub name: String,
    pub quantity: u32,
    pub price: String,
    pub line_price: String,
}

/// Cart display data.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    pub items: Vec<CartLineView>,
    pub total: String,
    pub item_count: u32,
}

impl CartView {
    /// Render a cart against the catalog.
    ///
    /// Entries with unknown ids show the id as their name and a zero
    /// price, mirroring how they are flattened into order payloads.
    #[must_use]
    pub fn build(cart: &Cart, catalog: &Catalog) -> Self {
        let items = cart
            .entries()
            .map(|(id, quantity)| {
                let (name, price) = catalog
                    .item(id)
                    .map_or_else(|| (id.to_string(), Price::ZERO), |i| (i.name.clone(), i.price));
                CartLineView {
                    id: id.to_string(),
                    name,
                    quantity,
                    price: price.to_string(),
                    line_price: format!("${:.2}", price.times(quantity)),
                }
            })
            .collect();

        Self {
            items,
            total: format!("${:.2}", cart.total(catalog)),
            item_count: cart.entries().map(|(_, qty)| qty).sum(),
        }
    }
}

/// Step one item's quantity form data.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeQtyForm {
    pub item_id: String,
    pub delta: i32,
}

/// Set one item's quantity form data. `value` is the raw input-field
/// string; parsing and coercion happen in the cart itself.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetQtyForm {
    pub item_id: String,
    pub value: String,
}

/// Step one item's quantity by a delta (the +/- buttons).
#[instrument(skip(state))]
pub async fn change(
    State(state): State<AppState>,
    Json(form): Json<ChangeQtyForm>,
) -> Json<CartView> {
    let mut session = state.session().lock().await;
    session.change_qty(ItemId::from(form.item_id), form.delta);
    Json(CartView::build(session.cart(), state.catalog()))
}

/// Set one item's quantity from raw input (the quantity box).
#[instrument(skip(state))]
pub async fn set(State(state): State<AppState>, Json(form): Json<SetQtyForm>) -> Json<CartView> {
    let mut session = state.session().lock().await;
    session.set_qty(ItemId::from(form.item_id), &form.value);
    Json(CartView::build(session.cart(), state.catalog()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_view_formats_prices() {
        let catalog = Catalog::builtin();
        let mut cart = Cart::new();
        cart.change_qty(ItemId::from("pumpkin6"), 2);
        cart.change_qty(ItemId::from("pecanS"), 1);

        let view = CartView::build(&cart, &catalog);
        assert_eq!(view.items.len(), 2);
        assert_eq!(view.total, "$25.00");
        assert_eq!(view.item_count, 3);

        let pumpkin = view.items.iter().find(|l| l.id == "pumpkin6").unwrap();
        assert_eq!(pumpkin.price, "$10.00");
        assert_eq!(pumpkin.line_price, "$20.00");
    }

    #[test]
    fn test_cart_view_unknown_id_fallback() {
        let catalog = Catalog::builtin();
        let mut cart = Cart::new();
        cart.change_qty(ItemId::from("mystery"), 1);

        let view = CartView::build(&cart, &catalog);
        assert_eq!(view.items[0].name, "mystery");
        assert_eq!(view.items[0].price, "$0.00");
        assert_eq!(view.total, "$0.00");
    }
}
