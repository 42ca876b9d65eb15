//! Order references and the intake wire payload.

use core::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::cart::Cart;
use crate::catalog::Catalog;
use crate::contact::{ContactForm, PayMethod};
use crate::types::{ItemId, Price};

/// A short human-readable order token.
///
/// Derived from the submission timestamp: the base-36 rendering of the
/// Unix millisecond count, last six characters, uppercased. Good enough
/// for a customer to read back over the phone; NOT a unique id. Two
/// submissions in the same millisecond collide, and the token wraps over
/// long time scales.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderRef(String);

impl OrderRef {
    /// Derive a reference token from a timestamp.
    #[must_use]
    pub fn from_timestamp(at: DateTime<Utc>) -> Self {
        #[allow(clippy::cast_sign_loss)] // clamped non-negative first
        let millis = at.timestamp_millis().max(0) as u64;
        let encoded = to_base36(millis);
        let start = encoded.len().saturating_sub(6);
        let tail: String = encoded.chars().skip(start).collect();
        Self(tail.to_uppercase())
    }

    /// Get the token string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Render a number in lowercase base 36.
fn to_base36(mut n: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if n == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while n > 0 {
        let digit = usize::try_from(n % 36).unwrap_or(0);
        out.push(DIGITS.get(digit).copied().unwrap_or(b'0'));
        n /= 36;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}

/// One flattened order line: the cart entry joined against the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub id: ItemId,
    pub name: String,
    pub price: Price,
    pub qty: u32,
}

impl OrderLine {
    /// Flatten a cart into order lines, in cart-entry order.
    ///
    /// Entries with ids missing from the catalog keep the id as their name
    /// and price as zero rather than being dropped.
    #[must_use]
    pub fn from_cart(cart: &Cart, catalog: &Catalog) -> Vec<Self> {
        cart.entries()
            .map(|(id, qty)| {
                catalog.item(id).map_or_else(
                    || Self {
                        id: id.clone(),
                        name: id.to_string(),
                        price: Price::ZERO,
                        qty,
                    },
                    |item| Self {
                        id: item.id.clone(),
                        name: item.name.clone(),
                        price: item.price,
                        qty,
                    },
                )
            })
            .collect()
    }
}

/// The JSON snapshot sent to the order-intake endpoint.
///
/// Sent exactly once per submission attempt and never persisted locally.
/// `total` and the per-line `price` are plain JSON numbers; `createdAt`
/// is ISO-8601 UTC.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPayload {
    pub customer: String,
    pub phone: String,
    pub email: String,
    pub notes: String,
    pub pay_method: PayMethod,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
    pub items: Vec<OrderLine>,
    pub order_ref: OrderRef,
    pub created_at: DateTime<Utc>,
}

impl OrderPayload {
    /// Snapshot the session's form and cart for the wire.
    #[must_use]
    pub fn new(
        form: &ContactForm,
        cart: &Cart,
        catalog: &Catalog,
        order_ref: OrderRef,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            customer: form.customer.clone(),
            phone: form.phone.clone(),
            email: form.email.clone(),
            notes: form.notes.clone(),
            pay_method: form.pay_method,
            total: cart.total(catalog),
            items: OrderLine::from_cart(cart, catalog),
            order_ref,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at_millis(millis: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(millis).unwrap()
    }

    #[test]
    fn test_order_ref_is_short_and_uppercase() {
        let r = OrderRef::from_timestamp(at_millis(1_700_000_000_000));
        assert_eq!(r.as_str().len(), 6);
        assert!(r.as_str().chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
    }

    #[test]
    fn test_order_ref_matches_base36_tail() {
        // 1700000000000 in base 36 is "loyw3v28"; the last six characters
        // uppercased are "YW3V28".
        let r = OrderRef::from_timestamp(at_millis(1_700_000_000_000));
        assert_eq!(r.as_str(), "YW3V28");
    }

    #[test]
    fn test_order_ref_distinct_for_distinct_millis() {
        let a = OrderRef::from_timestamp(at_millis(1_700_000_000_000));
        let b = OrderRef::from_timestamp(at_millis(1_700_000_000_001));
        assert_ne!(a, b);
    }

    #[test]
    fn test_order_ref_epoch_edge() {
        // Degenerate but defined: short base-36 strings are used whole
        let r = OrderRef::from_timestamp(at_millis(0));
        assert_eq!(r.as_str(), "0");
    }

    #[test]
    fn test_flatten_joins_catalog_and_falls_back() {
        let catalog = Catalog::builtin();
        let mut cart = Cart::new();
        cart.change_qty(ItemId::from("pumpkin6"), 2);
        cart.change_qty(ItemId::from("mystery"), 1);

        let lines = OrderLine::from_cart(&cart, &catalog);
        assert_eq!(lines.len(), 2);

        let known = lines.iter().find(|l| l.id.as_str() == "pumpkin6").unwrap();
        assert_eq!(known.name, "Pumpkin (6\")");
        assert_eq!(known.price, Price::from_dollars(10));
        assert_eq!(known.qty, 2);

        let unknown = lines.iter().find(|l| l.id.as_str() == "mystery").unwrap();
        assert_eq!(unknown.name, "mystery");
        assert_eq!(unknown.price, Price::ZERO);
    }

    #[test]
    fn test_payload_wire_shape() {
        let catalog = Catalog::builtin();
        let mut cart = Cart::new();
        cart.change_qty(ItemId::from("pecanS"), 3);

        let form = ContactForm {
            customer: "Ada".to_string(),
            phone: "555-0100".to_string(),
            email: "ada@example.com".to_string(),
            notes: String::new(),
            pay_method: PayMethod::Venmo,
        };

        let created_at = at_millis(1_700_000_000_000);
        let payload = OrderPayload::new(
            &form,
            &cart,
            &catalog,
            OrderRef::from_timestamp(created_at),
            created_at,
        );

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["customer"], "Ada");
        assert_eq!(json["payMethod"], "Venmo");
        assert_eq!(json["orderRef"], "YW3V28");
        assert_eq!(json["total"], 15.0);
        assert_eq!(json["items"][0]["qty"], 3);
        assert!(json["items"][0]["price"].is_number());
        assert!(
            json["createdAt"]
                .as_str()
                .unwrap()
                .starts_with("2023-11-14T22:13:20")
        );
    }
}
