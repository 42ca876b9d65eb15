//! Deterministic payment deep-link builder.
//!
//! Pure string formatting: no network access, no state. Given the
//! recipient handles, an amount, and a free-text note, produces a Venmo
//! app deep link, a Venmo web fallback, and a Cash App web link. The
//! links are presented to the customer as clickable URLs and never
//! invoked by this code.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::order::OrderRef;

/// Recipient handles for the supported payment providers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentHandles {
    /// Venmo username, without the leading `@`.
    pub venmo: String,
    /// Cash App $cashtag, including the `$`.
    pub cashapp: String,
}

/// The three generated payment URLs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentLinks {
    /// Venmo native-app deep link.
    pub venmo_app: String,
    /// Venmo web fallback.
    pub venmo_web: String,
    /// Cash App web link.
    pub cash_app: String,
}

impl PaymentLinks {
    /// Build all three links for one amount and note.
    ///
    /// The amount is rounded to two decimal places (half away from zero)
    /// and rendered without trailing zeros, so `$10` appears as `10` and
    /// `$12.345` as `12.35`. The note is percent-encoded; it may be
    /// empty, in which case the `note` parameter is present but blank.
    #[must_use]
    pub fn build(handles: &PaymentHandles, amount: Decimal, note: &str) -> Self {
        let amt = format_amount(amount);
        let note = urlencoding::encode(note);
        Self {
            venmo_app: format!(
                "venmo://paycharge?txn=pay&recipients={}&amount={amt}&note={note}",
                handles.venmo
            ),
            venmo_web: format!(
                "https://venmo.com/u/{}?txn=pay&amount={amt}&note={note}",
                handles.venmo
            ),
            cash_app: format!(
                "https://cash.app/{}?amount={amt}&note={note}",
                handles.cashapp
            ),
        }
    }
}

/// The note attached to payment links for one submitted order.
///
/// Carries the order reference and the customer name so the payment
/// shows up on the recipient side with enough context to match it.
#[must_use]
pub fn order_note(order_ref: &OrderRef, customer: &str) -> String {
    format!("Pie Order {order_ref} - {customer}")
}

/// Round to cents and drop trailing zeros.
fn format_amount(amount: Decimal) -> String {
    amount
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .normalize()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn handles() -> PaymentHandles {
        PaymentHandles {
            venmo: "Pie-Stand".to_string(),
            cashapp: "$piestand".to_string(),
        }
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_amount_rounds_to_cents() {
        let links = PaymentLinks::build(&handles(), dec("12.345"), "A B");
        assert!(links.venmo_app.contains("amount=12.35&"));
        assert!(links.venmo_web.contains("amount=12.35&"));
        assert!(links.cash_app.contains("amount=12.35&"));
    }

    #[test]
    fn test_note_is_percent_encoded() {
        let links = PaymentLinks::build(&handles(), dec("5"), "A B");
        assert!(links.venmo_app.ends_with("note=A%20B"));
        assert!(links.venmo_web.ends_with("note=A%20B"));
        assert!(links.cash_app.ends_with("note=A%20B"));
    }

    #[test]
    fn test_zero_amount_and_empty_note() {
        let links = PaymentLinks::build(&handles(), Decimal::ZERO, "");
        assert_eq!(
            links.venmo_app,
            "venmo://paycharge?txn=pay&recipients=Pie-Stand&amount=0&note="
        );
        assert_eq!(
            links.venmo_web,
            "https://venmo.com/u/Pie-Stand?txn=pay&amount=0&note="
        );
        assert_eq!(links.cash_app, "https://cash.app/$piestand?amount=0&note=");
    }

    #[test]
    fn test_whole_dollar_amounts_drop_trailing_zeros() {
        let links = PaymentLinks::build(&handles(), dec("10.00"), "x");
        assert!(links.venmo_app.contains("amount=10&"));
    }

    #[test]
    fn test_typical_order_note() {
        use chrono::TimeZone;

        let at = chrono::Utc.timestamp_millis_opt(1_700_000_000_000).unwrap();
        let note = order_note(&OrderRef::from_timestamp(at), "Ada Lovelace");
        assert_eq!(note, "Pie Order YW3V28 - Ada Lovelace");

        let links = PaymentLinks::build(&handles(), dec("35"), &note);
        assert!(
            links
                .cash_app
                .ends_with("note=Pie%20Order%20YW3V28%20-%20Ada%20Lovelace")
        );
    }

    #[test]
    fn test_deterministic() {
        let a = PaymentLinks::build(&handles(), dec("12.5"), "same");
        let b = PaymentLinks::build(&handles(), dec("12.5"), "same");
        assert_eq!(a, b);
    }
}
