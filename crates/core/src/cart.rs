//! Item-quantity cart with derived totals.
//!
//! The cart is a plain id-to-quantity mapping. It never validates ids
//! against the catalog; entries that don't resolve simply contribute
//! nothing to the total. The two edit operations treat zero differently:
//! `change_qty` removes entries that reach zero, while `set_qty` stores
//! whatever it parsed, including explicit zeros. That asymmetry is
//! long-standing observed behavior and is kept as-is.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::catalog::Catalog;
use crate::types::ItemId;

/// Mapping of catalog item id to requested quantity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    entries: BTreeMap<ItemId, u32>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `delta` to an item's quantity, clamping at zero.
    ///
    /// The entry is removed entirely when the result is zero.
    pub fn change_qty(&mut self, id: ItemId, delta: i32) {
        let current = i64::from(self.qty(&id));
        let next = (current + i64::from(delta)).max(0);
        if next == 0 {
            self.entries.remove(&id);
        } else {
            self.entries
                .insert(id, u32::try_from(next).unwrap_or(u32::MAX));
        }
    }

    /// Set an item's quantity from raw user input.
    ///
    /// Non-numeric and negative input coerces to zero. Unlike
    /// [`change_qty`](Self::change_qty), a zero entry is stored, not
    /// removed, so it still counts toward [`len`](Self::len).
    pub fn set_qty(&mut self, id: ItemId, raw: &str) {
        self.entries.insert(id, parse_quantity(raw));
    }

    /// Current quantity for an item (zero when absent).
    #[must_use]
    pub fn qty(&self, id: &ItemId) -> u32 {
        self.entries.get(id).copied().unwrap_or(0)
    }

    /// Iterate over entries in id order.
    pub fn entries(&self) -> impl Iterator<Item = (&ItemId, u32)> {
        self.entries.iter().map(|(id, qty)| (id, *qty))
    }

    /// Number of entries, explicit zeros included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cart has no entries at all.
    ///
    /// An explicit zero entry left by [`set_qty`](Self::set_qty) makes the
    /// cart non-empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Sum of quantity times price over entries found in the catalog.
    #[must_use]
    pub fn total(&self, catalog: &Catalog) -> Decimal {
        self.entries
            .iter()
            .filter_map(|(id, qty)| catalog.item(id).map(|item| item.price.times(*qty)))
            .fold(Decimal::ZERO, |sum, line| sum + line)
    }
}

/// Parse raw quantity input, coercing anything unusable to zero.
fn parse_quantity(raw: &str) -> u32 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0;
    }
    match trimmed.parse::<f64>() {
        // `as` saturates on overflow and truncates fractional input
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        Ok(n) if n.is_finite() && n > 0.0 => n as u32,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Price;

    fn id(s: &str) -> ItemId {
        ItemId::from(s)
    }

    #[test]
    fn test_change_qty_accumulates_and_clamps() {
        let mut cart = Cart::new();
        cart.change_qty(id("pumpkin6"), 2);
        assert_eq!(cart.qty(&id("pumpkin6")), 2);

        cart.change_qty(id("pumpkin6"), -1);
        assert_eq!(cart.qty(&id("pumpkin6")), 1);

        // Clamp at zero even for a large negative delta
        cart.change_qty(id("pumpkin6"), -5);
        assert_eq!(cart.qty(&id("pumpkin6")), 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_change_qty_removes_zero_entries() {
        let mut cart = Cart::new();
        cart.change_qty(id("pecanS"), 1);
        cart.change_qty(id("pecanS"), -1);
        assert_eq!(cart.len(), 0);

        // Key set equals items with quantity > 0 for change_qty-driven state
        cart.change_qty(id("a"), 3);
        cart.change_qty(id("b"), 1);
        cart.change_qty(id("b"), -1);
        let keys: Vec<_> = cart.entries().map(|(i, _)| i.clone()).collect();
        assert_eq!(keys, vec![id("a")]);
    }

    #[test]
    fn test_set_qty_parses_raw_input() {
        let mut cart = Cart::new();
        cart.set_qty(id("x"), "3");
        assert_eq!(cart.qty(&id("x")), 3);

        cart.set_qty(id("x"), " 7 ");
        assert_eq!(cart.qty(&id("x")), 7);

        cart.set_qty(id("x"), "2.9");
        assert_eq!(cart.qty(&id("x")), 2);
    }

    #[test]
    fn test_set_qty_coerces_garbage_to_zero() {
        let mut cart = Cart::new();
        for raw in ["", "abc", "-4", "NaN", "inf"] {
            cart.set_qty(id("x"), raw);
            assert_eq!(cart.qty(&id("x")), 0, "raw input {raw:?}");
        }
    }

    #[test]
    fn test_set_qty_keeps_explicit_zero_entries() {
        let mut cart = Cart::new();
        cart.set_qty(id("x"), "0");
        assert_eq!(cart.qty(&id("x")), 0);
        // The asymmetry with change_qty: the entry stays
        assert_eq!(cart.len(), 1);
        assert!(!cart.is_empty());
    }

    #[test]
    fn test_total_against_catalog() {
        let catalog = Catalog::builtin();
        let mut cart = Cart::new();
        assert_eq!(cart.total(&catalog), Decimal::ZERO);

        cart.change_qty(id("pumpkin6"), 2); // 2 x $10
        cart.change_qty(id("pecanS"), 3); // 3 x $5
        assert_eq!(cart.total(&catalog), Decimal::from(35));
    }

    #[test]
    fn test_unknown_ids_are_stored_but_price_nothing() {
        let catalog = Catalog::builtin();
        let mut cart = Cart::new();
        cart.change_qty(id("mystery"), 4);
        assert_eq!(cart.qty(&id("mystery")), 4);
        assert_eq!(cart.total(&catalog), Decimal::ZERO);
    }

    #[test]
    fn test_total_matches_per_item_subtotals() {
        let catalog = Catalog::builtin();
        let mut cart = Cart::new();
        cart.change_qty(id("applecobbler"), 1);
        cart.change_qty(id("carrot"), 2);
        cart.change_qty(id("sweetpotato6"), 1);

        let by_hand: Decimal = cart
            .entries()
            .map(|(i, qty)| {
                catalog
                    .item(i)
                    .map_or(Decimal::ZERO, |item| item.price.times(qty))
            })
            .sum();
        assert_eq!(cart.total(&catalog), by_hand);
        assert_eq!(cart.total(&catalog), Decimal::from(25));
    }

    #[test]
    fn test_price_times_is_decimal_exact() {
        // Paranoia check that totals stay exact decimals
        let p = Price::new(Decimal::new(1050, 2)).unwrap(); // $10.50
        assert_eq!(p.times(3), Decimal::new(3150, 2));
    }
}
