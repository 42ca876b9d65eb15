//! The fixed product catalog.
//!
//! The catalog is static configuration data decided at deploy time, not a
//! mutable registry: it is constructed once at startup and only read after
//! that. Sections and the items within them keep their declaration order.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::{ItemId, Price};

/// One sellable product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: ItemId,
    pub name: String,
    pub price: Price,
}

/// A named group of products, displayed in order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogSection {
    pub category: String,
    pub items: Vec<CatalogItem>,
}

/// Read-only catalog: ordered sections plus a flat id lookup.
#[derive(Debug, Clone)]
pub struct Catalog {
    sections: Vec<CatalogSection>,
    by_id: HashMap<ItemId, CatalogItem>,
}

impl Catalog {
    /// Build a catalog from ordered sections.
    ///
    /// If an id appears more than once, the first occurrence wins.
    #[must_use]
    pub fn new(sections: Vec<CatalogSection>) -> Self {
        let mut by_id = HashMap::new();
        for section in &sections {
            for item in &section.items {
                by_id
                    .entry(item.id.clone())
                    .or_insert_with(|| item.clone());
            }
        }
        Self { sections, by_id }
    }

    /// The ordered sections, for display.
    #[must_use]
    pub fn sections(&self) -> &[CatalogSection] {
        &self.sections
    }

    /// Look up one item by id.
    #[must_use]
    pub fn item(&self, id: &ItemId) -> Option<&CatalogItem> {
        self.by_id.get(id)
    }

    /// Number of distinct items across all sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    /// Whether the catalog has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// The fundraiser catalog this storefront ships with.
    #[must_use]
    pub fn builtin() -> Self {
        let item = |id: &str, name: &str, dollars: u32| CatalogItem {
            id: ItemId::from(id),
            name: name.to_string(),
            price: Price::from_dollars(dollars),
        };

        Self::new(vec![
            CatalogSection {
                category: "6\" Pies (serves 3-4)".to_string(),
                items: vec![
                    item("pumpkin6", "Pumpkin (6\")", 10),
                    item("pecan6", "Pecan (6\")", 10),
                    item("applecrumb6", "Apple Crumb (6\")", 10),
                    item("sweetpotato6", "Sweet Potato (6\")", 10),
                    item("bean6", "Bean (6\")", 10),
                ],
            },
            CatalogSection {
                category: "Small Pies".to_string(),
                items: vec![
                    item("pumpkinS", "Pumpkin (Small)", 5),
                    item("sweetpotatoS", "Sweet Potato (Small)", 5),
                    item("pecanS", "Pecan (Small)", 5),
                    item("buttermilkS", "Buttermilk Coconut (Small)", 5),
                    item("lemoncustardS", "Lemon Custard (Small)", 5),
                    item("beanS", "Bean (Small)", 5),
                ],
            },
            CatalogSection {
                category: "Cobblers · Cakes · Pudding · Cheesecake".to_string(),
                items: vec![
                    item("applecobbler", "Apple Cobbler", 5),
                    item("peachcobbler", "Peach Cobbler", 5),
                    item("chocfudge", "Chocolate Fudge Cake", 5),
                    item("carrot", "Carrot Cake (w/ nuts)", 5),
                    item("redvelvet", "Red Velvet Cake", 5),
                    item("creamcheese", "Cream Cheese Frosting (cup)", 5),
                    item("cookiesCream", "Cookies & Cream Cheesecake", 5),
                    item("strawberryCC", "Strawberry Cheesecake", 5),
                    item("bananaPudding", "Banana Pudding (pt)", 5),
                ],
            },
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_lookup() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.sections().len(), 3);

        let pumpkin = catalog.item(&ItemId::from("pumpkin6")).unwrap();
        assert_eq!(pumpkin.name, "Pumpkin (6\")");
        assert_eq!(pumpkin.price, Price::from_dollars(10));

        assert!(catalog.item(&ItemId::from("nonexistent")).is_none());
    }

    #[test]
    fn test_builtin_ids_are_unique() {
        let catalog = Catalog::builtin();
        let listed: usize = catalog.sections().iter().map(|s| s.items.len()).sum();
        assert_eq!(catalog.len(), listed);
    }

    #[test]
    fn test_duplicate_id_first_wins() {
        let catalog = Catalog::new(vec![CatalogSection {
            category: "Dupes".to_string(),
            items: vec![
                CatalogItem {
                    id: ItemId::from("x"),
                    name: "First".to_string(),
                    price: Price::from_dollars(1),
                },
                CatalogItem {
                    id: ItemId::from("x"),
                    name: "Second".to_string(),
                    price: Price::from_dollars(2),
                },
            ],
        }]);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.item(&ItemId::from("x")).unwrap().name, "First");
    }

    #[test]
    fn test_section_serializes_with_numeric_prices() {
        let catalog = Catalog::builtin();
        let json = serde_json::to_value(catalog.sections()).unwrap();
        let first = &json[0]["items"][0];
        assert_eq!(first["id"], "pumpkin6");
        assert!(first["price"].is_number());
    }
}
