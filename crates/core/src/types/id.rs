//! Newtype IDs for type-safe entity references.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a catalog item.
///
/// Catalog ids are short human-chosen slugs (e.g. `pumpkin6`), so the
/// wrapper is backed by a `String` rather than a numeric key. The cart
/// stores quantities against these ids without validating them against
/// the catalog; unknown ids simply price as zero.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Create an ID from any string-like value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the underlying string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_id_display_and_as_str() {
        let id = ItemId::new("pumpkin6");
        assert_eq!(id.as_str(), "pumpkin6");
        assert_eq!(id.to_string(), "pumpkin6");
    }

    #[test]
    fn test_item_id_serde_transparent() {
        let id = ItemId::from("pecanS");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"pecanS\"");

        let back: ItemId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
