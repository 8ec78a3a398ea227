//! Normalized catalog product record.
//!
//! Catalog exports accumulated several spellings for the price field over
//! the years (`unitprice`, `prixVente`, `price`, `prix`). That ambiguity is
//! resolved here, at the ingestion boundary, so the cart core only ever
//! sees one shape.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::cart::LineItem;
use super::component::{Component, ComponentSlot};

/// A catalog product as supplied by the provider layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Display name.
    pub name: String,
    /// Catalog reference (unique per product).
    pub reference: String,
    /// Catalog category (e.g. "cpu", "monitor", "pc").
    #[serde(default)]
    pub category: String,
    /// Unit price. Accepts the legacy field spellings; a record with no
    /// price field at all falls back to zero.
    #[serde(
        default,
        alias = "unitprice",
        alias = "prixVente",
        alias = "price",
        alias = "prix"
    )]
    pub unit_price: Decimal,
    /// Units in stock.
    #[serde(default)]
    pub stock: u32,
}

impl Product {
    /// Slot this product belongs to, if its category names one.
    #[must_use]
    pub fn slot(&self) -> Option<ComponentSlot> {
        ComponentSlot::from_category(&self.category)
    }

    /// Convert into a build [`Component`].
    #[must_use]
    pub fn into_component(self) -> Component {
        Component {
            name: self.name,
            reference: self.reference,
            unit_price: self.unit_price,
            category: self.category,
        }
    }

    /// Create a cart line item for `quantity` units of this product.
    #[must_use]
    pub fn line_item(&self, quantity: u32) -> LineItem {
        LineItem {
            name: self.name.clone(),
            reference: self.reference.clone(),
            unit_price: self.unit_price,
            quantity: quantity.max(1),
        }
    }
}
