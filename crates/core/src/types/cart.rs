//! Cart state: line items, committed builds, and the derived total.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::build::PcBuild;

/// An individually purchased catalog product in the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Display name.
    pub name: String,
    /// Catalog reference (unique within the cart's items).
    pub reference: String,
    /// Unit price at the time the item was added.
    pub unit_price: Decimal,
    /// Units of this product (always >= 1).
    pub quantity: u32,
}

impl LineItem {
    /// `unit_price * quantity` for this line.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

/// The full cart: line items, committed PC builds, and a cached total.
///
/// `total` is derived, never authoritative; [`Self::computed_total`] is the
/// source of truth and the cart aggregator keeps the cache in sync after
/// every mutation. Both collections preserve insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartState {
    #[serde(default)]
    pub items: Vec<LineItem>,
    #[serde(default)]
    pub pc_builds: Vec<PcBuild>,
    #[serde(default)]
    pub total: Decimal,
}

impl CartState {
    /// Recompute the total from scratch over items and builds.
    #[must_use]
    pub fn computed_total(&self) -> Decimal {
        let items: Decimal = self.items.iter().map(LineItem::line_total).sum();
        let builds: Decimal = self.pc_builds.iter().map(PcBuild::effective_price).sum();
        items + builds
    }

    /// Number of purchasable units in the cart.
    ///
    /// Line items count per unit; preconfigured builds count per bundle;
    /// a custom build counts as one unit regardless of its internal
    /// component quantities.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        let items: u32 = self.items.iter().map(|item| item.quantity).sum();
        let builds: u32 = self.pc_builds.iter().map(PcBuild::count_units).sum();
        items + builds
    }

    /// True when the cart holds neither items nor builds.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty() && self.pc_builds.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::BTreeMap;

    use chrono::Utc;

    use super::*;
    use crate::types::build::BuildKind;
    use crate::types::component::{Component, ComponentSlot};
    use crate::types::id::BuildId;

    fn item(reference: &str, price: i64, quantity: u32) -> LineItem {
        LineItem {
            name: reference.to_string(),
            reference: reference.to_string(),
            unit_price: Decimal::from(price),
            quantity,
        }
    }

    #[test]
    fn test_line_total() {
        assert_eq!(item("M1", 1500, 3).line_total(), Decimal::from(4500));
    }

    #[test]
    fn test_computed_total_sums_items_and_builds() {
        let mut components = BTreeMap::new();
        components.insert(
            ComponentSlot::Cpu,
            Component {
                name: "Ryzen 5".to_string(),
                reference: "C-01".to_string(),
                unit_price: Decimal::from(30_000),
                category: "cpu".to_string(),
            },
        );
        let state = CartState {
            items: vec![item("M1", 1500, 2)],
            pc_builds: vec![PcBuild {
                id: BuildId::new(),
                display_name: "Office PC".to_string(),
                components,
                component_quantities: BTreeMap::new(),
                total_price: Decimal::from(30_000),
                kind: BuildKind::Custom,
                build_quantity: 1,
                note: None,
                created_at: Utc::now(),
            }],
            total: Decimal::ZERO,
        };
        assert_eq!(state.computed_total(), Decimal::from(33_000));
        assert_eq!(state.item_count(), 3);
    }

    #[test]
    fn test_empty_state() {
        let state = CartState::default();
        assert!(state.is_empty());
        assert_eq!(state.computed_total(), Decimal::ZERO);
        assert_eq!(state.item_count(), 0);
    }

    #[test]
    fn test_serde_layout() {
        let state = CartState {
            items: vec![item("M1", 1500, 2)],
            pc_builds: Vec::new(),
            total: Decimal::from(3000),
        };
        let value = serde_json::to_value(&state).unwrap();
        assert!(value.get("items").is_some());
        assert!(value.get("pcBuilds").is_some());
        assert!(value.get("total").is_some());
        let first = value.get("items").unwrap().get(0).unwrap();
        assert!(first.get("unitPrice").is_some());
    }
}
