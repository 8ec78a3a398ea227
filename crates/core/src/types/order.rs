//! Order-submission shapes.
//!
//! The order collaborator accepts flat rows of `{name, reference,
//! quantity, unitPrice}`. This module flattens a cart into that shape; the
//! caller submits the rows and clears the cart once the submission is
//! confirmed.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::build::BuildKind;
use super::cart::CartState;

/// One row of an order submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub name: String,
    pub reference: String,
    pub quantity: u32,
    pub unit_price: Decimal,
}

/// Flatten a cart into order-submission rows.
///
/// Line items map one to one. A preconfigured build contributes a single
/// bundle row priced at its bundle price. A custom build contributes one
/// row per occupied slot, carrying that slot's quantity.
#[must_use]
pub fn order_lines(cart: &CartState) -> Vec<OrderLine> {
    let mut lines: Vec<OrderLine> = cart
        .items
        .iter()
        .map(|item| OrderLine {
            name: item.name.clone(),
            reference: item.reference.clone(),
            quantity: item.quantity,
            unit_price: item.unit_price,
        })
        .collect();

    for build in &cart.pc_builds {
        match build.kind {
            BuildKind::Preconfigured => lines.push(OrderLine {
                name: build.display_name.clone(),
                reference: build.id.to_string(),
                quantity: build.build_quantity,
                unit_price: build.total_price,
            }),
            BuildKind::Custom => {
                for (slot, component) in &build.components {
                    lines.push(OrderLine {
                        name: component.name.clone(),
                        reference: component.reference.clone(),
                        quantity: build.slot_quantity(*slot),
                        unit_price: component.unit_price,
                    });
                }
            }
        }
    }

    lines
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::BTreeMap;

    use chrono::Utc;

    use super::*;
    use crate::types::build::PcBuild;
    use crate::types::cart::LineItem;
    use crate::types::component::{Component, ComponentSlot};
    use crate::types::id::BuildId;

    #[test]
    fn test_flattens_items_and_builds() {
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
        let mut quantities = BTreeMap::new();
        quantities.insert(ComponentSlot::Cpu, 2);

        let cart = CartState {
            items: vec![LineItem {
                name: "Mouse".to_string(),
                reference: "M1".to_string(),
                unit_price: Decimal::from(1500),
                quantity: 2,
            }],
            pc_builds: vec![
                PcBuild {
                    id: BuildId::new(),
                    display_name: "Gaming bundle".to_string(),
                    components: BTreeMap::new(),
                    component_quantities: BTreeMap::new(),
                    total_price: Decimal::from(250_000),
                    kind: BuildKind::Preconfigured,
                    build_quantity: 3,
                    note: None,
                    created_at: Utc::now(),
                },
                PcBuild {
                    id: BuildId::new(),
                    display_name: "Custom".to_string(),
                    components,
                    component_quantities: quantities,
                    total_price: Decimal::from(60_000),
                    kind: BuildKind::Custom,
                    build_quantity: 1,
                    note: None,
                    created_at: Utc::now(),
                },
            ],
            total: Decimal::ZERO,
        };

        let lines = order_lines(&cart);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines.first().unwrap().reference, "M1");
        assert_eq!(lines.get(1).unwrap().quantity, 3);
        assert_eq!(lines.get(1).unwrap().unit_price, Decimal::from(250_000));
        assert_eq!(lines.get(2).unwrap().reference, "C-01");
        assert_eq!(lines.get(2).unwrap().quantity, 2);
    }

    #[test]
    fn test_empty_cart_yields_no_lines() {
        assert!(order_lines(&CartState::default()).is_empty());
    }
}
