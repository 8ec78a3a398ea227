//! Assembled PC builds and the commit payload that creates them.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::component::{Component, ComponentSlot};
use super::id::BuildId;

const fn one() -> u32 {
    1
}

/// How a build was put together, which decides how quantities multiply.
///
/// - `Preconfigured`: a single catalog SKU with fixed components; quantity
///   multiplies the whole bundle.
/// - `Custom`: assembled slot by slot; each component carries its own
///   quantity and the build price is the sum of component lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum BuildKind {
    Preconfigured,
    #[default]
    Custom,
}

/// A PC build committed to the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PcBuild {
    /// Unique ID assigned at commit time.
    pub id: BuildId,
    /// Display name shown on the cart line.
    pub display_name: String,
    /// Occupied slots.
    #[serde(default)]
    pub components: BTreeMap<ComponentSlot, Component>,
    /// Per-slot quantities (custom builds only). Absent slots count as 1.
    #[serde(default, rename = "perComponentQuantities")]
    pub component_quantities: BTreeMap<ComponentSlot, u32>,
    /// Price of a single bundle (preconfigured) or the component sum
    /// (custom). Maintained by the cart aggregator.
    pub total_price: Decimal,
    /// Bundle vs. per-component pricing.
    #[serde(rename = "buildKind")]
    pub kind: BuildKind,
    /// Number of bundles (preconfigured builds only, >= 1).
    #[serde(default = "one")]
    pub build_quantity: u32,
    /// Free-form customer note.
    #[serde(default)]
    pub note: Option<String>,
    /// Commit timestamp.
    pub created_at: DateTime<Utc>,
}

impl PcBuild {
    /// Per-slot quantity, defaulting to 1 for slots with no explicit entry.
    #[must_use]
    pub fn slot_quantity(&self, slot: ComponentSlot) -> u32 {
        self.component_quantities.get(&slot).copied().unwrap_or(1)
    }

    /// Sum of `unit_price * slot_quantity` over the occupied slots.
    #[must_use]
    pub fn component_total(&self) -> Decimal {
        self.components
            .iter()
            .map(|(slot, component)| {
                component.unit_price * Decimal::from(self.slot_quantity(*slot))
            })
            .sum()
    }

    /// Contribution of this build to the cart total.
    ///
    /// Preconfigured builds multiply the bundle price by `build_quantity`;
    /// custom builds sum their component lines.
    #[must_use]
    pub fn effective_price(&self) -> Decimal {
        match self.kind {
            BuildKind::Preconfigured => {
                self.total_price * Decimal::from(self.build_quantity)
            }
            BuildKind::Custom => self.component_total(),
        }
    }

    /// Contribution of this build to the cart item count.
    ///
    /// A preconfigured build counts one per bundle; a custom build counts
    /// as a single assembled unit regardless of component quantities.
    #[must_use]
    pub const fn count_units(&self) -> u32 {
        match self.kind {
            BuildKind::Preconfigured => self.build_quantity,
            BuildKind::Custom => 1,
        }
    }
}

/// Component selection carried by a [`BuildDraft`].
///
/// The canonical shape is the slot map. The list shape survives only as an
/// ingestion convenience for older callers that submit a flat component
/// array; each entry is keyed by its catalog category and entries with an
/// unrecognized category are skipped. When two entries resolve to the
/// same slot the later one wins, matching the slot-overwrite semantics of
/// the composer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BuildComponents {
    Slots(BTreeMap<ComponentSlot, Component>),
    List(Vec<Component>),
}

impl BuildComponents {
    /// Normalize into the canonical slot map.
    ///
    /// List entries with an unrecognized category are skipped; duplicate
    /// categories resolve to the later entry.
    #[must_use]
    pub fn into_slots(self) -> BTreeMap<ComponentSlot, Component> {
        match self {
            Self::Slots(slots) => slots,
            Self::List(components) => components
                .into_iter()
                .filter_map(|c| ComponentSlot::from_category(&c.category).map(|slot| (slot, c)))
                .collect(),
        }
    }
}

impl Default for BuildComponents {
    fn default() -> Self {
        Self::Slots(BTreeMap::new())
    }
}

impl From<BTreeMap<ComponentSlot, Component>> for BuildComponents {
    fn from(slots: BTreeMap<ComponentSlot, Component>) -> Self {
        Self::Slots(slots)
    }
}

/// The commit payload handed to the cart aggregator.
///
/// Produced by the build composer for custom builds, or synthesized from a
/// catalog SKU for preconfigured ones. The aggregator assigns the ID and
/// timestamps the committed build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildDraft {
    pub display_name: String,
    #[serde(default)]
    pub components: BuildComponents,
    /// Per-slot quantities (custom builds).
    #[serde(default, rename = "perComponentQuantities")]
    pub quantities: BTreeMap<ComponentSlot, u32>,
    #[serde(default, rename = "buildKind")]
    pub kind: BuildKind,
    /// Supplied bundle price; when absent the aggregator computes the
    /// price from the components.
    #[serde(default)]
    pub total_price: Option<Decimal>,
    /// Number of bundles (preconfigured builds).
    #[serde(default = "one", rename = "buildQuantity")]
    pub build_quantity: u32,
    #[serde(default)]
    pub note: Option<String>,
}

impl BuildDraft {
    /// Draft a preconfigured build from a catalog SKU.
    #[must_use]
    pub fn preconfigured(
        display_name: impl Into<String>,
        total_price: Decimal,
        build_quantity: u32,
    ) -> Self {
        Self {
            display_name: display_name.into(),
            components: BuildComponents::default(),
            quantities: BTreeMap::new(),
            kind: BuildKind::Preconfigured,
            total_price: Some(total_price),
            build_quantity: build_quantity.max(1),
            note: None,
        }
    }
}
