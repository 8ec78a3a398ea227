//! The build composer.
//!
//! Holds the in-progress PC configuration - at most one component per
//! slot, each with its own quantity - until the selection is committed to
//! the cart. The composer is ephemeral per editing session: it is never
//! persisted, and the owning page decides when to call [`BuildComposer::reset`].

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use microtek_core::{BuildComponents, BuildDraft, BuildKind, Component, ComponentSlot};

/// In-progress PC configuration.
///
/// Slots with no explicit quantity count as 1; quantities below 1 are
/// clamped rather than rejected.
#[derive(Debug, Clone, Default)]
pub struct BuildComposer {
    components: BTreeMap<ComponentSlot, Component>,
    quantities: BTreeMap<ComponentSlot, u32>,
}

impl BuildComposer {
    /// Create a composer with all slots empty and all quantities at 1.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Select `component` into `slot`, replacing any previous selection.
    pub fn set_component(&mut self, slot: ComponentSlot, component: Component) {
        self.components.insert(slot, component);
    }

    /// Empty `slot` and reset its quantity to 1.
    pub fn clear_component(&mut self, slot: ComponentSlot) {
        self.components.remove(&slot);
        self.quantities.remove(&slot);
    }

    /// Set the quantity for `slot`, clamped to a minimum of 1.
    pub fn set_component_quantity(&mut self, slot: ComponentSlot, quantity: u32) {
        self.quantities.insert(slot, quantity.max(1));
    }

    /// Component currently selected into `slot`, if any.
    #[must_use]
    pub fn component(&self, slot: ComponentSlot) -> Option<&Component> {
        self.components.get(&slot)
    }

    /// Quantity for `slot` (1 unless explicitly set).
    #[must_use]
    pub fn quantity(&self, slot: ComponentSlot) -> u32 {
        self.quantities.get(&slot).copied().unwrap_or(1)
    }

    /// True when no slot holds a component.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Running price of the selection: `unit_price * quantity` summed over
    /// the occupied slots.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.components
            .iter()
            .map(|(slot, component)| component.unit_price * Decimal::from(self.quantity(*slot)))
            .sum()
    }

    /// Restore all slots empty and all quantities to 1.
    pub fn reset(&mut self) {
        self.components.clear();
        self.quantities.clear();
    }

    /// Produce the commit payload for the current selection.
    ///
    /// The draft is always a custom build; the cart aggregator computes
    /// its price from the components. The composer keeps its state - the
    /// owning page calls [`Self::reset`] once the commit is confirmed.
    #[must_use]
    pub fn draft(&self, display_name: impl Into<String>, note: Option<String>) -> BuildDraft {
        BuildDraft {
            display_name: display_name.into(),
            components: BuildComponents::Slots(self.components.clone()),
            quantities: self
                .quantities
                .iter()
                .filter(|(slot, _)| self.components.contains_key(slot))
                .map(|(slot, quantity)| (*slot, *quantity))
                .collect(),
            kind: BuildKind::Custom,
            total_price: None,
            build_quantity: 1,
            note,
        }
    }
}
