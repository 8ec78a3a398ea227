//! The cart aggregator.
//!
//! [`CartStore`] owns the cart state for the active session. Every
//! mutation recomputes the cached total and writes a full snapshot through
//! the injected [`SnapshotStore`] before returning. Nothing here surfaces
//! an error to the caller: malformed input degrades (zero prices, no-op
//! quantity changes) and persistence failures are logged while the
//! in-memory state stays authoritative. This is a UI cart, not a
//! transactional ledger.

use rust_decimal::Decimal;

use microtek_core::{BuildDraft, BuildId, BuildKind, CartState, ComponentSlot, PcBuild};

use crate::snapshot::SnapshotStore;

/// The cart aggregator: line items, committed PC builds, derived total.
pub struct CartStore<S: SnapshotStore> {
    state: CartState,
    storage: S,
    key: String,
}

impl<S: SnapshotStore> CartStore<S> {
    /// Hydrate a cart from the snapshot stored under `key`.
    ///
    /// A missing, unreadable, or corrupt snapshot hydrates an empty cart;
    /// the degraded path is logged, never raised. The cached total is
    /// recomputed on load so a hand-edited snapshot cannot smuggle in a
    /// stale value.
    pub fn open(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let state = match storage.get(&key) {
            Ok(Some(blob)) => match serde_json::from_str::<CartState>(&blob) {
                Ok(state) => state,
                Err(e) => {
                    tracing::warn!("Discarding corrupt cart snapshot '{key}': {e}");
                    CartState::default()
                }
            },
            Ok(None) => CartState::default(),
            Err(e) => {
                tracing::warn!("Failed to read cart snapshot '{key}': {e}");
                CartState::default()
            }
        };

        let mut store = Self { state, storage, key };
        store.state.total = store.state.computed_total();
        store
    }

    /// Current cart state.
    #[must_use]
    pub const fn state(&self) -> &CartState {
        &self.state
    }

    /// Cached running total.
    #[must_use]
    pub const fn total(&self) -> Decimal {
        self.state.total
    }

    /// Number of purchasable units: line-item quantities plus one per
    /// preconfigured bundle, with each custom build counting as one.
    #[must_use]
    pub fn cart_item_count(&self) -> u32 {
        self.state.item_count()
    }

    /// Tear down the store, releasing the underlying storage.
    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Add `quantity` units of a catalog product.
    ///
    /// If `reference` is already in the cart the existing line's quantity
    /// is incremented; otherwise a new line is appended. A zero quantity
    /// for a new line falls back to 1.
    pub fn add_line_item(
        &mut self,
        name: impl Into<String>,
        reference: impl Into<String>,
        unit_price: Decimal,
        quantity: u32,
    ) {
        let reference = reference.into();
        if let Some(item) = self
            .state
            .items
            .iter_mut()
            .find(|item| item.reference == reference)
        {
            item.quantity = item.quantity.saturating_add(quantity);
        } else {
            self.state.items.push(microtek_core::LineItem {
                name: name.into(),
                reference,
                unit_price,
                quantity: quantity.max(1),
            });
        }
        self.sync();
    }

    /// Remove the line with `reference`; absent references are a no-op.
    pub fn remove_line_item(&mut self, reference: &str) {
        let before = self.state.items.len();
        self.state.items.retain(|item| item.reference != reference);
        if self.state.items.len() != before {
            self.sync();
        }
    }

    /// Overwrite a line's quantity. Quantities below 1 are rejected as a
    /// no-op, keeping the previous value.
    pub fn set_line_item_quantity(&mut self, reference: &str, quantity: u32) {
        if quantity < 1 {
            return;
        }
        if let Some(item) = self
            .state
            .items
            .iter_mut()
            .find(|item| item.reference == reference)
        {
            item.quantity = quantity;
            self.sync();
        }
    }

    /// Commit a build draft to the cart and return the assigned ID.
    ///
    /// The draft's component representation is normalized to the canonical
    /// slot map, per-slot quantities are kept only for occupied slots (and
    /// clamped to at least 1), and the build price is the supplied value
    /// or, absent one, the sum of component lines.
    pub fn add_pc_build(&mut self, draft: BuildDraft) -> BuildId {
        let components = draft.components.into_slots();
        let component_quantities = draft
            .quantities
            .into_iter()
            .filter(|(slot, _)| components.contains_key(slot))
            .map(|(slot, quantity)| (slot, quantity.max(1)))
            .collect();

        let mut build = PcBuild {
            id: BuildId::new(),
            display_name: draft.display_name,
            components,
            component_quantities,
            total_price: Decimal::ZERO,
            kind: draft.kind,
            build_quantity: draft.build_quantity.max(1),
            note: draft.note,
            created_at: chrono::Utc::now(),
        };
        build.total_price = draft
            .total_price
            .unwrap_or_else(|| build.component_total());

        let id = build.id;
        tracing::debug!("Committed {:?} build {id} to cart", build.kind);
        self.state.pc_builds.push(build);
        self.sync();
        id
    }

    /// Remove the build with `id`; absent IDs are a no-op.
    pub fn remove_pc_build(&mut self, id: BuildId) {
        let before = self.state.pc_builds.len();
        self.state.pc_builds.retain(|build| build.id != id);
        if self.state.pc_builds.len() != before {
            self.sync();
        }
    }

    /// Set the bundle quantity of a preconfigured build.
    ///
    /// A no-op for custom builds and for quantities below 1.
    pub fn set_pc_build_quantity(&mut self, id: BuildId, quantity: u32) {
        if quantity < 1 {
            return;
        }
        if let Some(build) = self
            .state
            .pc_builds
            .iter_mut()
            .find(|build| build.id == id && build.kind == BuildKind::Preconfigured)
        {
            build.build_quantity = quantity;
            self.sync();
        }
    }

    /// Set the quantity of one occupied slot in a custom build and refresh
    /// that build's price from its components.
    ///
    /// A no-op for preconfigured builds, unoccupied slots, and quantities
    /// below 1.
    pub fn set_pc_build_component_quantity(
        &mut self,
        id: BuildId,
        slot: ComponentSlot,
        quantity: u32,
    ) {
        if quantity < 1 {
            return;
        }
        if let Some(build) = self
            .state
            .pc_builds
            .iter_mut()
            .find(|build| build.id == id && build.kind == BuildKind::Custom)
        {
            if !build.components.contains_key(&slot) {
                return;
            }
            build.component_quantities.insert(slot, quantity);
            build.total_price = build.component_total();
            self.sync();
        }
    }

    /// Empty the cart. Idempotent.
    pub fn clear(&mut self) {
        self.state = CartState::default();
        self.sync();
    }

    /// Recompute the cached total and write the snapshot.
    ///
    /// A serialization or storage failure is logged; the in-memory state
    /// remains authoritative for the session.
    fn sync(&mut self) {
        self.state.total = self.state.computed_total();
        match serde_json::to_string(&self.state) {
            Ok(blob) => {
                if let Err(e) = self.storage.set(&self.key, &blob) {
                    tracing::warn!("Failed to persist cart snapshot '{}': {e}", self.key);
                }
            }
            Err(e) => tracing::warn!("Failed to serialize cart snapshot: {e}"),
        }
    }
}
