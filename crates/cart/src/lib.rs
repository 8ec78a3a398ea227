//! Microtek cart core.
//!
//! Two cooperating pieces of pure state-transition logic:
//!
//! - [`store::CartStore`] - the cart aggregator. Owns the line items and
//!   committed PC builds, keeps the cached total in sync, and writes a
//!   snapshot through a [`snapshot::SnapshotStore`] after every mutation.
//! - [`composer::BuildComposer`] - the in-progress PC configuration. Holds
//!   one component per slot until the selection is committed to the cart
//!   as a [`microtek_core::BuildDraft`].
//!
//! Everything is single-threaded and synchronous: the owning session is
//! the only writer, so there is no locking. The persisted snapshot is an
//! advisory cache; a missing or corrupt snapshot hydrates to an empty
//! cart, and a failed write leaves the in-memory state authoritative for
//! the rest of the session.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod composer;
pub mod config;
pub mod snapshot;
pub mod store;

pub use composer::BuildComposer;
pub use config::{CartConfig, ConfigError};
pub use snapshot::{FileStore, MemoryStore, SnapshotError, SnapshotStore};
pub use store::CartStore;
