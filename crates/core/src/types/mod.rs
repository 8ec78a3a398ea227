//! Core types for Microtek.
//!
//! This module provides the domain vocabulary shared by the cart core and
//! its collaborators.

pub mod build;
pub mod cart;
pub mod component;
pub mod id;
pub mod order;
pub mod product;

pub use build::{BuildComponents, BuildDraft, BuildKind, PcBuild};
pub use cart::{CartState, LineItem};
pub use component::{Component, ComponentSlot};
pub use id::BuildId;
pub use order::{OrderLine, order_lines};
pub use product::Product;
