//! Microtek Core - Shared domain types.
//!
//! This crate provides the common types used across all Microtek components:
//! - `cart` - Cart aggregation and PC-build composition
//! - future binaries (order submission workers, admin tooling)
//!
//! # Architecture
//!
//! The core crate contains only types and pure computation - no I/O, no
//! storage access, no HTTP clients. This keeps it lightweight and allows it
//! to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Components, catalog products, cart line items, PC builds,
//!   and order-submission shapes

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
