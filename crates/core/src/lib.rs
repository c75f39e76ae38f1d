//! Cartful Core - Shared types library.
//!
//! This crate provides the domain types used across all Cartful components:
//! - `cart` - The cart state container and persistence bridge
//! - `cli` - Command-line consumer exercising the cart against a local store
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no
//! logging. This keeps it lightweight and allows it to be used anywhere,
//! including in consumers that bring their own persistence medium.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and the cart entry model

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
