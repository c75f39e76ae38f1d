//! Core types for Cartful.
//!
//! This module provides type-safe wrappers for the cart domain.

pub mod entry;
pub mod id;

pub use entry::{CartEntry, EntryError};
pub use id::*;
