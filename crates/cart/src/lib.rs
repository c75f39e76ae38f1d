//! Cartful Cart - client-side shopping-cart state container.
//!
//! This crate owns the cart reducer and its persistence:
//!
//! - [`store::CartStore`] holds the ordered entry collection and the cart
//!   panel visibility flag, and exposes the mutation and derivation surface
//!   the UI layer consumes.
//! - [`persist::PersistenceBridge`] writes the entry collection through to a
//!   string-keyed [`persist::KeyValueStore`] after every mutation and
//!   restores it at construction, so cart contents survive session restarts.
//!
//! # Architecture
//!
//! The store is a pure state machine; all I/O and encoding concerns live in
//! the bridge. Consumers construct a store over whichever backend fits their
//! host ([`persist::FileStore`] for a local session file,
//! [`persist::MemoryStore`] for ephemeral carts and tests) and pass it by
//! reference to whatever needs cart access.
//!
//! ```
//! use cartful_cart::persist::{MemoryStore, PersistenceBridge};
//! use cartful_cart::store::CartStore;
//! use cartful_core::ItemId;
//!
//! let bridge = PersistenceBridge::new(MemoryStore::new());
//! let mut cart = CartStore::new(bridge);
//!
//! cart.increase_quantity(ItemId::new(5));
//! cart.increase_quantity(ItemId::new(5));
//! assert_eq!(cart.item_quantity(ItemId::new(5)), 2);
//! assert_eq!(cart.total_quantity(), 2);
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod persist;
pub mod store;

pub use config::{CartConfig, ConfigError};
pub use error::{PersistError, StoreError};
pub use persist::{FileStore, KeyValueStore, MemoryStore, PersistenceBridge};
pub use store::CartStore;
