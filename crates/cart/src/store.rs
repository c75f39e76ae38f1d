//! Cart state container.

use tracing::warn;

use cartful_core::{CartEntry, ItemId};

use crate::persist::{KeyValueStore, PersistenceBridge};

/// The cart state container: an ordered entry collection plus the cart
/// panel visibility flag.
///
/// Consumers hold one `CartStore` per session and pass it by reference to
/// whichever components need cart access. Reads are pure derivations over
/// the in-memory collection; every mutation ends in a synchronous
/// write-through to the persistence bridge, so a reload restores the cart
/// exactly as last mutated.
///
/// The panel flag is deliberately ephemeral: every fresh session starts
/// with the cart panel closed, and toggling it never touches the store.
///
/// ## Invariants
///
/// For any sequence of calls:
/// - at most one entry exists per item ID;
/// - every entry's quantity is strictly positive (an entry reaching zero is
///   removed, never retained);
/// - entry order is insertion order, and mutations of existing entries keep
///   their position.
#[derive(Debug)]
pub struct CartStore<S> {
    entries: Vec<CartEntry>,
    is_open: bool,
    bridge: PersistenceBridge<S>,
}

impl<S: KeyValueStore> CartStore<S> {
    /// Create a store initialized from whatever `bridge` has persisted.
    ///
    /// Never fails: an absent or corrupt persisted cart degrades to empty
    /// inside the bridge.
    #[must_use]
    pub fn new(bridge: PersistenceBridge<S>) -> Self {
        let entries = bridge.load();
        Self {
            entries,
            is_open: false,
            bridge,
        }
    }

    /// Quantity of the entry matching `item_id`, or 0 when absent.
    #[must_use]
    pub fn item_quantity(&self, item_id: ItemId) -> u32 {
        self.entries
            .iter()
            .find(|entry| entry.item_id() == item_id)
            .map_or(0, CartEntry::quantity)
    }

    /// Sum of all entry quantities; 0 for an empty cart.
    ///
    /// Recomputed on every call - never cached, never stale.
    #[must_use]
    pub fn total_quantity(&self) -> u32 {
        self.entries.iter().map(CartEntry::quantity).sum()
    }

    /// The full entry collection, in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    /// Whether the cart panel is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.is_open
    }

    /// Add one of `item_id` to the cart.
    ///
    /// A new item is appended with quantity 1; an existing entry is
    /// incremented in place, keeping its position.
    pub fn increase_quantity(&mut self, item_id: ItemId) {
        match self
            .entries
            .iter_mut()
            .find(|entry| entry.item_id() == item_id)
        {
            Some(entry) => *entry = entry.incremented(),
            None => self.entries.push(CartEntry::single(item_id)),
        }
        self.persist();
    }

    /// Remove one of `item_id` from the cart.
    ///
    /// An entry at quantity 1 is removed entirely; otherwise it is
    /// decremented in place. Absent items are a no-op - never an error,
    /// never a negative quantity.
    pub fn decrease_quantity(&mut self, item_id: ItemId) {
        if self.item_quantity(item_id) == 1 {
            self.entries.retain(|entry| entry.item_id() != item_id);
        } else if let Some(entry) = self
            .entries
            .iter_mut()
            .find(|entry| entry.item_id() == item_id)
        {
            if let Some(decremented) = entry.decremented() {
                *entry = decremented;
            }
        }
        self.persist();
    }

    /// Drop any entry matching `item_id`, whatever its quantity. No-op when
    /// absent.
    pub fn remove_item(&mut self, item_id: ItemId) {
        self.entries.retain(|entry| entry.item_id() != item_id);
        self.persist();
    }

    /// Open the cart panel. Idempotent; no persistence effect.
    pub fn open_cart(&mut self) {
        self.is_open = true;
    }

    /// Close the cart panel. Idempotent; no persistence effect.
    pub fn close_cart(&mut self) {
        self.is_open = false;
    }

    /// Write-through after a mutation.
    ///
    /// A store-write failure keeps the in-memory state and is logged rather
    /// than surfaced: cart operations stay total and the next successful
    /// write repairs the stored copy.
    fn persist(&mut self) {
        if let Err(err) = self.bridge.save(&self.entries) {
            warn!(error = %err, "cart write-through failed; keeping in-memory state");
        }
    }
}
