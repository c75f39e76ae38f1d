//! Cart entry model.

use serde::{Deserialize, Serialize};

use super::id::ItemId;

/// Errors that can occur when constructing a [`CartEntry`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EntryError {
    /// The quantity is zero; entries at zero are removed, never stored.
    #[error("cart entry quantity must be strictly positive")]
    ZeroQuantity,
    /// The item ID is not a valid catalog reference.
    #[error("item id must be a positive catalog reference, got {0}")]
    InvalidItemId(i32),
}

/// One cart line: a catalog item reference and how many of it the user wants.
///
/// ## Invariants
///
/// - `quantity` is strictly positive. An entry that would reach zero is
///   removed from the cart instead of being kept at zero.
/// - `item_id` is a positive catalog reference. The cart holds no item
///   metadata; consumers resolve names, prices, and images externally.
///
/// The cart collection holds at most one entry per `item_id`; that part of
/// the invariant is upheld by the store, not by this type.
///
/// The serialized shape is `{"id": <integer>, "quantity": <integer>}`, the
/// layout written under the persisted cart key. Deserialization does not
/// re-validate; the persistence layer drops entries for which
/// [`CartEntry::is_valid`] is false.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartEntry {
    #[serde(rename = "id")]
    item_id: ItemId,
    quantity: u32,
}

impl CartEntry {
    /// Create an entry with an explicit quantity.
    ///
    /// # Errors
    ///
    /// Returns [`EntryError::ZeroQuantity`] for a zero quantity and
    /// [`EntryError::InvalidItemId`] for a non-positive item ID.
    pub fn new(item_id: ItemId, quantity: u32) -> Result<Self, EntryError> {
        if item_id.as_i32() <= 0 {
            return Err(EntryError::InvalidItemId(item_id.as_i32()));
        }
        if quantity == 0 {
            return Err(EntryError::ZeroQuantity);
        }
        Ok(Self { item_id, quantity })
    }

    /// Create the entry a first "add to cart" produces: quantity 1.
    #[must_use]
    pub const fn single(item_id: ItemId) -> Self {
        Self {
            item_id,
            quantity: 1,
        }
    }

    /// The catalog item this entry refers to.
    #[must_use]
    pub const fn item_id(&self) -> ItemId {
        self.item_id
    }

    /// How many of the item are in the cart. Always >= 1 for a stored entry.
    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }

    /// This entry with one more of the item.
    #[must_use]
    pub const fn incremented(self) -> Self {
        Self {
            item_id: self.item_id,
            quantity: self.quantity + 1,
        }
    }

    /// This entry with one fewer of the item, or `None` when removing the
    /// last one - a zero-quantity entry must never exist.
    #[must_use]
    pub const fn decremented(self) -> Option<Self> {
        match self.quantity {
            0 | 1 => None,
            q => Some(Self {
                item_id: self.item_id,
                quantity: q - 1,
            }),
        }
    }

    /// Whether a deserialized entry satisfies the stored-entry invariants.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.item_id.as_i32() > 0 && self.quantity > 0
    }
}
