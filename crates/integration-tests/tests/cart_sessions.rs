//! Integration tests for cart state across session restarts.
//!
//! Each "session" is a fresh `CartStore` over a `FileStore` opened on the
//! same backing file, mirroring a page reload in the original UI host.

use cartful_cart::persist::{FileStore, PersistenceBridge};
use cartful_cart::store::CartStore;
use cartful_core::{CartEntry, ItemId};

use std::path::Path;

// =============================================================================
// Helpers
// =============================================================================

/// Start a session over the cart file at `path`.
fn open_session(path: &Path) -> CartStore<FileStore> {
    let store = FileStore::open(path).expect("store file should open");
    CartStore::new(PersistenceBridge::new(store))
}

fn entry(id: i32, quantity: u32) -> CartEntry {
    CartEntry::new(ItemId::new(id), quantity).expect("valid test entry")
}

// =============================================================================
// Session Restart Tests
// =============================================================================

#[test]
fn test_cart_contents_survive_restart() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("cart.json");

    let mut cart = open_session(&path);
    cart.increase_quantity(ItemId::new(5));
    cart.increase_quantity(ItemId::new(5));
    cart.increase_quantity(ItemId::new(7));
    drop(cart);

    let cart = open_session(&path);
    assert_eq!(cart.entries(), &[entry(5, 2), entry(7, 1)]);
    assert_eq!(cart.total_quantity(), 3);
}

#[test]
fn test_panel_visibility_resets_each_session() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("cart.json");

    let mut cart = open_session(&path);
    cart.increase_quantity(ItemId::new(5));
    cart.open_cart();
    assert!(cart.is_open());
    drop(cart);

    // Entries persist; the open panel does not.
    let cart = open_session(&path);
    assert!(!cart.is_open());
    assert_eq!(cart.total_quantity(), 1);
}

#[test]
fn test_last_mutation_wins_across_sessions() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("cart.json");

    let mut cart = open_session(&path);
    cart.increase_quantity(ItemId::new(5));
    cart.increase_quantity(ItemId::new(7));
    drop(cart);

    let mut cart = open_session(&path);
    cart.remove_item(ItemId::new(5));
    cart.decrease_quantity(ItemId::new(7));
    drop(cart);

    let cart = open_session(&path);
    assert!(cart.entries().is_empty());
    assert_eq!(cart.total_quantity(), 0);
}

#[test]
fn test_fresh_file_starts_empty_without_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let cart = open_session(&dir.path().join("never-written.json"));

    assert!(cart.entries().is_empty());
    assert_eq!(cart.item_quantity(ItemId::new(1)), 0);
}
