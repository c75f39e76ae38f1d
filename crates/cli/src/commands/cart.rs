//! Cart manipulation commands.
//!
//! Each command opens the configured store file, replays the persisted cart
//! into a [`CartStore`], applies its operation (which writes through), and
//! prints the resulting state.

use thiserror::Error;

use cartful_cart::config::CartConfig;
use cartful_cart::error::StoreError;
use cartful_cart::persist::{FileStore, PersistenceBridge};
use cartful_cart::store::CartStore;
use cartful_core::ItemId;

/// Errors that can occur while running a cart command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] cartful_cart::config::ConfigError),

    /// The store file could not be opened.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Open the persisted cart described by the environment.
fn open_cart() -> Result<CartStore<FileStore>, CliError> {
    let config = CartConfig::from_env()?;
    let store = FileStore::open(config.storage_path)?;
    let bridge = PersistenceBridge::with_key(store, config.storage_key);
    Ok(CartStore::new(bridge))
}

/// Add one of `item_id` to the cart.
pub fn add(item_id: i32) -> Result<(), CliError> {
    let mut cart = open_cart()?;
    cart.increase_quantity(ItemId::new(item_id));
    print_cart(&cart);
    Ok(())
}

/// Remove one of `item_id` from the cart.
pub fn drop_one(item_id: i32) -> Result<(), CliError> {
    let mut cart = open_cart()?;
    cart.decrease_quantity(ItemId::new(item_id));
    print_cart(&cart);
    Ok(())
}

/// Drop the entry for `item_id` entirely.
pub fn remove(item_id: i32) -> Result<(), CliError> {
    let mut cart = open_cart()?;
    cart.remove_item(ItemId::new(item_id));
    print_cart(&cart);
    Ok(())
}

/// Show the cart contents and total quantity.
pub fn show() -> Result<(), CliError> {
    let cart = open_cart()?;
    print_cart(&cart);
    Ok(())
}

#[allow(clippy::print_stdout)]
fn print_cart(cart: &CartStore<FileStore>) {
    if cart.entries().is_empty() {
        println!("cart is empty");
        return;
    }

    for entry in cart.entries() {
        println!("item {:>6}  x{}", entry.item_id().as_i32(), entry.quantity());
    }
    println!("total: {}", cart.total_quantity());
}
