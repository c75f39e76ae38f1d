//! Cartful CLI - drive a file-backed cart from the command line.
//!
//! A stand-in for the UI layer: every invocation opens the cart persisted
//! in the configured store file, applies one operation, and writes the
//! result back through, so cart contents survive between invocations the
//! way they survive page reloads in a browser.
//!
//! # Usage
//!
//! ```bash
//! # Add one of item 5 (new items start at quantity 1)
//! cartful add 5
//!
//! # Remove one of item 5 (the entry disappears at zero)
//! cartful drop 5
//!
//! # Drop the whole entry for item 5, whatever its quantity
//! cartful remove 5
//!
//! # Show the cart contents and total quantity
//! cartful show
//! ```
//!
//! # Environment Variables
//!
//! - `CARTFUL_STORAGE_PATH` - Store file path (default: `cartful-store.json`)
//! - `CARTFUL_STORAGE_KEY` - Logical cart key (default: `shopping-cart`)

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "cartful")]
#[command(author, version, about = "Cartful command-line cart")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add one of an item to the cart
    Add {
        /// Catalog item ID
        item_id: i32,
    },
    /// Remove one of an item from the cart
    Drop {
        /// Catalog item ID
        item_id: i32,
    },
    /// Drop an item's entry entirely
    Remove {
        /// Catalog item ID
        item_id: i32,
    },
    /// Show cart contents and total quantity
    Show,
}

fn main() {
    dotenvy::dotenv().ok();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), commands::cart::CliError> {
    match cli.command {
        Commands::Add { item_id } => commands::cart::add(item_id)?,
        Commands::Drop { item_id } => commands::cart::drop_one(item_id)?,
        Commands::Remove { item_id } => commands::cart::remove(item_id)?,
        Commands::Show => commands::cart::show()?,
    }
    Ok(())
}
