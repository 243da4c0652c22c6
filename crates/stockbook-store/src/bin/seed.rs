//! # Seed Data Writer
//!
//! Populates a data directory with the hardcoded seed snapshots.
//!
//! ## Usage
//! ```bash
//! # Seed the default directory (./data)
//! cargo run -p stockbook-store --bin seed
//!
//! # Seed a specific directory
//! cargo run -p stockbook-store --bin seed -- --data-dir /tmp/stockbook
//! ```
//!
//! Existing snapshots in the directory are replaced; this is the same
//! operation as the console's "reset to initial data" button.

use std::env;
use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use stockbook_store::{Inventory, StoreConfig, StoreResult};

fn main() -> ExitCode {
    // RUST_LOG overrides; default to info so the summary is visible.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let data_dir = parse_data_dir();

    match run(&data_dir) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "Seeding failed");
            ExitCode::FAILURE
        }
    }
}

fn run(data_dir: &str) -> StoreResult<()> {
    let mut inventory = Inventory::open(StoreConfig::new(data_dir))?;
    inventory.reset_all()?;

    info!(
        data_dir = %data_dir,
        products = inventory.products().len(),
        clients = inventory.clients().len(),
        suppliers = inventory.suppliers().len(),
        "Seeded data directory"
    );
    Ok(())
}

/// Reads `--data-dir <path>` from the arguments; defaults to `./data`.
fn parse_data_dir() -> String {
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--data-dir" {
            if let Some(dir) = args.next() {
                return dir;
            }
        }
    }
    "./data".to_string()
}
