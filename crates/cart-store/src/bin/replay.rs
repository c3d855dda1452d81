//! # Action Replay
//!
//! Applies a recorded stream of cart actions and prints the resulting cart.
//!
//! ## Usage
//! ```bash
//! # Replay a JSON-lines file, one action per line
//! cargo run -p cart-store --bin replay -- actions.jsonl
//!
//! # Or read from stdin
//! cat actions.jsonl | cargo run -p cart-store --bin replay
//!
//! # Start from a saved cart
//! CART_INITIAL_ITEMS=./cart.json CART_INITIAL_MODE=merge \
//!     cargo run -p cart-store --bin replay -- actions.jsonl
//! ```
//!
//! ## Input Format
//! ```text
//! {"type":"ADD_ITEM","payload":{"sku":"A"}}
//! {"type":"ADD_ITEM","payload":{"sku":"B","quantity":5}}
//! {"type":"REMOVE_ITEM","payload":{"sku":"A"}}
//! ```
//! Blank lines and lines starting with `#` are skipped.

use std::env;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;

use cart_core::{CartAction, CoreError};
use cart_store::{CartStore, StoreConfig, StoreError, StoreResult};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    init_tracing();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so stdout carries only the final cart.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,cart_store=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run() -> StoreResult<()> {
    let config = StoreConfig::from_env()?;
    let mut store = config.build_store()?;

    let input: Box<dyn BufRead> = match env::args().nth(1) {
        Some(path) => {
            let path = PathBuf::from(path);
            let file = File::open(&path).map_err(|source| StoreError::Io {
                path: path.clone(),
                source,
            })?;
            info!(path = %path.display(), "Replaying actions from file");
            Box::new(BufReader::new(file))
        }
        None => {
            info!("Replaying actions from stdin");
            Box::new(BufReader::new(io::stdin()))
        }
    };

    let applied = replay(&mut store, input)?;
    info!(
        applied,
        revision = store.revision(),
        line_items = store.line_items_count(),
        items = store.items_count(),
        "Replay finished"
    );

    println!("{}", serde_json::to_string_pretty(&store.view())?);
    Ok(())
}

/// Applies every action line from `input`, returning how many were applied.
///
/// A malformed line is logged and skipped; the rest of the stream still runs.
fn replay(store: &mut CartStore, input: impl BufRead) -> StoreResult<usize> {
    let mut applied = 0;

    for (index, line) in input.lines().enumerate() {
        let line = line.map_err(|source| StoreError::Io {
            path: PathBuf::from("<input>"),
            source,
        })?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        match CartAction::from_json(line) {
            Ok(action) => {
                store.dispatch(action);
                applied += 1;
            }
            Err(CoreError::InvalidAction(e)) => {
                warn!(line = index + 1, error = %e, "Skipping malformed action");
            }
            Err(e) => return Err(e.into()),
        }
    }

    Ok(applied)
}
