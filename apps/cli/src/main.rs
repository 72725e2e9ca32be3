//! # Fruit Jar Application Entry Point
//!
//! This is the main entry point for the terminal application.
//!
//! ## Application Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Fruit Jar CLI                                  │
//! │                                                                         │
//! │  main.rs ────► Starts the runtime, delegates to lib.rs                 │
//! │                                                                         │
//! │  lib.rs ─────► Parses arguments, builds state, dispatches              │
//! │                                                                         │
//! │  commands/ ──► list, show, add, add-group, remove, set-quantity,       │
//! │                clear, jar                                               │
//! │                                                                         │
//! │  state/ ─────► CatalogState (session cache), JarState (hydrated)       │
//! │                                                                         │
//! │                                 │                                       │
//! │                                 ▼                                       │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Remote catalog endpoint        Local jar document               │  │
//! │  │  (GET, JSON array)              (fruit-jar-storage.json)         │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    // The actual setup is in lib.rs for better testability
    fruitjar_cli::run().await
}
