//! # Commands Module
//!
//! All commands exposed on the terminal.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── catalog.rs  ◄─── Browse commands (list, show)
//! └── jar.rs      ◄─── Jar commands (add, add-group, remove,
//!                      set-quantity, clear, jar)
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  $ fruitjar add 6                                                      │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  clap parses ──► run() builds the state the command needs              │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  commands::jar::add(catalog, jar, 6)                                   │
//! │      1. Look the record up in the catalog snapshot                     │
//! │      2. JarStore command (mutate + persist)                            │
//! │      3. Print the already-aggregated numbers                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## State Injection
//! Each command declares only the state it needs:
//! ```rust,ignore
//! // Only needs the catalog
//! async fn list(catalog: &mut CatalogState, ...)
//!
//! // Only needs the jar
//! async fn remove(jar: &mut JarState, id: i64)
//!
//! // Needs both (looks up the record, then mutates the jar)
//! async fn add(catalog: &mut CatalogState, jar: &mut JarState, id: i64)
//! ```

pub mod catalog;
pub mod jar;
