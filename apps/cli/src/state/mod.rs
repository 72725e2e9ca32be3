//! # State Module
//!
//! Application state for the terminal adapter.
//!
//! ## Why Multiple State Types?
//! Instead of a single `AppState` struct containing everything,
//! we use separate state types. This approach:
//!
//! 1. **Better Separation of Concerns**: Each state type has a single responsibility
//! 2. **Easier Testing**: Can construct individual states in isolation
//! 3. **Clearer Command Signatures**: Commands declare exactly what state they need
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │          ┌──────────────────┐        ┌───────────────────────┐          │
//! │          │  CatalogState    │        │  JarState             │          │
//! │          │                  │        │                       │          │
//! │          │  CatalogClient   │        │  JarStore (hydrated   │          │
//! │          │  + session cache │        │  before any command)  │          │
//! │          └──────────────────┘        └───────────────────────┘          │
//! │                                                                         │
//! │  LIFETIMES:                                                            │
//! │  • CatalogState: fetched at most once per process, cached after        │
//! │  • JarState: hydration resolves before any mutating command runs       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod catalog;
mod jar;

pub use catalog::CatalogState;
pub use jar::JarState;
