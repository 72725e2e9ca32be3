//! # Fruit Jar CLI Library
//!
//! Core library for the Fruit Jar terminal application.
//! This is the main entry point that parses the command line, builds the
//! state each command needs, and dispatches.
//!
//! ## Module Organization
//! ```text
//! fruitjar_cli/
//! ├── lib.rs          ◄─── You are here (CLI definition & dispatch)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── catalog.rs  ◄─── Catalog session cache
//! │   └── jar.rs      ◄─── Hydrated jar store
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── catalog.rs  ◄─── Browse commands (list, show)
//! │   └── jar.rs      ◄─── Jar commands
//! └── error.rs        ◄─── App error type
//! ```
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Application Startup                               │
//! │                                                                         │
//! │  1. Initialize Logging ───────────────────────────────────────────────► │
//! │     • tracing-subscriber with env filter, on stderr                     │
//! │     • Default: WARN, can be overridden with RUST_LOG                    │
//! │                                                                         │
//! │  2. Parse the Command Line ───────────────────────────────────────────► │
//! │     • global --catalog-url and --storage overrides                      │
//! │                                                                         │
//! │  3. Build Only the State the Command Needs ───────────────────────────► │
//! │     • browse commands: CatalogState (fetch on first use)                │
//! │     • jar commands: JarState (hydrated before the command runs)         │
//! │                                                                         │
//! │  4. Dispatch & Render ────────────────────────────────────────────────► │
//! │     • failures print a message and map to a nonzero exit code           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod error;
pub mod state;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use commands::catalog::DisplayMode;
use error::CliError;
use fruitjar_catalog::CatalogClient;
use fruitjar_core::GroupKey;
use state::{CatalogState, JarState};

// =============================================================================
// CLI Definition
// =============================================================================

/// Browse the fruit catalog and fill your jar.
#[derive(Debug, Parser)]
#[command(name = "fruitjar", version, about)]
pub struct Cli {
    /// Catalog endpoint override (defaults to the production URL).
    #[arg(long, global = true, value_name = "URL")]
    pub catalog_url: Option<String>,

    /// Jar document path override (defaults to the platform data directory).
    #[arg(long, global = true, value_name = "PATH")]
    pub storage: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// All terminal commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Browse the catalog, optionally grouped by a taxonomy field
    List {
        /// Taxonomy field to group by
        #[arg(long, value_enum, default_value = "none")]
        group_by: GroupByArg,

        /// Render one flat table instead of the grouped list
        #[arg(long)]
        table: bool,
    },

    /// One fruit's nutrition facts and macronutrient breakdown
    Show { id: i64 },

    /// Show the jar: quantities, calorie totals, chart breakdown
    Jar,

    /// Add one fruit to the jar by id
    Add { id: i64 },

    /// Add every fruit in a taxonomy group to the jar
    AddGroup {
        /// Taxonomy field the label belongs to
        #[arg(long, value_enum, default_value = "none")]
        group_by: GroupByArg,

        /// Group label (e.g. "Rosaceae"; "All Fruits" for the whole catalog)
        label: String,
    },

    /// Remove ALL copies of a fruit from the jar
    Remove { id: i64 },

    /// Set a fruit's quantity to exactly N (0 removes it)
    SetQuantity { id: i64, quantity: usize },

    /// Empty the jar
    Clear,
}

/// Grouping key as it appears on the command line.
///
/// Mirror of [`GroupKey`] so the core type stays free of CLI derives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GroupByArg {
    None,
    Family,
    Order,
    Genus,
}

impl From<GroupByArg> for GroupKey {
    fn from(arg: GroupByArg) -> Self {
        match arg {
            GroupByArg::None => GroupKey::None,
            GroupByArg::Family => GroupKey::Family,
            GroupByArg::Order => GroupKey::Order,
            GroupByArg::Genus => GroupKey::Genus,
        }
    }
}

// =============================================================================
// Entry Point
// =============================================================================

/// Runs the application: parse, dispatch, render failures.
pub async fn run() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();
    debug!(?cli, "Parsed command line");

    match dispatch(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err.render());
            ExitCode::from(err.exit_code())
        }
    }
}

/// Builds the state each command needs, then delegates.
async fn dispatch(cli: Cli) -> Result<(), CliError> {
    let client = match &cli.catalog_url {
        Some(url) => CatalogClient::with_url(url),
        None => CatalogClient::new(),
    };
    let mut catalog = CatalogState::new(client);

    match cli.command {
        // Browse commands: catalog only.
        Command::List { group_by, table } => {
            let mode = if table {
                DisplayMode::Table
            } else {
                DisplayMode::List
            };
            commands::catalog::list(&mut catalog, group_by.into(), mode).await
        }
        Command::Show { id } => commands::catalog::show(&mut catalog, id).await,

        // Jar commands: hydrate the store first; `add` variants also
        // need the catalog for the record lookup.
        Command::Jar => {
            let jar = JarState::open(cli.storage).await?;
            commands::jar::show(&jar)
        }
        Command::Add { id } => {
            let mut jar = JarState::open(cli.storage).await?;
            commands::jar::add(&mut catalog, &mut jar, id).await
        }
        Command::AddGroup { group_by, label } => {
            let mut jar = JarState::open(cli.storage).await?;
            commands::jar::add_group(&mut catalog, &mut jar, group_by.into(), &label).await
        }
        Command::Remove { id } => {
            let mut jar = JarState::open(cli.storage).await?;
            commands::jar::remove(&mut jar, id).await
        }
        Command::SetQuantity { id, quantity } => {
            let mut jar = JarState::open(cli.storage).await?;
            commands::jar::set_quantity(&mut jar, id, quantity).await
        }
        Command::Clear => {
            let mut jar = JarState::open(cli.storage).await?;
            commands::jar::clear(&mut jar).await
        }
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=fruitjar_store=trace` - Trace one crate only
/// - Default: WARN, so command output stays clean
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_by_arg_maps_to_group_key() {
        assert_eq!(GroupKey::from(GroupByArg::None), GroupKey::None);
        assert_eq!(GroupKey::from(GroupByArg::Family), GroupKey::Family);
        assert_eq!(GroupKey::from(GroupByArg::Order), GroupKey::Order);
        assert_eq!(GroupKey::from(GroupByArg::Genus), GroupKey::Genus);
    }

    #[test]
    fn test_cli_parses_jar_commands() {
        let cli = Cli::try_parse_from(["fruitjar", "set-quantity", "6", "3"]).unwrap();
        match cli.command {
            Command::SetQuantity { id, quantity } => {
                assert_eq!(id, 6);
                assert_eq!(quantity, 3);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_parses_grouped_list() {
        let cli =
            Cli::try_parse_from(["fruitjar", "list", "--group-by", "family", "--table"]).unwrap();
        match cli.command {
            Command::List { group_by, table } => {
                assert_eq!(group_by, GroupByArg::Family);
                assert!(table);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_global_overrides() {
        let cli = Cli::try_parse_from([
            "fruitjar",
            "jar",
            "--storage",
            "/tmp/jar.json",
            "--catalog-url",
            "http://localhost:9999/",
        ])
        .unwrap();
        assert_eq!(cli.storage.unwrap(), PathBuf::from("/tmp/jar.json"));
        assert_eq!(cli.catalog_url.unwrap(), "http://localhost:9999/");
    }
}
