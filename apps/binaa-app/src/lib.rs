//! # Binaa App Library
//!
//! The in-memory state store of the Binaa directory, the commands that
//! mutate it, and the CLI shell that drives them.
//!
//! ## Module Organization
//! ```text
//! binaa_app_lib/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── cli.rs          ◄─── clap front end, one command per invocation
//! ├── platform.rs     ◄─── Notifications, root style, data URLs
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── app.rs      ◄─── AppState: collections, session, active theme
//! │   ├── mirror.rs   ◄─── Write-back of state into slots and root style
//! │   ├── seed.rs     ◄─── First-run defaults
//! │   └── config.rs   ◄─── binaa.toml + BINAA_* overrides
//! ├── commands/
//! │   ├── mod.rs      ◄─── Session guards
//! │   ├── auth.rs     ◄─── register / login / logout / profile
//! │   ├── store.rs    ◄─── Store CRUD and ratings
//! │   ├── search.rs   ◄─── Read-only page views
//! │   └── ...         ◄─── category, post, comment, report, message, admin, settings
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## State Flow
//! ```text
//! ┌───────────┐  boot   ┌──────────────┐  command  ┌──────────────┐
//! │ SQLite    │ ──────► │  AppState    │ ────────► │  AppState'   │
//! │ slots     │         │  (in memory) │           │              │
//! └───────────┘         └──────────────┘           └──────┬───────┘
//!       ▲                                                 │
//!       └───────────────────── mirror ────────────────────┘
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod platform;
pub mod state;

use std::process::ExitCode;

use binaa_db::{Database, DbConfig, SlotRepository};
use clap::Parser;
use tracing::{error, info, Level};
use tracing_subscriber::EnvFilter;

use cli::{Cli, ShellResult};
use platform::LogNotifier;
use state::{AppConfig, AppState};

/// Runs the CLI shell.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Parse arguments, load binaa.toml, apply BINAA_* overrides           │
/// │                                                                         │
/// │  2. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter                                │
/// │     • RUST_LOG wins over the configured filter                          │
/// │                                                                         │
/// │  3. Open Database ────────────────────────────────────────────────────► │
/// │     • Linux: ~/.local/share/binaa/binaa.db                              │
/// │     • SQLite with WAL mode, pending migrations applied                  │
/// │                                                                         │
/// │  4. Boot AppState from the slots (seeds on first run)                   │
/// │                                                                         │
/// │  5. Execute one command; the mirror writes the result back              │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let config = match AppConfig::load(cli.config.clone()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };
    init_tracing(config.log_filter());

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let result = runtime.block_on(async {
        let db = open_database(&config).await?;
        let mut state = AppState::boot(db.slots(), Box::new(LogNotifier::granted())).await?;
        let outcome = cli::execute(&mut state, &config, cli.command, cli.format).await;
        db.close().await;
        outcome
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Command failed");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=binaa=trace` - Show trace for binaa crates only
/// - Otherwise the `log` key of binaa.toml, default [`state::DEFAULT_LOG_FILTER`]
pub fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    // Logs go to stderr so JSON output on stdout stays parseable
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_max_level(Level::TRACE)
        .with_writer(std::io::stderr)
        .init();
}

/// Opens the slot database named by `config`, creating its folder if needed.
pub async fn open_database(config: &AppConfig) -> ShellResult<Database> {
    let db_path = config.database_path()?;
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    info!(?db_path, "Database path determined");

    let db = Database::new(DbConfig::new(db_path)).await?;
    info!("Database connected and migrations applied");
    Ok(db)
}

/// Empties every slot and boots a fresh state, which writes the seeds back.
pub async fn reset_to_seed(slots: SlotRepository) -> ShellResult<AppState<SlotRepository>> {
    let cleared = slots.clear().await?;
    info!(cleared, "Slots cleared");
    Ok(AppState::boot(slots, Box::new(LogNotifier::granted())).await?)
}
