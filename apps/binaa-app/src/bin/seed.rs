//! # Seed
//!
//! Resets the slot database to the first-run defaults: the bootstrap
//! super-admin, six categories, two sample stores and default settings.
//!
//! ```text
//! $ cargo run --bin seed
//! $ BINAA_DB_PATH=/tmp/binaa.db cargo run --bin seed
//! ```

use std::process::ExitCode;

use binaa_app_lib::state::AppConfig;
use binaa_app_lib::{init_tracing, open_database, reset_to_seed};
use tracing::{error, info};

fn main() -> ExitCode {
    let config = AppConfig::load_or_default(None);
    init_tracing(config.log_filter());

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(e) => {
            error!(error = %e, "Failed to start runtime");
            return ExitCode::FAILURE;
        }
    };

    let result = runtime.block_on(async {
        let db = open_database(&config).await?;
        let state = reset_to_seed(db.slots()).await?;
        info!(
            users = state.users().len(),
            categories = state.categories().len(),
            stores = state.stores().len(),
            "Seed data written"
        );
        db.close().await;
        Ok::<_, binaa_app_lib::cli::ShellError>(())
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Seeding failed");
            ExitCode::FAILURE
        }
    }
}
