//! # Binaa CLI Entry Point
//!
//! Each invocation is one session step over the persisted state:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                           binaa <command>                               │
//! │                                                                         │
//! │  main.rs ────► binaa_app_lib::run()                                     │
//! │                    │                                                    │
//! │                    ├─ config (binaa.toml, BINAA_*)                      │
//! │                    ├─ tracing (RUST_LOG)                                │
//! │                    ├─ SQLite slots ──► AppState::boot                   │
//! │                    └─ cli::execute ──► command ──► mirror               │
//! │                                                                         │
//! │  The session lives in the currentUser slot, so `binaa login` in one    │
//! │  invocation is seen by `binaa rate` in the next.                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::process::ExitCode;

fn main() -> ExitCode {
    // The actual setup is in lib.rs for better testability
    binaa_app_lib::run()
}
