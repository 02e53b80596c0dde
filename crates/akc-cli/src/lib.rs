//! # akc-cli
//!
//! Command-line administration client for authentik.
//!
//! This crate provides command-line utilities for:
//! - Applications, providers and flows (create, list, update, delete, bind)
//! - Users, groups and roles, including membership edits
//! - Policies, stages, sources, outposts, events and property mappings
//! - Server version and tenant management

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::too_many_lines)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use cli::Cli;
pub use commands::{dispatch, execute, run};
pub use config::CliConfig;
pub use error::{CliError, CliResult};
pub use output::{Captured, Console, OutputFormat};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` wins when set. Otherwise only warnings are shown, or this
/// crate's debug output with `verbose`. Logs go to stderr.
pub fn init_tracing(verbose: bool) {
    let default = if verbose {
        "akc_cli=debug,akc_client=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // A second init (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
