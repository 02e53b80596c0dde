//! # akc
//!
//! Command-line administration client for authentik.

#![forbid(unsafe_code)]

use akc_cli::{init_tracing, run, Cli, Console};
use clap::Parser;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut console = Console::stdout();
    let code = run(cli, &mut console).await;
    std::process::exit(code);
}
