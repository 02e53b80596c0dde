//! Configuration bootstrap.

use std::io::BufRead;
use std::path::Path;

use crate::cli::InitArgs;
use crate::output::Console;
use crate::{CliConfig, CliError, CliResult};

/// Writes the configuration file, prompting for values not given as flags.
pub fn run_init(args: InitArgs, path: &Path, console: &mut Console) -> CliResult<()> {
    let url = match args.url {
        Some(url) => url,
        None => prompt_line(console, "Authentik URL: ")?,
    };
    let token = match args.token {
        Some(token) => token,
        None => prompt_password("API Token: ")?,
    };

    let url = url.trim();
    if url.is_empty() {
        return Err(CliError::Validation("server URL must not be empty".to_string()));
    }

    CliConfig::new(url, token.trim()).save(path)?;
    console.line(&format!("Config saved to {}", path.display()));
    Ok(())
}

/// Prompts on the console and reads one line from stdin.
fn prompt_line(console: &mut Console, prompt: &str) -> CliResult<String> {
    console.raw(prompt);
    let mut input = String::new();
    std::io::stdin().lock().read_line(&mut input)?;
    Ok(input.trim_end_matches(['\r', '\n']).to_string())
}

/// Prompts for a secret without echoing it.
fn prompt_password(prompt: &str) -> CliResult<String> {
    rpassword::prompt_password(prompt).map_err(CliError::Io)
}
