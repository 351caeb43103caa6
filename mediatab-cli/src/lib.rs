// mediatab-cli/src/lib.rs
//
// Library portion of the mediatab CLI application.
// Contains argument definitions and command logic.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod progress;
pub mod terminal;

// Re-export items needed by the binary or integration tests
pub use cli::{Cli, ColorMode};
pub use error::CliResult;

/// Runs the command selected by the flags.
pub fn run(cli: &Cli, color: bool, stderr_color: bool) -> CliResult<()> {
    let config = config::resolve_config(cli)?;
    if cli.cached {
        commands::run_cached(cli, &config, color, stderr_color)
    } else {
        commands::run_inspect(cli, &config, color, stderr_color)
    }
}
