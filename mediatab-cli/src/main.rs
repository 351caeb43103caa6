// mediatab-cli/src/main.rs
//
// Entry point for the `mediatab` binary: parses arguments, sets up logging,
// runs the selected command and maps the outcome to an exit code.
//
// Exit codes: 0 on success (including runs where some files were skipped and
// --help/--version), 1 on any fatal error or invalid argument.

use clap::Parser;
use mediatab_cli::terminal::{print_error, should_color_stderr, should_use_color};
use mediatab_cli::{Cli, logging, run};
use std::process;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Help and version requests print to stdout and are not failures.
            let code = if err.use_stderr() { 1 } else { 0 };
            let _ = err.print();
            process::exit(code);
        }
    };

    let color = should_use_color(cli.color);
    let stderr_color = should_color_stderr(cli.color);
    logging::init_logging(cli.verbose, stderr_color);

    if let Err(e) = run(&cli, color, stderr_color) {
        log::debug!("Fatal error: {:?}", e);
        print_error(&e, stderr_color);
        process::exit(1);
    }
}
