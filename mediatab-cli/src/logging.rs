// ============================================================================
// mediatab-cli/src/logging.rs
// ============================================================================
//
// LOGGING: env_logger setup for the CLI
//
// All diagnostics go through the `log` facade to stderr, so stdout carries
// only the table. The level comes from `-v` flags unless RUST_LOG is set:
// - default: warn
// - -v: info
// - -vv: debug
// - -vvv: trace

use log::{Level, LevelFilter};
use owo_colors::OwoColorize;
use std::io::Write;

/// Maps the `-v` count to a level filter.
pub fn level_for_verbosity(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Initializes env_logger with a timestamped, colored format.
pub fn init_logging(verbose: u8, color: bool) {
    let level = level_for_verbosity(verbose);
    let env = env_logger::Env::default().default_filter_or(level.as_str().to_ascii_lowercase());

    env_logger::Builder::from_env(env)
        .format(move |buf, record| {
            let timestamp = buf.timestamp();
            let level_str = match record.level() {
                Level::Error => "ERROR",
                Level::Warn => "WARN ",
                Level::Info => "INFO ",
                Level::Debug => "DEBUG",
                Level::Trace => "TRACE",
            };

            if color {
                let level_colored = match record.level() {
                    Level::Error => level_str.bright_red().to_string(),
                    Level::Warn => level_str.yellow().to_string(),
                    Level::Info => level_str.green().to_string(),
                    Level::Debug => level_str.blue().to_string(),
                    Level::Trace => level_str.magenta().to_string(),
                };
                writeln!(buf, "{} {} {}", timestamp.dimmed(), level_colored, record.args())
            } else {
                writeln!(buf, "{} {} {}", timestamp, level_str, record.args())
            }
        })
        .init();

    log::debug!("Logger initialized with level: {}", level);
}
