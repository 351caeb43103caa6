// ============================================================================
// mediatab-cli/src/terminal.rs
// ============================================================================
//
// TERMINAL OUTPUT: Color detection and stderr messages
//
// The table goes to stdout; errors and run summaries go to stderr. Colors
// follow --color, with `auto` honoring NO_COLOR and the terminal's support.

use crate::cli::ColorMode;
use owo_colors::OwoColorize;
use std::fmt::Display;
use supports_color::Stream;

/// Check if color should be used (respects NO_COLOR environment variable)
fn no_color_set() -> bool {
    std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty())
}

fn stream_supports_color(mode: ColorMode, stream: Stream) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => !no_color_set() && supports_color::on(stream).is_some(),
    }
}

/// Whether the table on stdout should be colored.
pub fn should_use_color(mode: ColorMode) -> bool {
    stream_supports_color(mode, Stream::Stdout)
}

/// Whether messages on stderr should be colored.
pub fn should_color_stderr(mode: ColorMode) -> bool {
    stream_supports_color(mode, Stream::Stderr)
}

/// Prints a fatal error to stderr, in bold red when enabled.
pub fn print_error(error: &dyn Display, color: bool) {
    if color {
        eprintln!("{} {}", "Error:".red().bold(), error.red());
    } else {
        eprintln!("Error: {}", error);
    }
}

/// Prints a non-fatal notice to stderr.
pub fn print_notice(message: &str, color: bool) {
    if color {
        eprintln!("{}", message.yellow());
    } else {
        eprintln!("{}", message);
    }
}

/// One-line run summary printed to stderr after the table.
pub fn format_summary(shown: usize, total: usize, cache_hits: usize, skipped: usize) -> String {
    let mut summary = format!("{shown} of {total} files shown");
    if cache_hits > 0 {
        summary.push_str(&format!(", {cache_hits} from cache"));
    }
    if skipped > 0 {
        summary.push_str(&format!(", {skipped} skipped"));
    }
    summary
}
