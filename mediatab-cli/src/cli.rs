// mediatab-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use clap::{ArgAction, Parser, ValueEnum};
use mediatab_core::{Backend, Column, SortDirection, TableStyle};
use std::path::PathBuf;

/// When to emit ANSI colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorMode {
    /// Color when stdout supports it and NO_COLOR is unset
    #[default]
    Auto,
    Always,
    Never,
}

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "mediatab: media file property table",
    long_about = "Inspects media files with mediainfo or ffprobe and prints one table row per file \
                  (size, duration, fps, bitrate, resolution, format, profile, depth, audio)."
)]
pub struct Cli {
    /// Media files or directories (scanned recursively)
    #[arg(value_name = "PATHS")]
    pub paths: Vec<PathBuf>,

    /// Inspection backend: auto, mediainfo or ffprobe
    #[arg(short, long, value_name = "BACKEND")]
    pub backend: Option<Backend>,

    /// Column to sort by [default: bitrate]
    #[arg(short, long, value_name = "COLUMN")]
    pub sort: Option<Column>,

    /// Sort direction: asc or desc [default: desc]
    #[arg(short, long, value_name = "DIRECTION")]
    pub direction: Option<SortDirection>,

    /// Filter rows, e.g. `format:hevc` or `bitrate:>:20` (repeatable, AND-combined)
    #[arg(short, long = "filter", value_name = "FILTER", action = ArgAction::Append)]
    pub filters: Vec<String>,

    /// Apply a named filter list from the config file (repeatable)
    #[arg(short, long = "alias", value_name = "NAME", action = ArgAction::Append)]
    pub aliases: Vec<String>,

    /// Maximum filename width before middle truncation [default: 65]
    #[arg(short = 'l', long, value_name = "N")]
    pub filename_length: Option<usize>,

    /// Highlight bitrates above this many Mbps [default: 20]
    #[arg(short = 't', long = "threshold", value_name = "MBPS")]
    pub threshold: Option<f64>,

    /// Table style: plain or boxed [default: boxed]
    #[arg(long, value_name = "STYLE")]
    pub style: Option<TableStyle>,

    /// When to use colors
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,

    /// Render the cache contents without probing
    #[arg(long, conflicts_with = "no_cache")]
    pub cached: bool,

    /// Neither read nor write the probe cache
    #[arg(long)]
    pub no_cache: bool,

    /// Drop stale cache entries before the run
    #[arg(long, conflicts_with = "no_cache")]
    pub prune_cache: bool,

    /// Config file [default: <config dir>/mediatab/config.toml]
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
