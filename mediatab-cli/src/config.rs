// mediatab-cli/src/config.rs
//
// Resolves the effective configuration: core layers (defaults, file, env)
// with command-line flags applied last.

use crate::cli::Cli;
use crate::error::CliResult;
use mediatab_core::CoreConfig;

/// Loads the layered config and applies the CLI flags on top.
pub fn resolve_config(cli: &Cli) -> CliResult<CoreConfig> {
    let mut config = CoreConfig::load(cli.config.as_deref())?;
    apply_cli_overrides(&mut config, cli);
    config.validate()?;
    log::debug!("Effective configuration: {:?}", config);
    Ok(config)
}

/// Applies the flags that were given on the command line.
pub fn apply_cli_overrides(config: &mut CoreConfig, cli: &Cli) {
    if let Some(backend) = cli.backend {
        config.backend = backend;
    }
    if let Some(column) = cli.sort {
        config.sort_column = column;
    }
    if let Some(direction) = cli.direction {
        config.sort_direction = direction;
    }
    if let Some(length) = cli.filename_length {
        config.filename_length = length;
    }
    if let Some(threshold) = cli.threshold {
        config.bitrate_threshold = threshold;
    }
    if let Some(style) = cli.style {
        config.table_style = style;
    }
    if cli.no_cache {
        config.use_cache = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use mediatab_core::{Column, SortDirection, TableStyle};

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::parse_from([
            "mediatab", "-s", "size", "-d", "asc", "-t", "5", "--style", "plain", "--no-cache",
            "x.mkv",
        ]);
        let mut config = CoreConfig::default();
        apply_cli_overrides(&mut config, &cli);

        assert_eq!(config.sort_column, Column::Size);
        assert_eq!(config.sort_direction, SortDirection::Asc);
        assert_eq!(config.bitrate_threshold, 5.0);
        assert_eq!(config.table_style, TableStyle::Plain);
        assert!(!config.use_cache);
        assert_eq!(config.filename_length, 65);
    }
}
