//! TOML config file.
//!
//! ```toml
//! backend = "mediainfo"
//! sort = "duration"
//! direction = "asc"
//! filename_length = 50
//! bitrate_threshold = 25.0
//! style = "plain"
//! cache = true
//! filters = ["format:hevc"]
//!
//! [binaries]
//! mediainfo = "/opt/homebrew/bin/mediainfo"
//!
//! [aliases]
//! heavy = ["bitrate:>:40", "size:>:20G"]
//! ```

use super::CoreConfig;
use crate::error::{CoreError, CoreResult};
use crate::external::Backend;
use crate::media::Column;
use crate::sort::SortDirection;
use crate::table::TableStyle;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Paths of the external tools.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BinariesConfig {
    pub mediainfo: Option<PathBuf>,
    pub ffprobe: Option<PathBuf>,
}

/// Contents of `config.toml`. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub backend: Option<Backend>,
    pub sort: Option<String>,
    pub direction: Option<SortDirection>,
    pub filename_length: Option<usize>,
    pub bitrate_threshold: Option<f64>,
    pub style: Option<TableStyle>,
    pub cache: Option<bool>,
    pub cache_dir: Option<PathBuf>,
    #[serde(default)]
    pub filters: Vec<String>,
    #[serde(default)]
    pub binaries: BinariesConfig,
    #[serde(default)]
    pub aliases: BTreeMap<String, Vec<String>>,
}

/// `<config dir>/mediatab/config.toml`, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("mediatab").join("config.toml"))
}

impl FileConfig {
    /// Reads and parses a config file.
    pub fn from_file(path: &Path) -> CoreResult<Self> {
        log::debug!("Loading config file: {}", path.display());
        let contents = fs::read_to_string(path).map_err(|e| {
            CoreError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::parse(&contents)
            .map_err(|e| CoreError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Parses TOML text.
    pub fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Overlays the values present in the file onto `config`.
    pub fn apply_to(self, config: &mut CoreConfig) -> CoreResult<()> {
        if let Some(backend) = self.backend {
            config.backend = backend;
        }
        if let Some(sort) = self.sort {
            config.sort_column = sort.parse::<Column>()?;
        }
        if let Some(direction) = self.direction {
            config.sort_direction = direction;
        }
        if let Some(length) = self.filename_length {
            config.filename_length = length;
        }
        if let Some(threshold) = self.bitrate_threshold {
            config.bitrate_threshold = threshold;
        }
        if let Some(style) = self.style {
            config.table_style = style;
        }
        if let Some(cache) = self.cache {
            config.use_cache = cache;
        }
        if let Some(dir) = self.cache_dir {
            config.cache_dir = Some(dir);
        }
        if let Some(path) = self.binaries.mediainfo {
            config.mediainfo_path = path;
        }
        if let Some(path) = self.binaries.ffprobe {
            config.ffprobe_path = path;
        }
        config.filters.extend(self.filters);
        config.aliases.extend(self.aliases);
        Ok(())
    }
}
