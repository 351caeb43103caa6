//! Core library for tabulating media file properties with mediainfo or ffprobe.
//!
//! This crate provides file discovery, backend probing, a signature-keyed probe
//! cache, filtering, sorting, bitrate highlighting and table rendering.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use mediatab_core::{CoreConfig, ProbeCache, collect_media_files, create_prober};
//! use mediatab_core::{inspect_files, render_report};
//!
//! let config = CoreConfig::load(None).unwrap();
//! let prober = create_prober(&config).unwrap();
//! let discovery = collect_media_files(&["/path/to/videos"]);
//!
//! let cache_path = ProbeCache::default_location(config.cache_dir.as_deref()).unwrap();
//! let mut cache = ProbeCache::open(cache_path);
//! let report = inspect_files(prober.as_ref(), Some(&mut cache), &discovery.files, |_| {});
//! cache.save().unwrap();
//!
//! let filters = config.resolve_filters::<&str>(&[], &[]).unwrap();
//! print!("{}", render_report(report.records, &filters, &config, false).output);
//! ```

pub mod cache;
pub mod config;
pub mod discovery;
pub mod error;
pub mod external;
pub mod filter;
pub mod highlight;
pub mod inspect;
pub mod media;
pub mod report;
pub mod sort;
pub mod table;
pub mod utils;

// Re-exports for public API
pub use cache::{ProbeCache, file_signature};
pub use config::{CoreConfig, CoreConfigBuilder};
pub use discovery::{Discovery, collect_media_files};
pub use error::{CoreError, CoreResult};
pub use external::{Backend, MediaProber, check_dependency, create_prober};
pub use filter::{Filter, parse_filters};
pub use highlight::highlight_bitrate;
pub use inspect::{InspectEvent, InspectReport, inspect_files};
pub use media::{Column, MediaRecord, MediaRow};
pub use report::{Report, build_rows, render_report};
pub use sort::{SortDirection, sort_rows};
pub use table::{Table, TableStyle};
pub use utils::{
    format_audio, format_bitrate, format_depth, format_duration, format_fps, format_size,
    parse_clock_duration, parse_human_duration, parse_size, truncate_middle,
};
