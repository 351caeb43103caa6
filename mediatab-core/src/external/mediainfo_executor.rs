//! MediaInfo integration through a fixed inform template.
//!
//! The template is written to a temporary file once per prober and passed to
//! mediainfo with `--Inform=file://...`. Each section prints one tagged,
//! pipe-delimited line:
//!
//! ```text
//! G|<size bytes>|<duration ms>|<overall bitrate>|<container>
//! V|<fps>|<width>|<height>|<format>|<profile>|<bit depth>
//! A|<channels>|<bitrate>|<format>
//! ```
//!
//! Files with several video or audio streams print several `V`/`A` lines; only
//! the first of each is used.

use super::MediaProber;
use crate::error::{CoreError, CoreResult, command_failed_error, command_start_error};
use crate::media::{AudioTrack, MediaRecord, VideoTrack};
use crate::utils::parse_leading_number;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::NamedTempFile;

/// Inform template handed to mediainfo. `\n` is expanded by mediainfo itself.
pub const INFORM_TEMPLATE: &str = r"General;G|%FileSize%|%Duration%|%OverallBitRate%|%Format%\n
Video;V|%FrameRate%|%Width%|%Height%|%Format%|%Format_Profile%|%BitDepth%\n
Audio;A|%Channel(s)%|%BitRate%|%Format%\n
";

/// Prober backed by the `mediainfo` binary.
#[derive(Debug)]
pub struct MediaInfoProber {
    binary: PathBuf,
    // Removed from disk when the prober is dropped.
    template: NamedTempFile,
}

impl MediaInfoProber {
    /// Writes the inform template to a temporary file.
    pub fn new(binary: impl Into<PathBuf>) -> CoreResult<Self> {
        let mut template = tempfile::Builder::new()
            .prefix("mediatab_inform_")
            .suffix(".txt")
            .tempfile()?;
        template.write_all(INFORM_TEMPLATE.as_bytes())?;
        template.flush()?;
        log::debug!("Wrote inform template to {}", template.path().display());

        Ok(Self {
            binary: binary.into(),
            template,
        })
    }

    /// Path of the temporary template file.
    pub fn template_path(&self) -> &Path {
        self.template.path()
    }

    fn inform_arg(&self) -> String {
        format!("--Inform=file://{}", self.template.path().display())
    }
}

impl MediaProber for MediaInfoProber {
    fn name(&self) -> &'static str {
        "mediainfo"
    }

    fn probe(&self, path: &Path) -> CoreResult<MediaRecord> {
        log::debug!("Running mediainfo on: {}", path.display());

        let output = Command::new(&self.binary)
            .arg(self.inform_arg())
            .arg(path)
            .output()
            .map_err(|e| command_start_error("mediainfo", e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(command_failed_error(
                "mediainfo",
                output.status,
                stderr.to_string(),
            ));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        parse_inform_output(path, &stdout)
    }
}

fn field(parts: &[&str], index: usize) -> Option<String> {
    parts
        .get(index)
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn number(parts: &[&str], index: usize) -> Option<f64> {
    parts.get(index).and_then(|s| parse_leading_number(s))
}

/// Parses the output produced by [`INFORM_TEMPLATE`] into a record for `path`.
///
/// Blank lines and lines with unknown tags are ignored. Output without a
/// general (`G`) line is rejected.
pub fn parse_inform_output(path: &Path, output: &str) -> CoreResult<MediaRecord> {
    let mut record = MediaRecord::new(path);
    let mut saw_general = false;

    for line in output.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let parts: Vec<&str> = line.split('|').collect();
        match parts[0] {
            "G" if !saw_general => {
                saw_general = true;
                record.size_bytes = number(&parts, 1).map(|v| v as u64);
                record.duration_secs = number(&parts, 2).map(|ms| ms / 1000.0);
                record.bit_rate = number(&parts, 3).map(|v| v as u64);
            }
            "V" if record.video.is_none() => {
                record.video = Some(VideoTrack {
                    fps: number(&parts, 1),
                    width: number(&parts, 2).map(|v| v as u32),
                    height: number(&parts, 3).map(|v| v as u32),
                    codec: field(&parts, 4),
                    profile: field(&parts, 5),
                    bit_depth: number(&parts, 6).map(|v| v as u8),
                });
            }
            "A" if record.audio.is_none() => {
                record.audio = Some(AudioTrack {
                    channels: number(&parts, 1).map(|v| v as u32),
                    bit_rate: number(&parts, 2).map(|v| v as u64),
                    codec: field(&parts, 3),
                });
            }
            _ => {}
        }
    }

    if !saw_general {
        return Err(CoreError::ProbeParse(format!(
            "mediainfo printed no general section for {}",
            path.display()
        )));
    }
    Ok(record)
}
