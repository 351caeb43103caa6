//! FFprobe integration for media analysis
//!
//! Runs ffprobe with JSON output and maps the first video and audio streams
//! onto a [`MediaRecord`]. The container bitrate is used for the table since
//! per-stream bitrates are often missing (e.g. in Matroska).

use super::MediaProber;
use crate::error::{CoreError, CoreResult, command_failed_error, command_start_error};
use crate::media::{AudioTrack, MediaRecord, VideoTrack};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::process::Command;

#[derive(Debug, Deserialize)]
struct FfprobeOutput {
    #[serde(default)]
    streams: Vec<FfprobeStream>,
    format: Option<FfprobeFormat>,
}

#[derive(Debug, Default, Deserialize)]
struct FfprobeStream {
    codec_type: Option<String>,
    codec_name: Option<String>,
    profile: Option<String>,
    width: Option<i64>,
    height: Option<i64>,
    r_frame_rate: Option<String>,
    avg_frame_rate: Option<String>,
    bit_rate: Option<String>,
    pix_fmt: Option<String>,
    bits_per_raw_sample: Option<String>,
    channels: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct FfprobeFormat {
    size: Option<String>,
    duration: Option<String>,
    bit_rate: Option<String>,
}

/// Prober backed by the `ffprobe` binary.
#[derive(Debug, Clone)]
pub struct FfprobeProber {
    binary: PathBuf,
}

impl FfprobeProber {
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }
}

impl MediaProber for FfprobeProber {
    fn name(&self) -> &'static str {
        "ffprobe"
    }

    fn probe(&self, path: &Path) -> CoreResult<MediaRecord> {
        log::debug!("Running ffprobe on: {}", path.display());

        let output = Command::new(&self.binary)
            .args([
                "-v",
                "quiet",
                "-print_format",
                "json",
                "-show_format",
                "-show_streams",
            ])
            .arg(path)
            .output()
            .map_err(|e| command_start_error("ffprobe", e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(command_failed_error("ffprobe", output.status, stderr.to_string()));
        }

        parse_ffprobe_json(path, &output.stdout)
    }
}

/// Parses an ffprobe frame rate such as "30000/1001". A zero denominator or
/// numerator yields `None`.
pub fn parse_frame_rate(rate: &str) -> Option<f64> {
    let (num, den) = rate.split_once('/')?;
    let num: f64 = num.trim().parse().ok()?;
    let den: f64 = den.trim().parse().ok()?;
    if den == 0.0 || num == 0.0 {
        None
    } else {
        Some(num / den)
    }
}

fn bit_depth(stream: &FfprobeStream) -> Option<u8> {
    let from_raw = stream
        .bits_per_raw_sample
        .as_deref()
        .and_then(|b| b.parse::<u8>().ok());

    match stream.pix_fmt.as_deref() {
        Some(fmt) if fmt.contains("p10") => Some(10),
        Some(fmt) if fmt.contains("p12") => Some(12),
        Some(_) => from_raw.or(Some(8)),
        None => from_raw,
    }
}

fn parse_u64(value: Option<&str>) -> Option<u64> {
    value.and_then(|v| v.trim().parse::<f64>().ok()).map(|v| v as u64)
}

fn to_u32(value: Option<i64>) -> Option<u32> {
    value.and_then(|v| u32::try_from(v).ok())
}

/// Maps ffprobe's JSON output onto a record for `path`.
pub fn parse_ffprobe_json(path: &Path, json: &[u8]) -> CoreResult<MediaRecord> {
    let parsed: FfprobeOutput = serde_json::from_slice(json).map_err(|e| {
        CoreError::JsonParse(format!(
            "Failed to parse ffprobe output for {}: {}",
            path.display(),
            e
        ))
    })?;

    let mut record = MediaRecord::new(path);
    if let Some(format) = &parsed.format {
        record.size_bytes = parse_u64(format.size.as_deref());
        record.duration_secs = format
            .duration
            .as_deref()
            .and_then(|d| d.trim().parse::<f64>().ok());
        record.bit_rate = parse_u64(format.bit_rate.as_deref());
    }

    let stream_of = |kind: &str| {
        parsed
            .streams
            .iter()
            .find(|s| s.codec_type.as_deref() == Some(kind))
    };

    record.video = stream_of("video").map(|video| VideoTrack {
        fps: video
            .r_frame_rate
            .as_deref()
            .and_then(parse_frame_rate)
            .or_else(|| video.avg_frame_rate.as_deref().and_then(parse_frame_rate)),
        width: to_u32(video.width),
        height: to_u32(video.height),
        codec: video.codec_name.clone(),
        profile: video.profile.clone(),
        bit_depth: bit_depth(video),
    });

    record.audio = stream_of("audio").map(|audio| AudioTrack {
        channels: to_u32(audio.channels),
        bit_rate: parse_u64(audio.bit_rate.as_deref()),
        codec: audio.codec_name.clone(),
    });

    Ok(record)
}
