use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// First video stream of a file.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoTrack {
    /// Frames per second
    pub fps: Option<f64>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    /// Codec name as reported by the backend ("hevc", "AVC", ...)
    pub codec: Option<String>,
    pub profile: Option<String>,
    /// Bits per sample
    pub bit_depth: Option<u8>,
}

/// First audio stream of a file.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioTrack {
    pub channels: Option<u32>,
    /// Bits per second
    pub bit_rate: Option<u64>,
    pub codec: Option<String>,
}

/// Typed probe result for a single media file.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaRecord {
    /// Path the file was probed at
    pub path: PathBuf,
    /// Container size in bytes
    pub size_bytes: Option<u64>,
    /// Container duration in seconds
    pub duration_secs: Option<f64>,
    /// Overall bitrate in bits per second
    pub bit_rate: Option<u64>,
    pub video: Option<VideoTrack>,
    pub audio: Option<AudioTrack>,
}

impl MediaRecord {
    /// Creates an empty record for `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }

    /// File name component of the path, or "Unknown" when there is none.
    pub fn file_name(&self) -> String {
        file_name_or_unknown(&self.path)
    }

    /// Width times height of the video stream, when both are known.
    pub fn pixel_count(&self) -> Option<u64> {
        let video = self.video.as_ref()?;
        Some(u64::from(video.width?) * u64::from(video.height?))
    }
}

fn file_name_or_unknown(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "Unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name() {
        assert_eq!(MediaRecord::new("/videos/movie.mkv").file_name(), "movie.mkv");
        assert_eq!(MediaRecord::new("/").file_name(), "Unknown");
    }

    #[test]
    fn test_pixel_count() {
        let mut record = MediaRecord::new("a.mp4");
        assert_eq!(record.pixel_count(), None);

        record.video = Some(VideoTrack {
            width: Some(1920),
            height: None,
            ..Default::default()
        });
        assert_eq!(record.pixel_count(), None);

        record.video = Some(VideoTrack {
            width: Some(1920),
            height: Some(1080),
            ..Default::default()
        });
        assert_eq!(record.pixel_count(), Some(2_073_600));
    }
}
