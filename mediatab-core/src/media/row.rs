use super::{Column, MediaRecord};
use crate::utils::{
    format_audio, format_bitrate, format_depth, format_duration, format_fps, format_size,
    truncate_middle,
};

/// A probed file together with its ten display cells.
#[derive(Debug, Clone)]
pub struct MediaRow {
    pub record: MediaRecord,
    cells: Vec<String>,
}

impl MediaRow {
    /// Renders the display cells for `record`, truncating the filename to
    /// `filename_length` characters.
    pub fn from_record(record: MediaRecord, filename_length: usize) -> Self {
        let mut cells = Vec::with_capacity(Column::ALL.len());
        cells.push(truncate_middle(&record.file_name(), filename_length));
        cells.push(record.size_bytes.map(format_size).unwrap_or_default());
        cells.push(record.duration_secs.map(format_duration).unwrap_or_default());

        match &record.video {
            Some(video) => {
                cells.push(video.fps.map(format_fps).unwrap_or_default());
                cells.push(record.bit_rate.map(format_bitrate).unwrap_or_default());
                cells.push(match (video.width, video.height) {
                    (Some(w), Some(h)) => format!("{w}x{h}"),
                    _ => String::new(),
                });
                cells.push(video.codec.clone().unwrap_or_default());
                cells.push(video.profile.clone().unwrap_or_default());
                cells.push(video.bit_depth.map(format_depth).unwrap_or_default());
            }
            None => cells.extend(std::iter::repeat_n(String::new(), 6)),
        }

        cells.push(
            record
                .audio
                .as_ref()
                .map(|audio| format_audio(audio.channels, audio.bit_rate))
                .unwrap_or_default(),
        );

        Self { record, cells }
    }

    pub fn cell(&self, column: Column) -> &str {
        &self.cells[column.index()]
    }

    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    /// Replaces the display text of one cell, e.g. with a highlighted version.
    pub fn set_cell(&mut self, column: Column, value: String) {
        self.cells[column.index()] = value;
    }

    pub fn into_cells(self) -> Vec<String> {
        self.cells
    }

    /// Typed value of a column used for numeric filters and sorting.
    ///
    /// Bitrate is expressed in Mbps. Like the display cells, video-derived
    /// values are absent when the file has no video stream.
    pub fn numeric_value(&self, column: Column) -> Option<f64> {
        let record = &self.record;
        let video = record.video.as_ref();
        match column {
            Column::Size => record.size_bytes.map(|b| b as f64),
            Column::Duration => record.duration_secs,
            Column::Fps => video?.fps,
            Column::Bitrate => {
                video?;
                record.bit_rate.map(|b| b as f64 / 1_000_000.0)
            }
            Column::Resolution => record.pixel_count().map(|p| p as f64),
            Column::Depth => video?.bit_depth.map(f64::from),
            Column::Audio => record.audio.as_ref()?.channels.map(f64::from),
            Column::Filename | Column::Format | Column::Profile => None,
        }
    }
}
