//! Media records and table rows.
//!
//! A [`MediaRecord`] is the typed result of probing one file, independent of
//! the backend that produced it. A [`MediaRow`] pairs a record with the ten
//! display strings rendered in the table.

pub mod column;
pub mod record;
pub mod row;

// Re-export commonly used types
pub use column::Column;
pub use record::{AudioTrack, MediaRecord, VideoTrack};
pub use row::MediaRow;
