//! The contract between an opened container and the report assembler.
//!
//! Records are owned copies of the native structures, so nothing here
//! borrows from the demuxer once it has been returned.

use crate::types::Tag;
use ffmpeg_the_third::ffi;

pub use ffmpeg_the_third::ffi::{AVCodecID, AVMediaType};
pub use ffmpeg_the_third::Rational;

/// Container-level header fields.
#[derive(Debug, Clone, PartialEq)]
pub struct ContainerHeader {
    pub format_name: String,
    pub bit_rate: i64,
    /// Raw ticks in `AV_TIME_BASE` units.
    pub duration: i64,
    pub url: String,
    pub flags: i32,
}

/// Codec parameters of one stream, still in libav's raw representation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CodecRecord {
    pub media_type: ffi::AVMediaType,
    pub codec_id: ffi::AVCodecID,
    /// Pixel format for video, sample format for audio.
    pub format: i32,
    pub bit_rate: i64,
    pub profile: i32,
    pub level: i32,
    pub width: i32,
    pub height: i32,
    pub channels: i32,
    pub sample_rate: i32,
    pub frame_size: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StreamRecord {
    pub id: i32,
    /// Raw ticks in `time_base` units.
    pub start_time: i64,
    /// Raw ticks in `time_base` units.
    pub duration: i64,
    pub time_base: Rational,
    pub r_frame_rate: Rational,
    /// `None` when the stream carries no codec parameters.
    pub codec: Option<CodecRecord>,
    pub tags: Vec<Tag>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChapterRecord {
    pub id: i64,
    pub time_base: Rational,
    pub start: i64,
    pub end: i64,
    pub tags: Vec<Tag>,
}

/// An opened container with its stream information discovered.
///
/// Indices passed to [`stream`](ContainerSource::stream) and
/// [`chapter`](ContainerSource::chapter) must be below the matching count.
/// Implementations panic on an index out of range.
pub trait ContainerSource {
    fn header(&self) -> ContainerHeader;

    fn stream_count(&self) -> usize;

    fn stream(&self, index: usize) -> StreamRecord;

    fn chapter_count(&self) -> usize;

    fn chapter(&self, index: usize) -> ChapterRecord;
}
