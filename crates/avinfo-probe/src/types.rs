//! Report types.
//!
//! Every record is fixed-shape: fields that do not apply to a stream's
//! [`CodecType`] are present with a zero or empty value rather than omitted.

use serde::{Deserialize, Serialize};

/// One metadata entry attached to a stream or a chapter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub key: String,
    pub value: String,
}

impl Tag {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Media type of an elementary stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodecType {
    Video,
    Audio,
    Subtitle,
    Data,
    Attachment,
    #[default]
    Unknown,
}

impl CodecType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CodecType::Video => "video",
            CodecType::Audio => "audio",
            CodecType::Subtitle => "subtitle",
            CodecType::Data => "data",
            CodecType::Attachment => "attachment",
            CodecType::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for CodecType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One elementary stream within the container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Stream {
    /// Container-assigned identifier (not necessarily the stream index).
    pub id: i32,
    /// Start time in seconds.
    pub start_time: f64,
    /// Duration in seconds, rescaled by the stream's time base.
    pub duration: f64,
    pub codec_type: CodecType,
    pub codec_name: String,
    /// Pixel format name. Populated from the same field for every stream type.
    pub format: String,
    pub bit_rate: i64,
    pub profile: String,
    pub level: i32,
    /// Video only.
    pub width: i32,
    /// Video only.
    pub height: i32,
    /// Audio only.
    pub channels: i32,
    /// Audio only.
    pub sample_rate: i32,
    /// Audio only.
    pub frame_size: i32,
    pub tags: Vec<Tag>,
    /// Rendered as `"<num>/<den>"`, unreduced.
    pub r_frame_rate: String,
}

/// A named time range within the container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Chapter {
    pub id: i64,
    /// Rendered as `"<num>/<den>"`, unreduced.
    pub time_base: String,
    /// Raw ticks in `time_base` units. Not rescaled, unlike [`Stream::duration`].
    pub start: i64,
    /// Raw ticks in `time_base` units.
    pub end: i64,
    pub tags: Vec<Tag>,
}

/// The complete result of one probe.
///
/// On failure every field except `error` keeps its default value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileInfoResponse {
    /// Container format short name (e.g. "matroska,webm").
    pub name: String,
    pub bit_rate: i64,
    /// Raw container duration in libavformat's microsecond time base
    /// (`AV_TIME_BASE`), copied unmodified. `i64::MIN` (`AV_NOPTS_VALUE`)
    /// when the container does not know its duration.
    pub duration: i64,
    /// The resolved input identifier.
    pub url: String,
    pub nb_streams: u32,
    /// Opaque format-context flags, passed through uninterpreted.
    pub flags: i32,
    pub streams: Vec<Stream>,
    pub nb_chapters: u32,
    pub chapters: Vec<Chapter>,
    /// Empty on success.
    pub error: String,
}

impl FileInfoResponse {
    /// Build a report that carries only an error message.
    pub fn failed(err: &crate::Error) -> Self {
        Self::from_error_message(err.to_string())
    }

    pub fn from_error_message(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            ..Default::default()
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_empty()
    }

    /// Streams of one media type, in container order.
    pub fn streams_of(&self, codec_type: CodecType) -> impl Iterator<Item = &Stream> {
        self.streams
            .iter()
            .filter(move |s| s.codec_type == codec_type)
    }
}
