//! ffprobe-style rendering of a report.
//!
//! Tags collapse into a key/value object and the container fields move under
//! `format`, with `name` renamed to `format_name`. This is a serialization
//! shape only; [`FileInfoResponse`] stays the canonical record.

use crate::types::{Chapter, CodecType, FileInfoResponse, Stream, Tag};
use serde::ser::{Serialize, SerializeMap, Serializer};

#[derive(Debug, serde::Serialize)]
pub struct ProbeView<'a> {
    pub error: &'a str,
    pub streams: Vec<StreamView<'a>>,
    pub chapters: Vec<ChapterView<'a>>,
    pub format: FormatView<'a>,
}

#[derive(Debug, serde::Serialize)]
pub struct FormatView<'a> {
    pub format_name: &'a str,
    pub bit_rate: i64,
    pub duration: i64,
    pub url: &'a str,
    pub nb_streams: u32,
    pub nb_chapters: u32,
    pub flags: i32,
}

#[derive(Debug, serde::Serialize)]
pub struct StreamView<'a> {
    pub id: i32,
    pub start_time: f64,
    pub duration: f64,
    pub codec_type: CodecType,
    pub codec_name: &'a str,
    pub format: &'a str,
    pub bit_rate: i64,
    pub profile: &'a str,
    pub level: i32,
    pub width: i32,
    pub height: i32,
    pub channels: i32,
    pub sample_rate: i32,
    pub frame_size: i32,
    pub tags: TagMap<'a>,
    pub r_frame_rate: &'a str,
}

#[derive(Debug, serde::Serialize)]
pub struct ChapterView<'a> {
    pub id: i64,
    pub time_base: &'a str,
    pub start: i64,
    pub end: i64,
    pub tags: TagMap<'a>,
}

/// Tags serialized as an object.
///
/// A repeated key keeps the position of its first occurrence and the value
/// of its last one.
#[derive(Debug, Clone, Copy)]
pub struct TagMap<'a>(pub &'a [Tag]);

impl<'a> TagMap<'a> {
    pub fn entries(&self) -> Vec<(&'a str, &'a str)> {
        let mut entries: Vec<(&'a str, &'a str)> = Vec::with_capacity(self.0.len());
        for tag in self.0 {
            match entries.iter_mut().find(|(key, _)| *key == tag.key) {
                Some(entry) => entry.1 = tag.value.as_str(),
                None => entries.push((tag.key.as_str(), tag.value.as_str())),
            }
        }
        entries
    }
}

impl Serialize for TagMap<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let entries = self.entries();
        let mut map = serializer.serialize_map(Some(entries.len()))?;
        for (key, value) in entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'a> From<&'a Stream> for StreamView<'a> {
    fn from(s: &'a Stream) -> Self {
        Self {
            id: s.id,
            start_time: s.start_time,
            duration: s.duration,
            codec_type: s.codec_type,
            codec_name: &s.codec_name,
            format: &s.format,
            bit_rate: s.bit_rate,
            profile: &s.profile,
            level: s.level,
            width: s.width,
            height: s.height,
            channels: s.channels,
            sample_rate: s.sample_rate,
            frame_size: s.frame_size,
            tags: TagMap(&s.tags),
            r_frame_rate: &s.r_frame_rate,
        }
    }
}

impl<'a> From<&'a Chapter> for ChapterView<'a> {
    fn from(c: &'a Chapter) -> Self {
        Self {
            id: c.id,
            time_base: &c.time_base,
            start: c.start,
            end: c.end,
            tags: TagMap(&c.tags),
        }
    }
}

impl<'a> From<&'a FileInfoResponse> for ProbeView<'a> {
    fn from(report: &'a FileInfoResponse) -> Self {
        Self {
            error: &report.error,
            streams: report.streams.iter().map(StreamView::from).collect(),
            chapters: report.chapters.iter().map(ChapterView::from).collect(),
            format: FormatView {
                format_name: &report.name,
                bit_rate: report.bit_rate,
                duration: report.duration,
                url: &report.url,
                nb_streams: report.nb_streams,
                nb_chapters: report.nb_chapters,
                flags: report.flags,
            },
        }
    }
}
