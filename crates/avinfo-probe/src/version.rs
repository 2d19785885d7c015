//! Versions of the linked FFmpeg libraries.

use ffmpeg_the_third::ffi;
use serde::{Deserialize, Serialize};

/// libavformat version, e.g. "61.7.100".
pub fn avformat_version() -> String {
    render_version(unsafe { ffi::avformat_version() })
}

/// libavcodec version.
pub fn avcodec_version() -> String {
    render_version(unsafe { ffi::avcodec_version() })
}

/// libavutil version.
pub fn avutil_version() -> String {
    render_version(unsafe { ffi::avutil_version() })
}

/// Unpack `AV_VERSION_INT(major, minor, micro)`.
fn render_version(packed: u32) -> String {
    format!(
        "{}.{}.{}",
        packed >> 16,
        (packed >> 8) & 0xff,
        packed & 0xff
    )
}

/// The three library versions together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryVersions {
    pub avformat: String,
    pub avcodec: String,
    pub avutil: String,
}

impl LibraryVersions {
    pub fn current() -> Self {
        Self {
            avformat: avformat_version(),
            avcodec: avcodec_version(),
            avutil: avutil_version(),
        }
    }
}
