//! # avinfo-probe
//!
//! Container introspection through native FFmpeg bindings.
//!
//! One call opens a container with libavformat, discovers its stream
//! information and flattens everything into a single fixed-shape
//! [`FileInfoResponse`]: format header, one record per stream, one per
//! chapter, and every metadata tag in libav's iteration order.
//!
//! Failures never escape as a `Result`. They come back as a report whose
//! `error` field is non-empty and whose other fields are all default.
//!
//! ## Features
//!
//! - `async` - [`get_file_info_async`] runs a probe on tokio's blocking pool
//! - `tracing` - Enable tracing support
//!
//! ## Example
//!
//! ```no_run
//! let report = avinfo_probe::get_file_info("/path/to/video.mkv");
//! if report.is_ok() {
//!     println!("{} with {} streams", report.name, report.nb_streams);
//!     for stream in &report.streams {
//!         println!("  {} {}", stream.codec_type, stream.codec_name);
//!     }
//! } else {
//!     eprintln!("probe failed: {}", report.error);
//! }
//! ```
//!
//! ## Units
//!
//! `Stream::start_time` and `Stream::duration` are seconds. `Chapter::start`,
//! `Chapter::end` and `FileInfoResponse::duration` are raw ticks in their own
//! time base. Existing consumers rely on this mix, so it is kept as is.
//!
//! Earlier releases of the report passed `Stream::start_time` through as raw
//! ticks. It is now rescaled to seconds like `Stream::duration`; divide by the
//! stream's time base to recover the tick count.
//!
//! Raw tick fields are copied unmodified, including libav's
//! `AV_NOPTS_VALUE` (`i64::MIN`) when the value is unknown. The rescaled
//! stream fields report an unknown value as `0.0`.

mod engine;
mod error;
pub mod mapper;
mod options;
pub mod source;
pub mod tables;
mod types;
pub mod version;
pub mod view;

// Re-exports
pub use engine::FormatContext;
pub use error::{Error, ErrorKind, Result};
pub use options::{LogLevel, ProbeOptions};
pub use source::ContainerSource;
pub use types::{Chapter, CodecType, FileInfoResponse, Stream, Tag};
pub use version::{avcodec_version, avformat_version, avutil_version, LibraryVersions};
pub use view::ProbeView;

use std::path::Path;

/// Probe a media file with default options (libav logging silenced).
pub fn get_file_info<P: AsRef<Path>>(path: P) -> FileInfoResponse {
    get_file_info_with(path, &ProbeOptions::default())
}

/// Probe a media file.
///
/// The container is closed before this returns, on every path.
pub fn get_file_info_with<P: AsRef<Path>>(path: P, options: &ProbeOptions) -> FileInfoResponse {
    let path = path.as_ref();

    match FormatContext::open(path, options) {
        Ok(context) => {
            let report = assemble(&context);
            drop(context);

            #[cfg(feature = "tracing")]
            tracing::debug!(
                path = %path.display(),
                format = %report.name,
                streams = report.nb_streams,
                chapters = report.nb_chapters,
                "Probed container"
            );

            report
        }
        Err(e) => {
            #[cfg(feature = "tracing")]
            tracing::warn!(path = %path.display(), kind = ?e.kind(), "Probe failed: {}", e);

            FileInfoResponse::failed(&e)
        }
    }
}

/// Build a report from an opened container.
///
/// Every stream and chapter index is visited in container order; none is
/// skipped, so the counts always match the sequence lengths.
pub fn assemble<C: ContainerSource + ?Sized>(container: &C) -> FileInfoResponse {
    let header = container.header();

    let streams: Vec<Stream> = (0..container.stream_count())
        .map(|index| mapper::map_stream(container.stream(index)))
        .collect();
    let chapters: Vec<Chapter> = (0..container.chapter_count())
        .map(|index| mapper::map_chapter(container.chapter(index)))
        .collect();

    FileInfoResponse {
        name: header.format_name,
        bit_rate: header.bit_rate,
        duration: header.duration,
        url: header.url,
        nb_streams: streams.len() as u32,
        flags: header.flags,
        nb_chapters: chapters.len() as u32,
        streams,
        chapters,
        error: String::new(),
    }
}

/// Probe a media file on tokio's blocking pool.
///
/// The whole probe runs as one blocking task; it is never split across
/// await points.
#[cfg(feature = "async")]
pub async fn get_file_info_async(
    path: impl Into<std::path::PathBuf>,
    options: ProbeOptions,
) -> FileInfoResponse {
    let path = path.into();
    match tokio::task::spawn_blocking(move || get_file_info_with(&path, &options)).await {
        Ok(report) => report,
        Err(e) => FileInfoResponse::from_error_message(format!("probe task failed: {e}")),
    }
}
