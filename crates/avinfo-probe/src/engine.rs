//! Opening containers through libavformat.
//!
//! The safe `ffmpeg::format::input` folds allocation, header parsing and
//! stream-info discovery into one call with one error. Each step has its
//! own failure here, so the context is driven through `ffi` directly and
//! owned by [`FormatContext`], which closes it on drop.

use crate::source::{ChapterRecord, CodecRecord, ContainerHeader, ContainerSource, StreamRecord};
use crate::tables::owned_string;
use crate::types::Tag;
use crate::{Error, ProbeOptions, Result};
use ffmpeg_the_third as ffmpeg;
use ffmpeg::ffi;
use std::ffi::{c_int, CString};
use std::fs::File;
use std::path::Path;
use std::ptr;
use std::sync::{Mutex, Once};

static FFMPEG_INIT: Once = Once::new();

/// Probes in flight and the libav log level to restore once none are.
static LOG_LEVEL: Mutex<LogLevelState> = Mutex::new(LogLevelState {
    active: 0,
    saved: 0,
});

struct LogLevelState {
    active: usize,
    saved: c_int,
}

fn init_ffmpeg() {
    FFMPEG_INIT.call_once(|| {
        if let Err(_e) = ffmpeg::init() {
            #[cfg(feature = "tracing")]
            tracing::warn!("FFmpeg initialization reported an error: {}", _e);
        }
    });
}

/// Holds libav's process-wide log level for the length of a probe.
///
/// The first guard saves the caller's level and the last one to drop puts
/// it back, so overlapping probes never restore each other's setting.
struct LogLevelGuard;

impl LogLevelGuard {
    fn set(level: ffmpeg::util::log::Level) -> Self {
        let mut state = LOG_LEVEL.lock().unwrap_or_else(|e| e.into_inner());
        if state.active == 0 {
            state.saved = unsafe { ffi::av_log_get_level() };
        }
        state.active += 1;
        ffmpeg::util::log::set_level(level);
        LogLevelGuard
    }
}

impl Drop for LogLevelGuard {
    fn drop(&mut self) {
        let mut state = LOG_LEVEL.lock().unwrap_or_else(|e| e.into_inner());
        state.active -= 1;
        if state.active == 0 {
            unsafe { ffi::av_log_set_level(state.saved) };
        }
    }
}

/// Path bytes handed to `avformat_open_input`.
#[cfg(unix)]
fn native_path(path: &Path) -> Option<CString> {
    use std::os::unix::ffi::OsStrExt;
    CString::new(path.as_os_str().as_bytes()).ok()
}

#[cfg(not(unix))]
fn native_path(path: &Path) -> Option<CString> {
    path.to_str().and_then(|p| CString::new(p).ok())
}

/// An open libavformat context with stream information discovered.
pub struct FormatContext {
    ptr: *mut ffi::AVFormatContext,
    // Dropped after `Drop::drop` has closed the context.
    _log_level: LogLevelGuard,
}

impl FormatContext {
    /// Open `path`, parse its header and discover stream information.
    pub fn open(path: &Path, options: &ProbeOptions) -> Result<Self> {
        init_ffmpeg();
        let log_level = LogLevelGuard::set(options.log_level.into());

        let readable = File::open(path)
            .and_then(|file| file.metadata())
            .map(|meta| meta.is_file())
            .unwrap_or(false);
        if !readable {
            return Err(Error::unreadable());
        }
        let c_path = native_path(path).ok_or_else(Error::unreadable)?;

        let mut raw_ctx = unsafe { ffi::avformat_alloc_context() };
        if raw_ctx.is_null() {
            return Err(Error::Allocation);
        }

        // On failure libavformat frees the context and nulls `raw_ctx`.
        let ret = unsafe {
            ffi::avformat_open_input(&mut raw_ctx, c_path.as_ptr(), ptr::null(), ptr::null_mut())
        };
        if ret < 0 {
            return Err(ffmpeg::Error::from(ret).into());
        }

        let context = FormatContext {
            ptr: raw_ctx,
            _log_level: log_level,
        };
        let ret = unsafe { ffi::avformat_find_stream_info(context.ptr, ptr::null_mut()) };
        if ret < 0 {
            return Err(Error::StreamInfo);
        }

        Ok(context)
    }

    fn raw(&self) -> &ffi::AVFormatContext {
        // Non-null from a successful open until drop.
        unsafe { &*self.ptr }
    }
}

impl Drop for FormatContext {
    fn drop(&mut self) {
        unsafe { ffi::avformat_close_input(&mut self.ptr) };
    }
}

impl ContainerSource for FormatContext {
    fn header(&self) -> ContainerHeader {
        let ctx = self.raw();
        let format_name = unsafe { ctx.iformat.as_ref() }
            .map(|format| unsafe { owned_string(format.name) })
            .unwrap_or_default();

        ContainerHeader {
            format_name,
            bit_rate: ctx.bit_rate,
            duration: ctx.duration,
            url: unsafe { owned_string(ctx.url) },
            flags: ctx.flags,
        }
    }

    fn stream_count(&self) -> usize {
        self.raw().nb_streams as usize
    }

    fn stream(&self, index: usize) -> StreamRecord {
        assert!(
            index < self.stream_count(),
            "stream index {index} out of range for {} streams",
            self.stream_count()
        );
        let stream = unsafe { &**self.raw().streams.add(index) };

        let codec = unsafe { stream.codecpar.as_ref() }.map(|par| CodecRecord {
            media_type: par.codec_type,
            codec_id: par.codec_id,
            format: par.format,
            bit_rate: par.bit_rate,
            profile: par.profile,
            level: par.level,
            width: par.width,
            height: par.height,
            channels: par.ch_layout.nb_channels,
            sample_rate: par.sample_rate,
            frame_size: par.frame_size,
        });

        StreamRecord {
            id: stream.id,
            start_time: stream.start_time,
            duration: stream.duration,
            time_base: stream.time_base.into(),
            r_frame_rate: stream.r_frame_rate.into(),
            codec,
            tags: unsafe { read_tags(stream.metadata) },
        }
    }

    fn chapter_count(&self) -> usize {
        self.raw().nb_chapters as usize
    }

    fn chapter(&self, index: usize) -> ChapterRecord {
        assert!(
            index < self.chapter_count(),
            "chapter index {index} out of range for {} chapters",
            self.chapter_count()
        );
        let chapter = unsafe { &**self.raw().chapters.add(index) };

        ChapterRecord {
            id: chapter.id,
            time_base: chapter.time_base.into(),
            start: chapter.start,
            end: chapter.end,
            tags: unsafe { read_tags(chapter.metadata) },
        }
    }
}

/// Copy every entry of a metadata dictionary, in libav's iteration order.
///
/// # Safety
///
/// `dict` must be null or a dictionary owned by a live format context.
unsafe fn read_tags(dict: *const ffi::AVDictionary) -> Vec<Tag> {
    let mut tags = Vec::new();
    let mut entry: *const ffi::AVDictionaryEntry = ptr::null();

    loop {
        entry = ffi::av_dict_get(
            dict,
            c"".as_ptr(),
            entry,
            ffi::AV_DICT_IGNORE_SUFFIX as c_int,
        );
        let Some(current) = entry.as_ref() else {
            break;
        };
        tags.push(Tag {
            key: owned_string(current.key),
            value: owned_string(current.value),
        });
    }

    tags
}
