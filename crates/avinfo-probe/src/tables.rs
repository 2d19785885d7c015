//! Name lookups into libav's descriptor tables.

use crate::types::CodecType;
use ffmpeg_the_third as ffmpeg;
use ffmpeg::ffi;
use std::ffi::{c_char, c_int, CStr};

/// Codec short name, e.g. "h264".
///
/// libav answers "none" and "unknown_codec" itself for ids it has no
/// descriptor for; those are passed through.
pub fn codec_name(id: ffi::AVCodecID) -> String {
    unsafe { owned_string(ffi::avcodec_get_name(id)) }
}

/// Profile name, or empty text when libav does not know the profile.
pub fn profile_name(id: ffi::AVCodecID, profile: c_int) -> String {
    unsafe { owned_string(ffi::avcodec_profile_name(id, profile)) }
}

/// Pixel format name for a raw `AVCodecParameters::format` value.
pub fn pixel_format_name(raw: c_int) -> String {
    if !(0..ffi::AVPixelFormat::AV_PIX_FMT_NB as c_int).contains(&raw) {
        return String::new();
    }
    // In range of a contiguous #[repr(i32)] enum.
    let format: ffi::AVPixelFormat = unsafe { std::mem::transmute(raw) };
    unsafe { owned_string(ffi::av_get_pix_fmt_name(format)) }
}

pub fn media_type(kind: ffi::AVMediaType) -> CodecType {
    match ffmpeg::media::Type::from(kind) {
        ffmpeg::media::Type::Video => CodecType::Video,
        ffmpeg::media::Type::Audio => CodecType::Audio,
        ffmpeg::media::Type::Subtitle => CodecType::Subtitle,
        ffmpeg::media::Type::Data => CodecType::Data,
        ffmpeg::media::Type::Attachment => CodecType::Attachment,
        _ => CodecType::Unknown,
    }
}

/// Copy a C string owned by libav. Null becomes empty text.
///
/// # Safety
///
/// `ptr` must be null or point to a NUL-terminated string that stays valid
/// for the duration of the call.
pub(crate) unsafe fn owned_string(ptr: *const c_char) -> String {
    if ptr.is_null() {
        String::new()
    } else {
        CStr::from_ptr(ptr).to_string_lossy().into_owned()
    }
}
