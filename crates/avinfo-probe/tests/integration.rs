//! Integration tests for avinfo-probe
//!
//! Fixtures are synthesized into temporary directories so every test runs
//! against real libavformat demuxers without checked-in media.

use avinfo_probe::{
    get_file_info, CodecType, ContainerSource, FileInfoResponse, FormatContext, ProbeOptions, Tag,
};
use std::fs;
use std::path::PathBuf;
use tempfile::{tempdir, TempDir};

// ===== Fixture functions =====

/// Mono 16-bit PCM WAV with `samples` frames of silence.
fn write_wav(dir: &TempDir, sample_rate: u32, samples: u32) -> PathBuf {
    let data_len = samples * 2;
    let mut bytes = Vec::with_capacity(44 + data_len as usize);
    bytes.extend_from_slice(b"RIFF");
    bytes.extend_from_slice(&(36 + data_len).to_le_bytes());
    bytes.extend_from_slice(b"WAVE");
    bytes.extend_from_slice(b"fmt ");
    bytes.extend_from_slice(&16u32.to_le_bytes());
    bytes.extend_from_slice(&1u16.to_le_bytes()); // PCM
    bytes.extend_from_slice(&1u16.to_le_bytes()); // channels
    bytes.extend_from_slice(&sample_rate.to_le_bytes());
    bytes.extend_from_slice(&(sample_rate * 2).to_le_bytes()); // byte rate
    bytes.extend_from_slice(&2u16.to_le_bytes()); // block align
    bytes.extend_from_slice(&16u16.to_le_bytes()); // bits per sample
    bytes.extend_from_slice(b"data");
    bytes.extend_from_slice(&data_len.to_le_bytes());
    bytes.resize(bytes.len() + data_len as usize, 0);

    let path = dir.path().join("tone.wav");
    fs::write(&path, bytes).unwrap();
    path
}

/// Two 16x16 yuv420p frames in a YUV4MPEG2 stream.
fn write_y4m(dir: &TempDir) -> PathBuf {
    let mut bytes = b"YUV4MPEG2 W16 H16 F25:1 Ip A1:1 C420jpeg\n".to_vec();
    for _ in 0..2 {
        bytes.extend_from_slice(b"FRAME\n");
        bytes.resize(bytes.len() + 16 * 16 * 3 / 2, 0x80);
    }

    let path = dir.path().join("frames.y4m");
    fs::write(&path, bytes).unwrap();
    path
}

/// An FFMETADATA file: no streams, two chapters.
fn write_chapters(dir: &TempDir) -> PathBuf {
    let text = "\
;FFMETADATA1
title=Fixture

[CHAPTER]
TIMEBASE=1/1000
START=0
END=90000
title=Opening
comment=first

[CHAPTER]
TIMEBASE=1/1000
START=90000
END=180000
title=Finale
";
    let path = dir.path().join("chapters.ffmeta");
    fs::write(&path, text).unwrap();
    path
}

fn assert_rational(value: &str) {
    let (num, den) = value
        .split_once('/')
        .unwrap_or_else(|| panic!("not a rational: {value}"));
    assert!(num.parse::<i64>().is_ok(), "bad numerator in {value}");
    assert!(den.parse::<i64>().is_ok(), "bad denominator in {value}");
}

fn assert_counts(report: &FileInfoResponse) {
    assert_eq!(report.nb_streams as usize, report.streams.len());
    assert_eq!(report.nb_chapters as usize, report.chapters.len());
}

fn assert_failed(report: &FileInfoResponse) {
    assert!(!report.error.is_empty());
    assert_eq!(
        FileInfoResponse {
            error: String::new(),
            ..report.clone()
        },
        FileInfoResponse::default()
    );
}

// ===== Failure reports =====

#[test]
fn test_missing_path() {
    let dir = tempdir().unwrap();
    let report = get_file_info(dir.path().join("absent.mkv"));

    assert_eq!(report.error, "cannot open file");
    assert_eq!(report.nb_streams, 0);
    assert!(report.streams.is_empty());
    assert_failed(&report);
}

#[test]
fn test_directory_path() {
    let dir = tempdir().unwrap();
    let report = get_file_info(dir.path());
    assert_eq!(report.error, "cannot open file");
    assert_failed(&report);
}

#[test]
fn test_unrecognized_content() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("notes.nope");
    fs::write(
        &path,
        "avinfo fixture: plain prose, not a container.\n".repeat(200),
    )
    .unwrap();

    let report = get_file_info(&path);
    assert_ne!(report.error, "cannot open file");
    assert_failed(&report);
}

#[test]
fn test_empty_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("empty.mp4");
    fs::write(&path, b"").unwrap();

    assert_failed(&get_file_info(&path));
}

// ===== Audio =====

#[test]
fn test_wav_audio_stream() {
    let dir = tempdir().unwrap();
    let path = write_wav(&dir, 8000, 8000);
    let report = get_file_info(&path);

    assert!(report.is_ok(), "{}", report.error);
    assert_eq!(report.name, "wav");
    assert_eq!(report.url, path.to_str().unwrap());
    assert_eq!(report.nb_streams, 1);
    assert_counts(&report);
    assert!(report.chapters.is_empty());

    let stream = &report.streams[0];
    assert_eq!(stream.codec_type, CodecType::Audio);
    assert_eq!(stream.codec_name, "pcm_s16le");
    assert_eq!(stream.channels, 1);
    assert_eq!(stream.sample_rate, 8000);
    assert_eq!((stream.width, stream.height), (0, 0));
    assert!((stream.duration - 1.0).abs() < 1e-3, "{}", stream.duration);
    assert_rational(&stream.r_frame_rate);
}

#[test]
fn test_probe_is_idempotent() {
    let dir = tempdir().unwrap();
    let path = write_wav(&dir, 16000, 4000);

    let first = get_file_info(&path);
    let second = get_file_info(&path);
    assert!(first.is_ok(), "{}", first.error);
    assert_eq!(first, second);
}

#[cfg(target_os = "linux")]
#[test]
fn test_non_utf8_path() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let dir = tempdir().unwrap();
    let source = write_wav(&dir, 8000, 800);
    let path = dir.path().join(OsStr::from_bytes(b"clip\xff.wav"));
    fs::rename(&source, &path).unwrap();
    assert!(path.to_str().is_none());

    let report = get_file_info(&path);
    assert!(report.is_ok(), "{}", report.error);
    assert_eq!(report.name, "wav");
    assert_eq!(report.streams[0].codec_name, "pcm_s16le");
}

// ===== Direct context access =====

#[test]
fn test_context_indexes_within_counts() {
    let dir = tempdir().unwrap();
    let path = write_wav(&dir, 8000, 800);
    let context = FormatContext::open(&path, &ProbeOptions::default()).unwrap();

    assert_eq!(context.stream_count(), 1);
    assert_eq!(context.stream(0).codec.map(|c| c.sample_rate), Some(8000));
    assert_eq!(context.chapter_count(), 0);
}

#[test]
#[should_panic(expected = "stream index 5 out of range")]
fn test_context_stream_index_out_of_range() {
    let dir = tempdir().unwrap();
    let path = write_wav(&dir, 8000, 800);
    let context = FormatContext::open(&path, &ProbeOptions::default()).unwrap();
    context.stream(5);
}

#[test]
#[should_panic(expected = "chapter index 0 out of range")]
fn test_context_chapter_index_out_of_range() {
    let dir = tempdir().unwrap();
    let path = write_wav(&dir, 8000, 800);
    let context = FormatContext::open(&path, &ProbeOptions::default()).unwrap();
    context.chapter(0);
}

// ===== Video =====

#[test]
fn test_y4m_video_stream() {
    let dir = tempdir().unwrap();
    let report = get_file_info(write_y4m(&dir));

    assert!(report.is_ok(), "{}", report.error);
    assert_eq!(report.name, "yuv4mpegpipe");
    assert_eq!(report.nb_streams, 1);
    assert_counts(&report);

    let stream = &report.streams[0];
    assert_eq!(stream.codec_type, CodecType::Video);
    assert_eq!(stream.codec_name, "rawvideo");
    assert_eq!(stream.format, "yuv420p");
    assert_eq!((stream.width, stream.height), (16, 16));
    assert_eq!(stream.channels, 0);
    assert_eq!(stream.sample_rate, 0);
    assert_rational(&stream.r_frame_rate);
}

// ===== Chapters =====

#[test]
fn test_chapters_keep_raw_ticks_and_tag_order() {
    let dir = tempdir().unwrap();
    let report = get_file_info(write_chapters(&dir));

    assert!(report.is_ok(), "{}", report.error);
    assert_eq!(report.name, "ffmetadata");
    assert_eq!(report.nb_streams, 0);
    assert_eq!(report.nb_chapters, 2);
    assert_counts(&report);

    let first = &report.chapters[0];
    assert_eq!(first.time_base, "1/1000");
    assert_eq!((first.start, first.end), (0, 90_000));
    assert_eq!(
        first.tags,
        vec![Tag::new("title", "Opening"), Tag::new("comment", "first")]
    );

    let second = &report.chapters[1];
    assert_eq!((second.start, second.end), (90_000, 180_000));
    assert_eq!(second.tags, vec![Tag::new("title", "Finale")]);
    for chapter in &report.chapters {
        assert_rational(&chapter.time_base);
    }
}

// ===== Serialization =====

#[test]
fn test_report_json_schema() {
    let dir = tempdir().unwrap();
    let report = get_file_info(write_wav(&dir, 8000, 800));
    let value = serde_json::to_value(&report).unwrap();

    for key in [
        "name",
        "bit_rate",
        "duration",
        "url",
        "nb_streams",
        "flags",
        "streams",
        "nb_chapters",
        "chapters",
        "error",
    ] {
        assert!(value.get(key).is_some(), "missing {key}");
    }
    assert_eq!(value["streams"][0]["codec_type"], "audio");
    assert_eq!(value["error"], "");

    let back: FileInfoResponse = serde_json::from_value(value).unwrap();
    assert_eq!(back, report);
}

#[cfg(feature = "async")]
#[tokio::test]
async fn test_async_probe_matches_sync() {
    let dir = tempdir().unwrap();
    let path = write_wav(&dir, 8000, 8000);

    let report =
        avinfo_probe::get_file_info_async(path.clone(), avinfo_probe::ProbeOptions::default())
            .await;
    assert_eq!(report, get_file_info(&path));
}
