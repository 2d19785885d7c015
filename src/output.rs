//! Rendering reports for the terminal.

use crate::config::{OutputConfig, OutputFormat, ReportView};
use anyhow::Result;
use avinfo_probe::{CodecType, FileInfoResponse, LibraryVersions, ProbeView, Stream, Tag};
use std::fmt::Write;

/// Render one report according to the output settings.
pub fn render_report(report: &FileInfoResponse, output: &OutputConfig) -> Result<String> {
    match (output.format, output.view) {
        (OutputFormat::Text, _) => Ok(render_text(report)),
        (OutputFormat::Json, ReportView::Report) => Ok(serde_json::to_string(report)?),
        (OutputFormat::Pretty, ReportView::Report) => Ok(serde_json::to_string_pretty(report)?),
        (OutputFormat::Json, ReportView::Ffprobe) => {
            Ok(serde_json::to_string(&ProbeView::from(report))?)
        }
        (OutputFormat::Pretty, ReportView::Ffprobe) => {
            Ok(serde_json::to_string_pretty(&ProbeView::from(report))?)
        }
    }
}

pub fn render_versions(versions: &LibraryVersions, json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(versions)?);
    }
    Ok(format!(
        "libavformat {}\nlibavcodec  {}\nlibavutil   {}",
        versions.avformat, versions.avcodec, versions.avutil
    ))
}

/// Human-readable summary of a report.
pub fn render_text(report: &FileInfoResponse) -> String {
    let mut out = String::new();

    if !report.is_ok() {
        let _ = write!(out, "Error: {}", report.error.trim_end());
        return out;
    }

    let _ = writeln!(out, "File: {}", report.url);
    let _ = writeln!(out, "Format: {}", report.name);
    let _ = writeln!(out, "Duration: {}", format_duration(report.duration));
    let _ = writeln!(out, "Bit rate: {} kb/s", report.bit_rate / 1000);

    let _ = writeln!(out, "\nStreams: {}", report.nb_streams);
    for (i, stream) in report.streams.iter().enumerate() {
        let _ = writeln!(out, "  [{}] {}", i, describe_stream(stream));
        write_tags(&mut out, &stream.tags);
    }

    let _ = writeln!(out, "\nChapters: {}", report.nb_chapters);
    for chapter in &report.chapters {
        let _ = writeln!(
            out,
            "  #{} {} - {} ({})",
            chapter.id, chapter.start, chapter.end, chapter.time_base
        );
        write_tags(&mut out, &chapter.tags);
    }

    out.truncate(out.trim_end().len());
    out
}

fn describe_stream(stream: &Stream) -> String {
    let mut line = format!(
        "id={} {} {}",
        stream.id, stream.codec_type, stream.codec_name
    );
    if !stream.profile.is_empty() {
        let _ = write!(line, " ({})", stream.profile);
    }

    match stream.codec_type {
        CodecType::Video => {
            let _ = write!(
                line,
                " {} {}x{} {} fps",
                stream.format, stream.width, stream.height, stream.r_frame_rate
            );
        }
        CodecType::Audio => {
            let _ = write!(line, " {} Hz {}ch", stream.sample_rate, stream.channels);
        }
        _ => {}
    }

    if stream.bit_rate > 0 {
        let _ = write!(line, " {} kb/s", stream.bit_rate / 1000);
    }
    let _ = write!(line, " {:.3}s", stream.duration);
    line
}

fn write_tags(out: &mut String, tags: &[Tag]) {
    for tag in tags {
        let _ = writeln!(out, "      {}: {}", tag.key, tag.value);
    }
}

/// Format a container duration (microsecond ticks) as HH:MM:SS.mmm.
fn format_duration(micros: i64) -> String {
    let millis = micros.max(0) / 1000;
    let secs = millis / 1000;
    let mins = secs / 60;
    let hours = mins / 60;
    format!(
        "{:02}:{:02}:{:02}.{:03}",
        hours,
        mins % 60,
        secs % 60,
        millis % 1000
    )
}
