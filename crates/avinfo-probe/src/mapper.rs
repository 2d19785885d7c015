//! Translation of native records into report records.
//!
//! Every function here is total. A field libav did not fill in, or one that
//! does not apply to the stream's media type, becomes zero or empty text.

use crate::source::{ChapterRecord, CodecRecord, StreamRecord};
use crate::tables;
use crate::types::{Chapter, CodecType, Stream};
use ffmpeg_the_third::Rational;

/// libav's `AV_NOPTS_VALUE`: the timestamp is unknown.
const NO_TIMESTAMP: i64 = i64::MIN;

/// Render a rational as `"<num>/<den>"` without reducing it.
pub fn render_rational(value: Rational) -> String {
    format!("{}/{}", value.numerator(), value.denominator())
}

/// Convert a tick count to seconds using `time_base`.
pub fn ticks_to_seconds(ticks: i64, time_base: Rational) -> f64 {
    if ticks == NO_TIMESTAMP || time_base.denominator() == 0 {
        return 0.0;
    }
    ticks as f64 * f64::from(time_base.numerator()) / f64::from(time_base.denominator())
}

pub fn map_stream(record: StreamRecord) -> Stream {
    let mut stream = Stream {
        id: record.id,
        start_time: ticks_to_seconds(record.start_time, record.time_base),
        duration: ticks_to_seconds(record.duration, record.time_base),
        r_frame_rate: render_rational(record.r_frame_rate),
        tags: record.tags,
        ..Default::default()
    };

    if let Some(codec) = record.codec {
        apply_codec(&mut stream, &codec);
    }

    stream
}

fn apply_codec(stream: &mut Stream, codec: &CodecRecord) {
    stream.codec_type = tables::media_type(codec.media_type);
    stream.codec_name = tables::codec_name(codec.codec_id);
    stream.format = tables::pixel_format_name(codec.format);
    stream.bit_rate = codec.bit_rate;
    stream.profile = tables::profile_name(codec.codec_id, codec.profile);
    stream.level = codec.level;

    match stream.codec_type {
        CodecType::Video => {
            stream.width = codec.width;
            stream.height = codec.height;
        }
        CodecType::Audio => {
            stream.channels = codec.channels;
            stream.sample_rate = codec.sample_rate;
            stream.frame_size = codec.frame_size;
        }
        _ => {}
    }
}

pub fn map_chapter(record: ChapterRecord) -> Chapter {
    Chapter {
        id: record.id,
        time_base: render_rational(record.time_base),
        start: record.start,
        end: record.end,
        tags: record.tags,
    }
}
