//! core/duration.rs
//! Track length from container headers (Symphonia probe). Nothing is decoded.
//!
//! MP3 only reports a frame count when the file carries a Xing/Info/VBRI header;
//! without one the length is unknown (`None`).

use std::fs::File;
use std::path::Path;

use symphonia::core::formats::FormatOptions;
use symphonia::core::io::{MediaSourceStream, MediaSourceStreamOptions};
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;
use symphonia::core::units::TimeBase;

/// Best-effort duration in milliseconds.
pub fn probe_duration_ms(path: &Path) -> Option<u64> {
    let file = File::open(path).ok()?;
    let mss = MediaSourceStream::new(Box::new(file), MediaSourceStreamOptions::default());

    let mut hint = Hint::new();
    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        hint.with_extension(ext);
    }

    let probed = symphonia::default::get_probe()
        .format(
            &hint,
            mss,
            &FormatOptions::default(),
            &MetadataOptions::default(),
        )
        .ok()?;

    let track = probed.format.default_track()?;
    duration_from_params(track.codec_params.time_base, track.codec_params.n_frames)
}

/// Sum of known durations, plus how many were unknown.
pub fn total_duration_ms(durations: &[Option<u64>]) -> (u64, usize) {
    durations
        .iter()
        .fold((0, 0), |(sum, unknown), d| match d {
            Some(ms) => (sum + ms, unknown),
            None => (sum, unknown + 1),
        })
}

/// `h:mm:ss` for book-length values, `m:ss` below an hour.
pub fn fmt_duration(ms: Option<u64>) -> String {
    let Some(ms) = ms else { return "-".into() };
    let s = ms / 1000;
    let (h, m, s) = (s / 3600, (s / 60) % 60, s % 60);
    if h > 0 {
        format!("{h}:{m:02}:{s:02}")
    } else {
        format!("{m}:{s:02}")
    }
}

fn duration_from_params(time_base: Option<TimeBase>, n_frames: Option<u64>) -> Option<u64> {
    let tb = time_base?;
    let frames = n_frames?;

    let t = tb.calc_time(frames);
    let ms = (t.seconds as f64 * 1000.0) + (t.frac * 1000.0);
    Some(ms.round() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_minutes_and_hours() {
        assert_eq!(fmt_duration(None), "-");
        assert_eq!(fmt_duration(Some(61_000)), "1:01");
        assert_eq!(fmt_duration(Some(3_723_400)), "1:02:03");
    }

    #[test]
    fn totals_count_unknowns() {
        assert_eq!(
            total_duration_ms(&[Some(1000), None, Some(500), None]),
            (1500, 2)
        );
    }

    #[test]
    fn frames_convert_with_time_base() {
        // 44.1 kHz, 441000 frames -> 10 s
        assert_eq!(
            duration_from_params(Some(TimeBase::new(1, 44_100)), Some(441_000)),
            Some(10_000)
        );
        assert_eq!(duration_from_params(None, Some(1)), None);
    }

    #[test]
    fn garbage_file_has_no_duration() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("noise.mp3");
        std::fs::write(&path, [0u8; 64]).unwrap();

        assert_eq!(probe_duration_ms(&path), None);
    }
}
