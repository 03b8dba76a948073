//! core/assemble.rs
//! Write an `AssemblyPlan` to a byte sink.
//!
//! Byte layout:
//! - leading (ID3v2) donor tag: `tag || payload_1 || ... || payload_n`
//! - trailing (ID3v1) donor tag: `payload_1 || ... || payload_n || tag`
//!
//! MP3 frames concatenate directly, so there are no separators and no resync step.
//! Any I/O error aborts immediately as `WriteFailure`; the caller owns cleanup of partial output.

use std::io::Write;

use log::debug;

use super::error::{FuzerError, FuzerResult};
use super::types::{AssemblyPlan, TagKind};

/// `assemble_with` without progress reporting.
#[cfg(test)]
pub fn assemble<W: Write>(plan: &AssemblyPlan, sink: W) -> FuzerResult<()> {
    assemble_with(plan, sink, |_| {})
}

/// Write every payload in plan order, placing the donor tag first or last by kind.
/// `on_track(i)` runs after payload `i` (0-based) is written.
pub fn assemble_with<W: Write>(
    plan: &AssemblyPlan,
    mut sink: W,
    mut on_track: impl FnMut(usize),
) -> FuzerResult<()> {
    let donor = plan.donor();
    let kind = donor.tag_kind();

    debug!(
        "Assembling {} tracks, {:?} tag from {}",
        plan.tracks().len(),
        kind,
        donor.source_name
    );

    if kind == TagKind::VersionedLeading {
        write_all(&mut sink, donor.tag_bytes())?;
    }

    for (i, payload) in plan.payloads().enumerate() {
        write_all(&mut sink, payload)?;
        on_track(i);
    }

    if kind == TagKind::LegacyTrailing {
        write_all(&mut sink, donor.tag_bytes())?;
    }

    sink.flush().map_err(FuzerError::WriteFailure)
}

fn write_all<W: Write>(sink: &mut W, bytes: &[u8]) -> FuzerResult<()> {
    sink.write_all(bytes).map_err(FuzerError::WriteFailure)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::order::order;
    use crate::core::split::tests::{legacy_tag, versioned_tag};
    use crate::core::types::{OrderMode, RawTrack, TrackMetadata};
    use std::io;

    fn raw(name: &str, data: Vec<u8>) -> RawTrack {
        RawTrack {
            source_name: name.to_string(),
            data,
            metadata: TrackMetadata::default(),
        }
    }

    fn with_leading(tag_fill: u8, payload: &[u8]) -> Vec<u8> {
        let mut data = versioned_tag(16, tag_fill);
        data.extend_from_slice(payload);
        data
    }

    fn with_trailing(tag_fill: u8, payload: &[u8]) -> Vec<u8> {
        let mut data = payload.to_vec();
        data.extend_from_slice(&legacy_tag(tag_fill));
        data
    }

    #[test]
    fn single_versioned_track_round_trips() {
        let original = with_leading(7, &[0xFF, 0xFB, 0x90, 0x00, 1, 2, 3]);
        let plan = order(vec![raw("one", original.clone())], OrderMode::InFileOrder).unwrap();

        let mut out = Vec::new();
        assemble(&plan, &mut out).unwrap();

        assert_eq!(out, original);
        assert_eq!(plan.output_len(), original.len());
    }

    #[test]
    fn versioned_donor_tag_goes_first() {
        let first = with_leading(1, b"p1");
        let donor_tag = first[..16].to_vec();
        let plan = order(
            vec![raw("a", first), raw("b", with_leading(2, b"p2"))],
            OrderMode::InFileOrder,
        )
        .unwrap();

        let mut out = Vec::new();
        assemble(&plan, &mut out).unwrap();

        let expected = [&donor_tag[..], &b"p1"[..], &b"p2"[..]].concat();
        assert_eq!(out, expected);
    }

    #[test]
    fn legacy_donor_tag_goes_last() {
        let plan = order(
            vec![
                raw("a", with_trailing(1, b"p1")),
                raw("b", with_trailing(2, b"p2")),
            ],
            OrderMode::InFileOrder,
        )
        .unwrap();

        let mut out = Vec::new();
        assemble(&plan, &mut out).unwrap();

        let expected = [&b"p1"[..], &b"p2"[..], &legacy_tag(1)[..]].concat();
        assert_eq!(out, expected);
    }

    #[test]
    fn progress_reports_each_track() {
        let plan = order(
            vec![
                raw("a", with_leading(0, b"x")),
                raw("b", with_leading(0, b"y")),
                raw("c", with_leading(0, b"z")),
            ],
            OrderMode::InFileOrder,
        )
        .unwrap();

        let mut seen = Vec::new();
        assemble_with(&plan, io::sink(), |i| seen.push(i)).unwrap();
        assert_eq!(seen, [0, 1, 2]);
    }

    struct FailingSink;

    impl Write for FailingSink {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("disk full"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn io_error_is_write_failure() {
        let plan = order(vec![raw("a", with_leading(0, b"x"))], OrderMode::InFileOrder).unwrap();
        assert!(matches!(
            assemble(&plan, FailingSink),
            Err(FuzerError::WriteFailure(_))
        ));
    }
}
