//! core/order.rs
//! Turn a pile of tagged tracks into one validated, gapless (disc, track) sequence.
//!
//! Every problem is collected before failing:
//! - unsplittable files, missing disc/track fields, duplicate slots during the scan
//! - missing discs, short discs, track gaps after the scan
//!
//! Disc/track counts are expected to agree across files. Disagreement is recorded as a
//! problem (never a hard stop); the largest declared count is used for the completeness checks.

use std::collections::BTreeMap;

use log::{debug, info};

use super::error::{FuzerError, FuzerResult, Problems};
use super::split::detect_tag_block;
use super::types::{AssemblyPlan, OrderMode, Position, RawTrack, TagBlock, TrackDescriptor};

/// disc index -> track index -> track. BTreeMap keeps both levels ascending.
type DiscMap = BTreeMap<u32, BTreeMap<u32, TrackDescriptor>>;

/// Validate and sequence `tracks`.
///
/// - `ByTags`: sort by (disc, track) from the collaborator-supplied metadata.
/// - `InFileOrder`: one synthetic disc, tracks numbered by input position; metadata ignored.
///
/// The first track of the resulting plan is the tag donor.
pub fn order(tracks: Vec<RawTrack>, mode: OrderMode) -> FuzerResult<AssemblyPlan> {
    if tracks.is_empty() {
        return Err(FuzerError::NoInputs);
    }

    let ordered = match mode {
        OrderMode::ByTags => order_by_tags(tracks)?,
        OrderMode::InFileOrder => order_in_file_order(tracks)?,
    };

    info!("Ordered {} tracks", ordered.len());
    Ok(AssemblyPlan::new(ordered))
}

fn order_in_file_order(tracks: Vec<RawTrack>) -> FuzerResult<Vec<TrackDescriptor>> {
    let total = tracks.len() as u32;
    let mut problems = Problems::new();
    let mut out = Vec::with_capacity(tracks.len());

    for (i, raw) in tracks.into_iter().enumerate() {
        let disc = Position { index: 1, count: 1 };
        let track = Position {
            index: i as u32 + 1,
            count: total,
        };

        match split(raw, i, disc, track) {
            Ok(d) => out.push(d),
            Err(e) => problems.push(e.to_string()),
        }
    }

    problems.into_result()?;
    Ok(out)
}

fn order_by_tags(tracks: Vec<RawTrack>) -> FuzerResult<Vec<TrackDescriptor>> {
    let mut problems = Problems::new();
    let mut discs: DiscMap = BTreeMap::new();

    // First declared count wins for the disagreement check; the max drives validation.
    let mut first_disc_count: Option<u32> = None;
    let mut total_disc_count: u32 = 0;
    let mut first_track_counts: BTreeMap<u32, u32> = BTreeMap::new();
    let mut track_counts: BTreeMap<u32, u32> = BTreeMap::new();

    for (input_index, raw) in tracks.into_iter().enumerate() {
        let name = raw.source_name.clone();

        let tag = match detect_tag_block(&name, &raw.data) {
            Ok(tag) => tag,
            Err(e) => {
                problems.push(e.to_string());
                continue;
            }
        };

        let (disc, track) = match raw.metadata.require(&name) {
            Ok(positions) => positions,
            Err(errs) => {
                for e in errs {
                    problems.push(e.to_string());
                }
                continue;
            }
        };

        let range_problems = out_of_range(&name, disc, track);
        if !range_problems.is_empty() {
            for p in range_problems {
                problems.push(p);
            }
            continue;
        }

        debug!(
            "{name}: disc {}/{}, track {}/{}",
            disc.index, disc.count, track.index, track.count
        );

        let expected_discs = *first_disc_count.get_or_insert(disc.count);
        if disc.count != expected_discs {
            problems.push(format!(
                "{name} - disc count {} disagrees with {expected_discs}",
                disc.count
            ));
        }
        total_disc_count = total_disc_count.max(disc.count);

        let expected_tracks = *first_track_counts.entry(disc.index).or_insert(track.count);
        if track.count != expected_tracks {
            problems.push(format!(
                "{name} - Disc {} track count {} disagrees with {expected_tracks}",
                disc.index, track.count
            ));
        }
        let declared = track_counts.entry(disc.index).or_insert(0);
        *declared = (*declared).max(track.count);

        let slots = discs.entry(disc.index).or_default();
        if slots.contains_key(&track.index) {
            problems.push(format!(
                "Disc {}, Track {} - more than one file",
                disc.index, track.index
            ));
            continue;
        }

        slots.insert(track.index, descriptor(raw, input_index, tag, disc, track));
    }

    validate_completeness(&discs, total_disc_count, &track_counts, &mut problems);
    problems.into_result()?;

    Ok(discs
        .into_values()
        .flat_map(BTreeMap::into_values)
        .collect())
}

/// Post-scan checks: every disc present, every disc full, no track gaps.
fn validate_completeness(
    discs: &DiscMap,
    total_disc_count: u32,
    track_counts: &BTreeMap<u32, u32>,
    problems: &mut Problems,
) {
    let declared = 1..=total_disc_count;
    let missing: Vec<u32> = declared
        .clone()
        .filter(|d| !discs.contains_key(d))
        .collect();
    let stray: Vec<u32> = discs
        .keys()
        .copied()
        .filter(|d| !declared.contains(d))
        .collect();

    if discs.len() != total_disc_count as usize || !missing.is_empty() {
        problems.push(format!(
            "Expected {total_disc_count} discs, found {}",
            discs.len()
        ));
    }
    for d in missing {
        problems.push(format!("Disc {d} - no tracks found"));
    }
    for d in stray {
        problems.push(format!(
            "Disc {d} - outside the {total_disc_count} declared discs"
        ));
    }

    for (&d, slots) in discs {
        let expected = track_counts.get(&d).copied().unwrap_or(0);

        if slots.len() != expected as usize {
            problems.push(format!(
                "Disc {d} - found {} of {expected} tracks",
                slots.len()
            ));
        }

        for t in 1..=expected {
            if !slots.contains_key(&t) {
                problems.push(format!("Disc {d}, Track {t} - no sound found"));
            }
        }
    }
}

/// `1 <= index <= count` for both positions; one problem per offending field.
fn out_of_range(name: &str, disc: Position, track: Position) -> Vec<String> {
    [("disc", disc), ("track", track)]
        .into_iter()
        .filter(|(_, p)| p.index == 0 || p.index > p.count)
        .map(|(field, p)| format!("{name} - {field} {}/{} out of range", p.index, p.count))
        .collect()
}

fn split(
    raw: RawTrack,
    input_index: usize,
    disc: Position,
    track: Position,
) -> FuzerResult<TrackDescriptor> {
    let tag = detect_tag_block(&raw.source_name, &raw.data)?;
    Ok(descriptor(raw, input_index, tag, disc, track))
}

fn descriptor(
    raw: RawTrack,
    input_index: usize,
    tag: TagBlock,
    disc: Position,
    track: Position,
) -> TrackDescriptor {
    TrackDescriptor {
        input_index,
        disc_index: disc.index,
        disc_count: disc.count,
        track_index: track.index,
        track_count: track.count,
        source_name: raw.source_name,
        data: raw.data,
        tag,
    }
}
