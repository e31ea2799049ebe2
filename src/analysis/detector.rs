//! Pair relationship detection
//!
//! Tries every per-beat transform against a pair of beats (or two beat
//! ranges) and keeps the ones that fit exactly. Ambiguity is expected:
//! a pair symmetric under Rotate180 frequently fits other candidates too,
//! and choosing among them is the priority resolver's job.

use std::collections::BTreeSet;
use std::ops::Range;
use crate::analysis::pairing::PairingStrategy;
use crate::analysis::priority::resolve;
use crate::models::{Beat, BeatPairRelationship, MotionTransform, Sequence, TransformationKind};
use crate::transforms::motion_algebra::maps_onto;

/// Every transformation mapping beat `a` exactly onto beat `b`.
/// Empty when either index is out of range or nothing fits.
pub fn detect(sequence: &Sequence, a: usize, b: usize) -> BTreeSet<TransformationKind> {
    match (sequence.beat(a), sequence.beat(b)) {
        (Some(source), Some(target)) => detect_beats(source, target),
        _ => BTreeSet::new(),
    }
}

/// Every transformation mapping `source` exactly onto `target`
pub fn detect_beats(source: &Beat, target: &Beat) -> BTreeSet<TransformationKind> {
    let mut found: BTreeSet<TransformationKind> = motion_matches(source, target)
        .into_iter()
        .map(TransformationKind::Motion)
        .collect();

    if source.reversed().same_motions(target) {
        found.insert(TransformationKind::Rewind);
    }

    found
}

fn motion_matches(source: &Beat, target: &Beat) -> BTreeSet<MotionTransform> {
    MotionTransform::all()
        .into_iter()
        .filter(|&t| maps_onto(t, source, target))
        .collect()
}

/// Transformations relating two equal-length beat ranges as a whole.
///
/// A per-beat transform qualifies when it fits every aligned pair; a range
/// copied verbatim is reported as Repeat rather than Identity. Rewind is
/// reported when `b` replays `a` backwards beat by beat.
pub fn detect_range(sequence: &Sequence, a: Range<usize>, b: Range<usize>) -> BTreeSet<TransformationKind> {
    let (Some(source), Some(target)) = (sequence.beats.get(a), sequence.beats.get(b)) else {
        return BTreeSet::new();
    };
    if source.is_empty() || source.len() != target.len() {
        return BTreeSet::new();
    }

    let mut shared = motion_matches(&source[0], &target[0]);
    for (s, t) in source.iter().zip(target).skip(1) {
        if shared.is_empty() {
            break;
        }
        shared = shared.intersection(&motion_matches(s, t)).copied().collect();
    }

    let mut found: BTreeSet<TransformationKind> = shared
        .into_iter()
        .map(|t| {
            if t.is_identity() {
                TransformationKind::Repeat
            } else {
                TransformationKind::Motion(t)
            }
        })
        .collect();

    let rewound = source
        .iter()
        .rev()
        .zip(target)
        .all(|(s, t)| s.reversed().same_motions(t));
    if rewound {
        found.insert(TransformationKind::Rewind);
    }

    found
}

/// Detected (not yet confirmed) relationships for every pair of a strategy
pub fn detect_pairs(sequence: &Sequence, strategy: PairingStrategy) -> Vec<BeatPairRelationship> {
    strategy
        .pairs(sequence.len())
        .into_iter()
        .map(|(a, b)| BeatPairRelationship::new(a, b, detect(sequence, a, b)))
        .collect()
}

/// Confirm each relationship through the priority order.
/// Unclassifiable pairs keep `confirmed_transformation = None`.
pub fn resolve_pairs(relationships: &mut [BeatPairRelationship]) {
    for relationship in relationships.iter_mut() {
        relationship.confirmed_transformation = resolve(&relationship.detected_transformations);
        if relationship.confirmed_transformation.is_none() {
            log::debug!(
                "beat pair ({}, {}) fits no transformation",
                relationship.key_beat_index,
                relationship.corresponding_beat_index
            );
        }
    }
}

/// Detect and resolve in one step
pub fn classify_pairs(sequence: &Sequence, strategy: PairingStrategy) -> Vec<BeatPairRelationship> {
    let mut relationships = detect_pairs(sequence, strategy);
    resolve_pairs(&mut relationships);
    relationships
}
