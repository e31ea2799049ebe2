//! Ambiguity resolution
//!
//! When several transformations fit a pair, the simplest explanation wins.
//! "Simplest" is a fixed, hand-ordered table: same-role explanations before
//! swapped ones, non-inverted before inverted. Labels are user-facing, so the
//! order is kept stable rather than derived.

use once_cell::sync::Lazy;
use std::collections::{BTreeSet, HashMap};
use crate::models::transformation::GeometricMap::{self, *};
use crate::models::transformation::TransformationKind;

const fn plain(map: GeometricMap) -> TransformationKind {
    TransformationKind::motion(Some(map), false, false)
}

const fn inverted(map: GeometricMap) -> TransformationKind {
    TransformationKind::motion(Some(map), false, true)
}

const fn swapped(map: GeometricMap) -> TransformationKind {
    TransformationKind::motion(Some(map), true, false)
}

const fn swapped_inverted(map: GeometricMap) -> TransformationKind {
    TransformationKind::motion(Some(map), true, true)
}

/// Every transformation kind exactly once, simplest first
pub const PRIORITY_ORDER: [TransformationKind; 27] = [
    // Repeat / Identity
    TransformationKind::Repeat,
    TransformationKind::IDENTITY,
    // Same roles, rotations
    plain(Rotate90Cw),
    plain(Rotate90Ccw),
    plain(Rotate180),
    inverted(Rotate90Cw),
    inverted(Rotate90Ccw),
    inverted(Rotate180),
    // Same roles, reflections
    plain(FlipHorizontal),
    plain(MirrorVertical),
    inverted(FlipHorizontal),
    inverted(MirrorVertical),
    // Same roles, no geometry
    TransformationKind::motion(None, false, true),
    TransformationKind::Rewind,
    // Swapped roles, same order as above
    swapped(Rotate90Cw),
    swapped(Rotate90Ccw),
    swapped(Rotate180),
    swapped_inverted(Rotate90Cw),
    swapped_inverted(Rotate90Ccw),
    swapped_inverted(Rotate180),
    swapped(FlipHorizontal),
    swapped(MirrorVertical),
    swapped_inverted(FlipHorizontal),
    swapped_inverted(MirrorVertical),
    TransformationKind::motion(None, true, true),
    TransformationKind::motion(None, true, false),
    // Only ever produced by compound analysis
    TransformationKind::Modular,
];

static PRIORITY_RANK: Lazy<HashMap<TransformationKind, usize>> = Lazy::new(|| {
    PRIORITY_ORDER
        .iter()
        .enumerate()
        .map(|(rank, kind)| (*kind, rank))
        .collect()
});

/// Position of a kind in the priority order (0 = simplest)
pub fn priority_rank(kind: TransformationKind) -> usize {
    PRIORITY_RANK.get(&kind).copied().unwrap_or(PRIORITY_ORDER.len())
}

/// The simplest candidate, or None when the pair is unclassifiable
pub fn resolve(candidates: &BTreeSet<TransformationKind>) -> Option<TransformationKind> {
    candidates.iter().copied().min_by_key(|&kind| priority_rank(kind))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::transformation::MotionTransform;
    use std::collections::HashSet;

    #[test]
    fn test_order_covers_every_kind_once() {
        let unique: HashSet<_> = PRIORITY_ORDER.iter().collect();
        assert_eq!(unique.len(), PRIORITY_ORDER.len());
        for t in MotionTransform::all() {
            assert!(unique.contains(&TransformationKind::Motion(t)), "{} missing", t);
        }
        assert!(unique.contains(&TransformationKind::Repeat));
        assert!(unique.contains(&TransformationKind::Rewind));
        assert!(unique.contains(&TransformationKind::Modular));
    }

    #[test]
    fn test_empty_candidates_resolve_to_none() {
        assert_eq!(resolve(&BTreeSet::new()), None);
    }

    #[test]
    fn test_rotation_beats_swap() {
        let candidates: BTreeSet<_> = [
            TransformationKind::motion(None, true, false),
            TransformationKind::geometric(Rotate180),
            TransformationKind::motion(Some(MirrorVertical), true, false),
        ]
        .into_iter()
        .collect();
        assert_eq!(resolve(&candidates), Some(TransformationKind::geometric(Rotate180)));
    }

    #[test]
    fn test_identity_beats_everything_but_repeat() {
        let mut candidates: BTreeSet<_> = MotionTransform::all()
            .into_iter()
            .map(TransformationKind::Motion)
            .collect();
        assert_eq!(resolve(&candidates), Some(TransformationKind::IDENTITY));
        candidates.insert(TransformationKind::Repeat);
        assert_eq!(resolve(&candidates), Some(TransformationKind::Repeat));
    }

    #[test]
    fn test_inverted_rotation_beats_plain_reflection() {
        let candidates: BTreeSet<_> = [plain(MirrorVertical), inverted(Rotate90Ccw)].into_iter().collect();
        assert_eq!(resolve(&candidates), Some(inverted(Rotate90Ccw)));
    }

    #[test]
    fn test_plain_swap_is_last_motion() {
        let swap = TransformationKind::motion(None, true, false);
        let rank = priority_rank(swap);
        for t in MotionTransform::all() {
            let kind = TransformationKind::Motion(t);
            if kind != swap {
                assert!(priority_rank(kind) < rank, "{} should outrank Swap", kind);
            }
        }
    }
}
