//! Motion algebra: a geometric map composed with the Swap and Invert toggles
//!
//! Applying a transform to one role of a beat:
//! 1. Swap picks which role's data is read
//! 2. the geometric map moves both grid locations (reflections also exchange
//!    Clock/Counter facings)
//! 3. Invert flips Pro ↔ Anti

use crate::models::beat::{Beat, MotionData};
use crate::models::grid::HandRole;
use crate::models::transformation::MotionTransform;
use crate::transforms::grid_maps::apply_geometric_map;

/// The motion `role` would perform in the transformed beat
pub fn apply_motion_transform(transform: MotionTransform, beat: &Beat, role: HandRole) -> MotionData {
    let source_role = if transform.swap { role.other() } else { role };
    let mut motion = *beat.motion(source_role);

    if let Some(map) = transform.map {
        motion.start_loc = apply_geometric_map(map, motion.start_loc);
        motion.end_loc = apply_geometric_map(map, motion.end_loc);
        if map.is_reflection() {
            motion.start_ori = motion.start_ori.reflected();
            motion.end_ori = motion.end_ori.reflected();
        }
    }

    if transform.invert {
        motion.motion_kind = motion.motion_kind.inverted();
    }

    motion
}

/// Transform both roles of a beat. The letter is not carried over since a
/// transformed beat generally spells a different letter.
pub fn apply_to_beat(transform: MotionTransform, beat: &Beat) -> Beat {
    Beat::new(
        apply_motion_transform(transform, beat, HandRole::Blue),
        apply_motion_transform(transform, beat, HandRole::Red),
    )
}

/// True when `transform` maps `source` exactly onto `target` for both roles
pub fn maps_onto(transform: MotionTransform, source: &Beat, target: &Beat) -> bool {
    HandRole::ALL
        .iter()
        .all(|&role| apply_motion_transform(transform, source, role) == *target.motion(role))
}
