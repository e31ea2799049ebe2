//! Family grouping
//!
//! A family is a base transform together with its motion-inverted twin.
//! Eleven bases have families: the five maps, plain Swap, and the five maps
//! combined with Swap. When every confirmed pair transform of a sequence
//! lies in one family, the sequence is labelled with the family base.

use crate::models::transformation::{MotionTransform, TransformationKind};

/// The non-inverted base of the family `kind` belongs to, if it has one
pub fn family_base(kind: TransformationKind) -> Option<MotionTransform> {
    let base = kind.as_motion()?.with_invert(false);
    (base.map.is_some() || base.swap).then_some(base)
}

/// The shared family base of every transform in the list, or None when the
/// list is empty, mixes families, or contains a kind with no family
pub fn group_family(confirmed: &[TransformationKind]) -> Option<TransformationKind> {
    let (first, rest) = confirmed.split_first()?;
    let base = family_base(*first)?;
    rest.iter()
        .all(|&kind| family_base(kind) == Some(base))
        .then_some(TransformationKind::Motion(base))
}
