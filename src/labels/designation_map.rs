//! Canonical classification ids
//!
//! Component sets are put in canonical (alphabetical) order and matched
//! against a fixed table. Every other non-empty set gets a synthesized
//! `custom_` id, so every subset of the eight components has an id.

use serde::{Serialize, Serializer};
use std::fmt;
use crate::models::designation::{Component, ComponentSet};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CanonicalId {
    StrictRotated,
    StrictMirrored,
    StrictFlipped,
    StrictSwapped,
    StrictInverted,
    StrictRewound,
    StrictRepeated,
    Modular,
    RotatedSwapped,
    RotatedInverted,
    RotatedSwappedInverted,
    MirroredSwapped,
    MirroredInverted,
    MirroredSwappedInverted,
    FlippedSwapped,
    FlippedInverted,
    FlippedSwappedInverted,
    SwappedInverted,
    MirroredRewound,
    RewoundInverted,
    /// `custom_` + canonical component keys joined by `_`
    Custom(String),
}

impl CanonicalId {
    pub fn as_str(&self) -> &str {
        match self {
            CanonicalId::StrictRotated => "strict_rotated",
            CanonicalId::StrictMirrored => "strict_mirrored",
            CanonicalId::StrictFlipped => "strict_flipped",
            CanonicalId::StrictSwapped => "strict_swapped",
            CanonicalId::StrictInverted => "strict_inverted",
            CanonicalId::StrictRewound => "strict_rewound",
            CanonicalId::StrictRepeated => "strict_repeated",
            CanonicalId::Modular => "modular",
            CanonicalId::RotatedSwapped => "rotated_swapped",
            CanonicalId::RotatedInverted => "rotated_inverted",
            CanonicalId::RotatedSwappedInverted => "rotated_swapped_inverted",
            CanonicalId::MirroredSwapped => "mirrored_swapped",
            CanonicalId::MirroredInverted => "mirrored_inverted",
            CanonicalId::MirroredSwappedInverted => "mirrored_swapped_inverted",
            CanonicalId::FlippedSwapped => "flipped_swapped",
            CanonicalId::FlippedInverted => "flipped_inverted",
            CanonicalId::FlippedSwappedInverted => "flipped_swapped_inverted",
            CanonicalId::SwappedInverted => "swapped_inverted",
            CanonicalId::MirroredRewound => "mirrored_rewound",
            CanonicalId::RewoundInverted => "rewound_inverted",
            CanonicalId::Custom(id) => id,
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, CanonicalId::Custom(_))
    }
}

impl fmt::Display for CanonicalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for CanonicalId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Canonical id of a component set, None for the empty set
pub fn map_to_canonical_id(components: &ComponentSet) -> Option<CanonicalId> {
    use Component::*;

    if components.is_empty() {
        return None;
    }

    let sorted = components.canonical();
    let id = match sorted.as_slice() {
        [Rotated] => CanonicalId::StrictRotated,
        [Mirrored] => CanonicalId::StrictMirrored,
        [Flipped] => CanonicalId::StrictFlipped,
        [Swapped] => CanonicalId::StrictSwapped,
        [Inverted] => CanonicalId::StrictInverted,
        [Rewound] => CanonicalId::StrictRewound,
        [Repeated] => CanonicalId::StrictRepeated,
        [Modular] => CanonicalId::Modular,
        [Rotated, Swapped] => CanonicalId::RotatedSwapped,
        [Inverted, Rotated] => CanonicalId::RotatedInverted,
        [Inverted, Rotated, Swapped] => CanonicalId::RotatedSwappedInverted,
        [Mirrored, Swapped] => CanonicalId::MirroredSwapped,
        [Inverted, Mirrored] => CanonicalId::MirroredInverted,
        [Inverted, Mirrored, Swapped] => CanonicalId::MirroredSwappedInverted,
        [Flipped, Swapped] => CanonicalId::FlippedSwapped,
        [Flipped, Inverted] => CanonicalId::FlippedInverted,
        [Flipped, Inverted, Swapped] => CanonicalId::FlippedSwappedInverted,
        [Inverted, Swapped] => CanonicalId::SwappedInverted,
        [Mirrored, Rewound] => CanonicalId::MirroredRewound,
        [Inverted, Rewound] => CanonicalId::RewoundInverted,
        _ => {
            let keys: Vec<&str> = sorted.iter().map(|c| c.key()).collect();
            let id = format!("custom_{}", keys.join("_"));
            log::warn!("unlisted component combination {}, flag for review", id);
            CanonicalId::Custom(id)
        }
    };

    Some(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(components: &[Component]) -> ComponentSet {
        components.iter().copied().collect()
    }

    #[test]
    fn test_empty_set_has_no_id() {
        assert_eq!(map_to_canonical_id(&ComponentSet::new()), None);
    }

    #[test]
    fn test_single_components() {
        assert_eq!(
            map_to_canonical_id(&set(&[Component::Rotated])),
            Some(CanonicalId::StrictRotated)
        );
        assert_eq!(
            map_to_canonical_id(&set(&[Component::Modular])).unwrap().as_str(),
            "modular"
        );
    }

    #[test]
    fn test_lookup_ignores_insertion_order() {
        let a = set(&[Component::Swapped, Component::Inverted, Component::Mirrored]);
        let b = set(&[Component::Mirrored, Component::Swapped, Component::Inverted]);
        assert_eq!(map_to_canonical_id(&a), Some(CanonicalId::MirroredSwappedInverted));
        assert_eq!(map_to_canonical_id(&a), map_to_canonical_id(&b));
    }

    #[test]
    fn test_unlisted_combination_is_custom() {
        let id = map_to_canonical_id(&set(&[Component::Rotated, Component::Swapped, Component::Flipped])).unwrap();
        assert!(id.is_custom());
        assert_eq!(id.as_str(), "custom_flipped_rotated_swapped");
    }

    #[test]
    fn test_every_non_empty_subset_has_an_id() {
        let mut listed = 0;
        for bits in 1u16..256 {
            let components: ComponentSet = Component::ALL
                .iter()
                .enumerate()
                .filter(|(i, _)| bits & (1 << i) != 0)
                .map(|(_, c)| *c)
                .collect();
            let id = map_to_canonical_id(&components).expect("non-empty set");
            if !id.is_custom() {
                listed += 1;
            } else {
                assert!(id.as_str().starts_with("custom_"));
            }
        }
        assert_eq!(listed, 20);
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let json = serde_json::to_string(&CanonicalId::RotatedSwapped).unwrap();
        assert_eq!(json, "\"rotated_swapped\"");
    }
}
