/// Fixed lookup tables for the five geometric grid maps
///
/// Format: table[source.index()] → target location
///
/// Example:
///   Rotate90CW:      n → e,  ne → se
///   MirrorVertical:  e → w,  n → n   (the vertical axis is fixed)
///   FlipHorizontal:  n → s,  e → e   (the horizontal axis is fixed)

use crate::models::grid::GridLocation::{self, *};
use crate::models::transformation::GeometricMap;

const ROTATE_90_CW: [GridLocation; 8] = [East, SouthEast, South, SouthWest, West, NorthWest, North, NorthEast];

const ROTATE_90_CCW: [GridLocation; 8] = [West, NorthWest, North, NorthEast, East, SouthEast, South, SouthWest];

const ROTATE_180: [GridLocation; 8] = [South, SouthWest, West, NorthWest, North, NorthEast, East, SouthEast];

// Left/right exchange across the N-S axis
const MIRROR_VERTICAL: [GridLocation; 8] = [North, NorthWest, West, SouthWest, South, SouthEast, East, NorthEast];

// Top/bottom exchange across the E-W axis
const FLIP_HORIZONTAL: [GridLocation; 8] = [South, SouthEast, East, NorthEast, North, NorthWest, West, SouthWest];

/// The lookup table backing a map
pub fn map_table(map: GeometricMap) -> &'static [GridLocation; 8] {
    match map {
        GeometricMap::Rotate90Cw => &ROTATE_90_CW,
        GeometricMap::Rotate90Ccw => &ROTATE_90_CCW,
        GeometricMap::Rotate180 => &ROTATE_180,
        GeometricMap::MirrorVertical => &MIRROR_VERTICAL,
        GeometricMap::FlipHorizontal => &FLIP_HORIZONTAL,
    }
}

/// Apply a map to a location
pub fn apply_geometric_map(map: GeometricMap, location: GridLocation) -> GridLocation {
    map_table(map)[location.index()]
}

/// The map equal to applying `first` then `second`, or None when the two
/// cancel out (e.g. Rotate90CW then Rotate90CCW)
///
/// Mirror then flip composes to Rotate180; two different reflections always
/// compose to a rotation.
pub fn compose_maps(first: GeometricMap, second: GeometricMap) -> Option<GeometricMap> {
    let composed: Vec<GridLocation> = GridLocation::ALL
        .iter()
        .map(|&loc| apply_geometric_map(second, apply_geometric_map(first, loc)))
        .collect();

    if composed == GridLocation::ALL {
        return None;
    }

    GeometricMap::ALL
        .iter()
        .copied()
        .find(|&map| map_table(map)[..] == composed[..])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_map_is_a_bijection() {
        for map in GeometricMap::ALL {
            let targets: HashSet<GridLocation> = GridLocation::ALL
                .iter()
                .map(|&loc| apply_geometric_map(map, loc))
                .collect();
            assert_eq!(targets.len(), 8, "{} must hit every location once", map);
        }
    }

    #[test]
    fn test_involutions() {
        for map in [GeometricMap::Rotate180, GeometricMap::MirrorVertical, GeometricMap::FlipHorizontal] {
            for loc in GridLocation::ALL {
                assert_eq!(apply_geometric_map(map, apply_geometric_map(map, loc)), loc);
            }
        }
    }

    #[test]
    fn test_quarter_rotations_are_mutual_inverses() {
        for loc in GridLocation::ALL {
            let cw = apply_geometric_map(GeometricMap::Rotate90Cw, loc);
            assert_eq!(apply_geometric_map(GeometricMap::Rotate90Ccw, cw), loc);

            let mut spun = loc;
            for _ in 0..4 {
                spun = apply_geometric_map(GeometricMap::Rotate90Cw, spun);
            }
            assert_eq!(spun, loc);
        }
    }

    #[test]
    fn test_rotations_move_every_location() {
        for map in [GeometricMap::Rotate90Cw, GeometricMap::Rotate90Ccw, GeometricMap::Rotate180] {
            for loc in GridLocation::ALL {
                assert_ne!(apply_geometric_map(map, loc), loc);
            }
        }
    }

    #[test]
    fn test_reflections_fix_only_their_axis() {
        let mirror_fixed: Vec<_> = GridLocation::ALL
            .iter()
            .copied()
            .filter(|&loc| apply_geometric_map(GeometricMap::MirrorVertical, loc) == loc)
            .collect();
        assert_eq!(mirror_fixed, vec![North, South]);

        let flip_fixed: Vec<_> = GridLocation::ALL
            .iter()
            .copied()
            .filter(|&loc| apply_geometric_map(GeometricMap::FlipHorizontal, loc) == loc)
            .collect();
        assert_eq!(flip_fixed, vec![East, West]);
    }

    #[test]
    fn test_specific_entries() {
        assert_eq!(apply_geometric_map(GeometricMap::Rotate90Cw, North), East);
        assert_eq!(apply_geometric_map(GeometricMap::Rotate90Ccw, North), West);
        assert_eq!(apply_geometric_map(GeometricMap::Rotate180, NorthEast), SouthWest);
        assert_eq!(apply_geometric_map(GeometricMap::MirrorVertical, NorthEast), NorthWest);
        assert_eq!(apply_geometric_map(GeometricMap::FlipHorizontal, NorthEast), SouthEast);
    }

    #[test]
    fn test_compose_maps() {
        assert_eq!(
            compose_maps(GeometricMap::MirrorVertical, GeometricMap::FlipHorizontal),
            Some(GeometricMap::Rotate180)
        );
        assert_eq!(
            compose_maps(GeometricMap::Rotate90Cw, GeometricMap::Rotate90Cw),
            Some(GeometricMap::Rotate180)
        );
        assert_eq!(compose_maps(GeometricMap::Rotate90Cw, GeometricMap::Rotate90Ccw), None);
        assert_eq!(compose_maps(GeometricMap::MirrorVertical, GeometricMap::MirrorVertical), None);
    }
}
