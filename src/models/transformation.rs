//! Transformation vocabulary
//!
//! A `MotionTransform` is one optional geometric map plus two independent
//! toggles (role swap, motion-kind inversion): 6 × 2 × 2 = 24 values, the
//! all-empty one being Identity. `TransformationKind` adds the kinds that
//! act on sequence segmentation rather than on single beats.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// The five fixed bijections of the 8-point grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GeometricMap {
    Rotate90Cw,
    Rotate90Ccw,
    Rotate180,
    MirrorVertical,
    FlipHorizontal,
}

impl GeometricMap {
    pub const ALL: [GeometricMap; 5] = [
        GeometricMap::Rotate90Cw,
        GeometricMap::Rotate90Ccw,
        GeometricMap::Rotate180,
        GeometricMap::MirrorVertical,
        GeometricMap::FlipHorizontal,
    ];

    pub fn is_rotation(self) -> bool {
        matches!(
            self,
            GeometricMap::Rotate90Cw | GeometricMap::Rotate90Ccw | GeometricMap::Rotate180
        )
    }

    /// Reflections reverse rotational handedness
    pub fn is_reflection(self) -> bool {
        !self.is_rotation()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GeometricMap::Rotate90Cw => "Rotate90CW",
            GeometricMap::Rotate90Ccw => "Rotate90CCW",
            GeometricMap::Rotate180 => "Rotate180",
            GeometricMap::MirrorVertical => "MirrorVertical",
            GeometricMap::FlipHorizontal => "FlipHorizontal",
        }
    }
}

impl fmt::Display for GeometricMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Per-beat transformation: at most one geometric map, plus Swap/Invert flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MotionTransform {
    pub map: Option<GeometricMap>,
    pub swap: bool,
    pub invert: bool,
}

impl MotionTransform {
    pub const IDENTITY: MotionTransform = MotionTransform::new(None, false, false);

    pub const fn new(map: Option<GeometricMap>, swap: bool, invert: bool) -> Self {
        Self { map, swap, invert }
    }

    pub const fn geometric(map: GeometricMap) -> Self {
        Self::new(Some(map), false, false)
    }

    /// All 24 values: Identity, the 20 map-based primitives, and the pure
    /// Swap / Invert / Swap+Invert toggles
    pub fn all() -> Vec<MotionTransform> {
        let maps = std::iter::once(None).chain(GeometricMap::ALL.iter().copied().map(Some));
        let mut all = Vec::with_capacity(24);
        for map in maps {
            for swap in [false, true] {
                for invert in [false, true] {
                    all.push(MotionTransform::new(map, swap, invert));
                }
            }
        }
        all
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    pub fn with_swap(self, swap: bool) -> Self {
        Self { swap, ..self }
    }

    pub fn with_invert(self, invert: bool) -> Self {
        Self { invert, ..self }
    }
}

impl fmt::Display for MotionTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_identity() {
            return write!(f, "Identity");
        }
        let mut parts: Vec<&str> = Vec::with_capacity(3);
        if let Some(map) = self.map {
            parts.push(map.as_str());
        }
        if self.swap {
            parts.push("Swap");
        }
        if self.invert {
            parts.push("Invert");
        }
        write!(f, "{}", parts.join("+"))
    }
}

/// A geometric and/or kinematic operation relating two beats or beat ranges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TransformationKind {
    /// Per-beat transform (Identity included)
    Motion(MotionTransform),
    /// A range reappears verbatim
    Repeat,
    /// A beat or range reappears played backwards
    Rewind,
    /// Sub-motifs transform independently per interval
    Modular,
}

impl TransformationKind {
    pub const IDENTITY: TransformationKind = TransformationKind::Motion(MotionTransform::IDENTITY);

    pub const fn motion(map: Option<GeometricMap>, swap: bool, invert: bool) -> Self {
        TransformationKind::Motion(MotionTransform::new(map, swap, invert))
    }

    pub const fn geometric(map: GeometricMap) -> Self {
        TransformationKind::Motion(MotionTransform::geometric(map))
    }

    pub fn as_motion(&self) -> Option<MotionTransform> {
        match self {
            TransformationKind::Motion(t) => Some(*t),
            _ => None,
        }
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}

impl From<MotionTransform> for TransformationKind {
    fn from(t: MotionTransform) -> Self {
        TransformationKind::Motion(t)
    }
}

impl fmt::Display for TransformationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransformationKind::Motion(t) => write!(f, "{}", t),
            TransformationKind::Repeat => write!(f, "Repeat"),
            TransformationKind::Rewind => write!(f, "Rewind"),
            TransformationKind::Modular => write!(f, "Modular"),
        }
    }
}

impl FromStr for TransformationKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Identity" => return Ok(TransformationKind::IDENTITY),
            "Repeat" => return Ok(TransformationKind::Repeat),
            "Rewind" => return Ok(TransformationKind::Rewind),
            "Modular" => return Ok(TransformationKind::Modular),
            _ => {}
        }

        let mut transform = MotionTransform::IDENTITY;
        for part in s.split('+').map(str::trim) {
            match part {
                "Swap" if !transform.swap => transform.swap = true,
                "Invert" if !transform.invert => transform.invert = true,
                _ => {
                    let map = GeometricMap::ALL
                        .iter()
                        .copied()
                        .find(|m| m.as_str() == part)
                        .ok_or_else(|| format!("Invalid transformation part: '{}' in '{}'", part, s))?;
                    if transform.map.is_some() {
                        return Err(format!("Transformation '{}' has more than one geometric map", s));
                    }
                    transform.map = Some(map);
                }
            }
        }

        if transform.is_identity() {
            return Err(format!("Invalid transformation: '{}'", s));
        }
        Ok(TransformationKind::Motion(transform))
    }
}

// The display form doubles as the wire form so the UI can show it as-is.
impl Serialize for TransformationKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TransformationKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_all_motion_transforms_are_distinct() {
        let all = MotionTransform::all();
        assert_eq!(all.len(), 24);
        let unique: HashSet<_> = all.iter().collect();
        assert_eq!(unique.len(), 24);
        assert_eq!(all[0], MotionTransform::IDENTITY);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(TransformationKind::IDENTITY.to_string(), "Identity");
        assert_eq!(
            TransformationKind::motion(Some(GeometricMap::MirrorVertical), true, true).to_string(),
            "MirrorVertical+Swap+Invert"
        );
        assert_eq!(TransformationKind::motion(None, true, false).to_string(), "Swap");
        assert_eq!(TransformationKind::Rewind.to_string(), "Rewind");
    }

    #[test]
    fn test_parse_accepts_display_form() {
        for t in MotionTransform::all() {
            let kind = TransformationKind::Motion(t);
            assert_eq!(kind.to_string().parse::<TransformationKind>().unwrap(), kind);
        }
        assert_eq!("Repeat".parse::<TransformationKind>().unwrap(), TransformationKind::Repeat);
    }

    #[test]
    fn test_parse_rejects_two_maps() {
        assert!("Rotate180+MirrorVertical".parse::<TransformationKind>().is_err());
        assert!("Swap+Swap".parse::<TransformationKind>().is_err());
        assert!("Spin".parse::<TransformationKind>().is_err());
    }

    #[test]
    fn test_serializes_as_string() {
        let kind = TransformationKind::motion(Some(GeometricMap::Rotate90Cw), false, true);
        assert_eq!(serde_json::to_string(&kind).unwrap(), "\"Rotate90CW+Invert\"");
        let back: TransformationKind = serde_json::from_str("\"Rotate90CW+Invert\"").unwrap();
        assert_eq!(back, kind);
    }
}
