//! Closed value domains of a beat: grid locations, hand roles, motion kinds
//! and orientations.
//!
//! GridLocation ordinals run clockwise from North, so every geometric map
//! can be expressed as an 8-entry table indexed by `GridLocation::index`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the 8 compass points of the motion grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GridLocation {
    #[serde(rename = "n")]
    North,
    #[serde(rename = "ne")]
    NorthEast,
    #[serde(rename = "e")]
    East,
    #[serde(rename = "se")]
    SouthEast,
    #[serde(rename = "s")]
    South,
    #[serde(rename = "sw")]
    SouthWest,
    #[serde(rename = "w")]
    West,
    #[serde(rename = "nw")]
    NorthWest,
}

impl GridLocation {
    /// All locations in ordinal (clockwise) order
    pub const ALL: [GridLocation; 8] = [
        GridLocation::North,
        GridLocation::NorthEast,
        GridLocation::East,
        GridLocation::SouthEast,
        GridLocation::South,
        GridLocation::SouthWest,
        GridLocation::West,
        GridLocation::NorthWest,
    ];

    /// Position on the circle, 0 = North, counting clockwise in 45° steps
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GridLocation::North => "n",
            GridLocation::NorthEast => "ne",
            GridLocation::East => "e",
            GridLocation::SouthEast => "se",
            GridLocation::South => "s",
            GridLocation::SouthWest => "sw",
            GridLocation::West => "w",
            GridLocation::NorthWest => "nw",
        }
    }
}

impl fmt::Display for GridLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for GridLocation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "n" | "north" => Ok(GridLocation::North),
            "ne" | "northeast" => Ok(GridLocation::NorthEast),
            "e" | "east" => Ok(GridLocation::East),
            "se" | "southeast" => Ok(GridLocation::SouthEast),
            "s" | "south" => Ok(GridLocation::South),
            "sw" | "southwest" => Ok(GridLocation::SouthWest),
            "w" | "west" => Ok(GridLocation::West),
            "nw" | "northwest" => Ok(GridLocation::NorthWest),
            _ => Err(format!("Invalid grid location: '{}'. Expected one of: n, ne, e, se, s, sw, w, nw", s)),
        }
    }
}

/// Which of the two independent performer/prop tracks a motion belongs to.
/// Blue is role A, Red is role B.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HandRole {
    Blue,
    Red,
}

impl HandRole {
    pub const ALL: [HandRole; 2] = [HandRole::Blue, HandRole::Red];

    /// The opposite role (used by the Swap toggle)
    pub fn other(self) -> HandRole {
        match self {
            HandRole::Blue => HandRole::Red,
            HandRole::Red => HandRole::Blue,
        }
    }
}

impl fmt::Display for HandRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandRole::Blue => write!(f, "blue"),
            HandRole::Red => write!(f, "red"),
        }
    }
}

/// Rotational handedness class of a motion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MotionKind {
    Pro,
    Anti,
}

impl MotionKind {
    /// Pro ↔ Anti
    pub fn inverted(self) -> MotionKind {
        match self {
            MotionKind::Pro => MotionKind::Anti,
            MotionKind::Anti => MotionKind::Pro,
        }
    }
}

impl FromStr for MotionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pro" => Ok(MotionKind::Pro),
            "anti" => Ok(MotionKind::Anti),
            _ => Err(format!("Invalid motion kind: '{}'. Expected pro or anti", s)),
        }
    }
}

/// Prop facing at a beat boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    In,
    Out,
    Clock,
    Counter,
}

impl Orientation {
    /// Orientation seen through a reflection: rotational facings change hands,
    /// radial facings stay put.
    pub fn reflected(self) -> Orientation {
        match self {
            Orientation::Clock => Orientation::Counter,
            Orientation::Counter => Orientation::Clock,
            radial => radial,
        }
    }
}

impl FromStr for Orientation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "in" => Ok(Orientation::In),
            "out" => Ok(Orientation::Out),
            "clock" => Ok(Orientation::Clock),
            "counter" => Ok(Orientation::Counter),
            _ => Err(format!("Invalid orientation: '{}'. Expected in, out, clock or counter", s)),
        }
    }
}
