//! Beats and sequences
//!
//! A `Sequence` owns an ordered list of immutable `Beat`s plus the
//! `StartPosition` the performers hold before the first beat.

use serde::{Deserialize, Serialize};
use crate::models::grid::{GridLocation, HandRole, MotionKind, Orientation};

/// Everything one hand role does during a beat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MotionData {
    pub start_loc: GridLocation,
    pub end_loc: GridLocation,
    pub start_ori: Orientation,
    pub end_ori: Orientation,
    pub motion_kind: MotionKind,
}

impl MotionData {
    pub fn new(
        start_loc: GridLocation,
        end_loc: GridLocation,
        start_ori: Orientation,
        end_ori: Orientation,
        motion_kind: MotionKind,
    ) -> Self {
        Self {
            start_loc,
            end_loc,
            start_ori,
            end_ori,
            motion_kind,
        }
    }

    /// The same motion played backwards in time
    ///
    /// Hand path and prop spin both run backwards, so the motion kind is kept
    /// while the start/end boundaries trade places.
    pub fn reversed(&self) -> Self {
        Self {
            start_loc: self.end_loc,
            end_loc: self.start_loc,
            start_ori: self.end_ori,
            end_ori: self.start_ori,
            motion_kind: self.motion_kind,
        }
    }
}

/// One timeslot of a sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Beat {
    /// Letter glyph of the beat, used for base word matching
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub letter: Option<String>,
    pub blue: MotionData,
    pub red: MotionData,
}

impl Beat {
    pub fn new(blue: MotionData, red: MotionData) -> Self {
        Self {
            letter: None,
            blue,
            red,
        }
    }

    pub fn with_letter(mut self, letter: impl Into<String>) -> Self {
        self.letter = Some(letter.into());
        self
    }

    pub fn motion(&self, role: HandRole) -> &MotionData {
        match role {
            HandRole::Blue => &self.blue,
            HandRole::Red => &self.red,
        }
    }

    /// Compare motion data of both roles, ignoring the letter
    pub fn same_motions(&self, other: &Beat) -> bool {
        self.blue == other.blue && self.red == other.red
    }

    /// The beat played backwards in time (letter is dropped)
    pub fn reversed(&self) -> Beat {
        Beat::new(self.blue.reversed(), self.red.reversed())
    }
}

/// Location and facing of one role at rest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RolePlacement {
    pub location: GridLocation,
    pub orientation: Orientation,
}

/// A Beat-like value with no motion kind: where both roles stand before beat 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartPosition {
    pub blue: RolePlacement,
    pub red: RolePlacement,
}

impl StartPosition {
    /// The resting placement a beat starts from
    pub fn of_beat(beat: &Beat) -> Self {
        Self {
            blue: RolePlacement {
                location: beat.blue.start_loc,
                orientation: beat.blue.start_ori,
            },
            red: RolePlacement {
                location: beat.red.start_loc,
                orientation: beat.red.start_ori,
            },
        }
    }
}

/// An ordered list of beats plus the start position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sequence {
    pub start_position: StartPosition,
    pub beats: Vec<Beat>,
}

impl Sequence {
    pub fn new(start_position: StartPosition, beats: Vec<Beat>) -> Self {
        Self { start_position, beats }
    }

    /// Build a sequence whose start position is where the first beat begins.
    /// Returns None for an empty beat list.
    pub fn from_beats(beats: Vec<Beat>) -> Option<Self> {
        let start_position = StartPosition::of_beat(beats.first()?);
        Some(Self { start_position, beats })
    }

    pub fn len(&self) -> usize {
        self.beats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.beats.is_empty()
    }

    pub fn beat(&self, index: usize) -> Option<&Beat> {
        self.beats.get(index)
    }

    /// Concatenated beat letters (beats without a letter contribute nothing)
    pub fn word(&self) -> String {
        self.beats
            .iter()
            .filter_map(|beat| beat.letter.as_deref())
            .collect()
    }

    /// Split into consecutive sections of `section_length` beats.
    /// A trailing partial section is kept.
    pub fn sections(&self, section_length: usize) -> Vec<Sequence> {
        if section_length == 0 {
            return vec![];
        }
        self.beats
            .chunks(section_length)
            .filter_map(|chunk| Sequence::from_beats(chunk.to_vec()))
            .collect()
    }
}
