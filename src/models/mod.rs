//! Models module for the sequence symmetry engine
//!
//! This module contains the data model shared by every stage of the
//! classification pipeline: beats and sequences, the transformation
//! vocabulary, and the classification results.

pub mod grid;
pub mod beat;
pub mod transformation;
pub mod relationship;
pub mod designation;

// Re-export commonly used types
pub use grid::{GridLocation, HandRole, MotionKind, Orientation};
pub use beat::{Beat, MotionData, RolePlacement, Sequence, StartPosition};
pub use transformation::{GeometricMap, MotionTransform, TransformationKind};
pub use relationship::{BeatPairRelationship, CompoundPattern};
pub use designation::{Component, ComponentSet, RotationInterval, SequenceDesignation};
