//! Symmetry analysis pipeline
//!
//! - `pairing`: which beats are compared
//! - `detector`: which transformations fit a pair or a pair of ranges
//! - `priority`: picks the simplest fitting transformation
//! - `family`: collapses inversion twins onto their base
//! - `compound`: interval-dependent motifs
//! - `classifier`: runs the whole pipeline for a sequence

pub mod pairing;
pub mod detector;
pub mod priority;
pub mod family;
pub mod compound;
pub mod classifier;

pub use pairing::PairingStrategy;
pub use detector::{classify_pairs, detect, detect_beats, detect_pairs, detect_range, resolve_pairs};
pub use priority::{priority_rank, resolve, PRIORITY_ORDER};
pub use family::{family_base, group_family};
pub use compound::analyze;
pub use classifier::{classify, classify_designation, classify_sections, components_for, unify, ClassificationReport};
