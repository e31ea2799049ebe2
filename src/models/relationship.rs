//! Pairwise and compound analysis results

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use crate::models::transformation::TransformationKind;

/// The transformations relating one beat to its partner under a pairing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeatPairRelationship {
    pub key_beat_index: usize,
    pub corresponding_beat_index: usize,
    /// Every transformation that maps the key beat exactly onto its partner
    pub detected_transformations: BTreeSet<TransformationKind>,
    /// The single explanation picked by the priority order, or by a user override
    pub confirmed_transformation: Option<TransformationKind>,
}

impl BeatPairRelationship {
    pub fn new(
        key_beat_index: usize,
        corresponding_beat_index: usize,
        detected_transformations: BTreeSet<TransformationKind>,
    ) -> Self {
        Self {
            key_beat_index,
            corresponding_beat_index,
            detected_transformations,
            confirmed_transformation: None,
        }
    }

    /// No transformation fits this pair
    pub fn is_unclassifiable(&self) -> bool {
        self.detected_transformations.is_empty()
    }

    /// Manual override from the UI. Overrides outside the detected set are
    /// allowed; the user is the final authority on a pair.
    pub fn override_confirmed(&mut self, transformation: TransformationKind) {
        self.confirmed_transformation = Some(transformation);
    }
}

/// A motif that transforms one way within each half and another way across halves
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompoundPattern {
    pub description: String,
    pub quarter_interval_transformations: Vec<TransformationKind>,
    pub half_interval_transformations: Vec<TransformationKind>,
}
