//! End-to-end sequence classification
//!
//! Runs the configured passes in order (pairing passes detect + resolve
//! every pair and require one uniform answer or one family; the compound
//! pass looks for interval-dependent motifs). The first pass that produces
//! a transformation decides the components; base word matching is added on
//! top, and the designation is turned into a canonical id and a label.

use serde::Serialize;
use crate::analysis::compound::analyze;
use crate::analysis::detector::classify_pairs;
use crate::analysis::family::group_family;
use crate::config::{ClassifierPass, ClassifierSettings};
use crate::labels::base_words::{detect_fragments, match_base_word};
use crate::labels::designation_map::{map_to_canonical_id, CanonicalId};
use crate::labels::formatter::format_designation;
use crate::models::{
    BeatPairRelationship, Component, ComponentSet, CompoundPattern, GeometricMap, RotationInterval,
    Sequence, SequenceDesignation, TransformationKind,
};

/// Everything the persistence and UI collaborators need for one sequence
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassificationReport {
    pub designation: SequenceDesignation,
    pub canonical_id: Option<CanonicalId>,
    pub label: String,
    /// The pass that produced the designation, None when nothing matched
    pub pass: Option<ClassifierPass>,
    pub transformation: Option<TransformationKind>,
    /// Pair relationships of the deciding pairing pass
    pub pairs: Vec<BeatPairRelationship>,
    pub compound: Option<CompoundPattern>,
}

struct PassOutcome {
    pass: ClassifierPass,
    transformation: TransformationKind,
    pairs: Vec<BeatPairRelationship>,
    compound: Option<CompoundPattern>,
}

/// The single transformation explaining every pair, if there is one:
/// either all confirmed transforms agree, or they share one family
pub fn unify(relationships: &[BeatPairRelationship]) -> Option<TransformationKind> {
    let confirmed: Vec<TransformationKind> = relationships
        .iter()
        .map(|r| r.confirmed_transformation)
        .collect::<Option<Vec<_>>>()?;
    let (first, rest) = confirmed.split_first()?;

    if rest.iter().all(|kind| kind == first) {
        return Some(*first);
    }
    group_family(&confirmed)
}

/// Components (and rotation step) named by a transformation
pub fn components_for(kind: TransformationKind) -> (ComponentSet, Option<RotationInterval>) {
    let mut components = ComponentSet::new();
    let mut interval = None;

    match kind {
        TransformationKind::Motion(t) if t.is_identity() => components.insert(Component::Repeated),
        TransformationKind::Motion(t) => {
            match t.map {
                Some(GeometricMap::Rotate180) => {
                    components.insert(Component::Rotated);
                    interval = Some(RotationInterval::Half);
                }
                Some(GeometricMap::Rotate90Cw) | Some(GeometricMap::Rotate90Ccw) => {
                    components.insert(Component::Rotated);
                    interval = Some(RotationInterval::Quarter);
                }
                Some(GeometricMap::MirrorVertical) => components.insert(Component::Mirrored),
                Some(GeometricMap::FlipHorizontal) => components.insert(Component::Flipped),
                None => {}
            }
            if t.swap {
                components.insert(Component::Swapped);
            }
            if t.invert {
                components.insert(Component::Inverted);
            }
        }
        TransformationKind::Repeat => components.insert(Component::Repeated),
        TransformationKind::Rewind => components.insert(Component::Rewound),
        TransformationKind::Modular => components.insert(Component::Modular),
    }

    (components, interval)
}

fn run_passes(sequence: &Sequence, settings: &ClassifierSettings) -> Option<PassOutcome> {
    for &pass in &settings.passes {
        match pass.pairing() {
            Some(strategy) => {
                let pairs = classify_pairs(sequence, strategy);
                if let Some(transformation) = unify(&pairs) {
                    log::debug!("{:?} pass matched {} over {} pairs", pass, transformation, pairs.len());
                    return Some(PassOutcome {
                        pass,
                        transformation,
                        pairs,
                        compound: None,
                    });
                }
                log::debug!("{:?} pass found no uniform transformation", pass);
            }
            None => {
                if let Some(pattern) = analyze(sequence) {
                    return Some(PassOutcome {
                        pass,
                        transformation: TransformationKind::Modular,
                        pairs: vec![],
                        compound: Some(pattern),
                    });
                }
            }
        }
    }
    None
}

/// Classify a whole sequence
pub fn classify(sequence: &Sequence, settings: &ClassifierSettings) -> ClassificationReport {
    let outcome = run_passes(sequence, settings);

    let mut designation = SequenceDesignation::freeform();
    if let Some(outcome) = &outcome {
        let (components, interval) = components_for(outcome.transformation);
        designation.components = components;
        designation.rotation_interval = interval;
    }

    if settings.match_base_words {
        let word = sequence.word();
        match match_base_word(&word) {
            Some(base_word) => designation.base_word = Some(base_word.id.to_string()),
            None => designation.base_word_fragment = detect_fragments(&word).into_iter().next(),
        }
    }

    let canonical_id = map_to_canonical_id(&designation.components);
    let label = format_designation(&designation);
    log::info!("classified {} beats as {}", sequence.len(), label);

    match outcome {
        Some(outcome) => ClassificationReport {
            designation,
            canonical_id,
            label,
            pass: Some(outcome.pass),
            transformation: Some(outcome.transformation),
            pairs: outcome.pairs,
            compound: outcome.compound,
        },
        None => ClassificationReport {
            designation,
            canonical_id,
            label,
            pass: None,
            transformation: None,
            pairs: vec![],
            compound: None,
        },
    }
}

/// Classify with default settings and keep only the designation
pub fn classify_designation(sequence: &Sequence) -> SequenceDesignation {
    classify(sequence, &ClassifierSettings::default()).designation
}

/// Classify consecutive sections of `section_length` beats independently
pub fn classify_sections(
    sequence: &Sequence,
    section_length: usize,
    settings: &ClassifierSettings,
) -> Vec<ClassificationReport> {
    sequence
        .sections(section_length)
        .iter()
        .map(|section| classify(section, settings))
        .collect()
}
