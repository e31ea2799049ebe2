//! Compound (interval-dependent) pattern detection
//!
//! The sequence is cut into quarters. Each half's second quarter is compared
//! with its first quarter, and the second half with the first half. When the
//! quarter-level and half-level answers differ, the motif transforms
//! independently at the two interval sizes.

use std::collections::BTreeSet;
use crate::analysis::detector::detect_range;
use crate::analysis::priority::resolve;
use crate::models::{CompoundPattern, Sequence, TransformationKind};

pub fn analyze(sequence: &Sequence) -> Option<CompoundPattern> {
    let len = sequence.len();
    if len < 4 || len % 4 != 0 {
        return None;
    }
    let quarter = len / 4;
    let half = len / 2;

    let quarter_interval_transformations = vec![
        resolve(&detect_range(sequence, 0..quarter, quarter..half))?,
        resolve(&detect_range(sequence, half..half + quarter, half + quarter..len))?,
    ];
    let half_interval_transformations = vec![resolve(&detect_range(sequence, 0..half, half..len))?];

    let quarter_kinds: BTreeSet<TransformationKind> =
        quarter_interval_transformations.iter().copied().collect();
    let half_kinds: BTreeSet<TransformationKind> = half_interval_transformations.iter().copied().collect();

    if quarter_kinds == half_kinds {
        log::debug!("compound analysis: quarters and halves agree on {}", join(&quarter_kinds));
        return None;
    }

    let description = format!(
        "{} within each half, {} across halves",
        join(&quarter_kinds),
        join(&half_kinds)
    );
    log::debug!("compound pattern: {}", description);

    Some(CompoundPattern {
        description,
        quarter_interval_transformations,
        half_interval_transformations,
    })
}

fn join(kinds: &BTreeSet<TransformationKind>) -> String {
    kinds.iter().map(|k| k.to_string()).collect::<Vec<_>>().join(" / ")
}
