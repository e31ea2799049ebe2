//! Display labels for designations

use std::fmt;
use crate::models::designation::{Component, SequenceDesignation};

/// Render a designation:
/// - "Freeform" when there is nothing to say
/// - component labels joined by " + ", Rotated carrying its interval ("Rotated(½)")
/// - the base word last, uppercased in brackets ("Mirrored [ABBA]", or "[ABBA]" alone)
pub fn format_designation(designation: &SequenceDesignation) -> String {
    if designation.is_freeform() {
        return "Freeform".to_string();
    }

    let labels: Vec<String> = designation
        .components
        .iter()
        .map(|component| match (component, designation.rotation_interval) {
            (Component::Rotated, Some(interval)) => format!("{}({})", component.label(), interval.symbol()),
            _ => component.label().to_string(),
        })
        .collect();
    let mut label = labels.join(" + ");

    if let Some(word) = &designation.base_word {
        if !label.is_empty() {
            label.push(' ');
        }
        label.push_str(&format!("[{}]", word.to_uppercase()));
    }

    label
}

impl fmt::Display for SequenceDesignation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_designation(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::designation::{ComponentSet, RotationInterval};

    #[test]
    fn test_freeform() {
        assert_eq!(format_designation(&SequenceDesignation::freeform()), "Freeform");
    }

    #[test]
    fn test_fragment_alone_is_still_freeform() {
        let designation = SequenceDesignation {
            base_word_fragment: Some("AB (from ABAB)".to_string()),
            ..Default::default()
        };
        assert_eq!(format_designation(&designation), "Freeform");
    }

    #[test]
    fn test_rotated_half() {
        let designation = SequenceDesignation {
            components: ComponentSet::new().with(Component::Rotated),
            rotation_interval: Some(RotationInterval::Half),
            ..Default::default()
        };
        assert_eq!(format_designation(&designation), "Rotated(½)");
    }

    #[test]
    fn test_interval_only_marks_rotated() {
        let designation = SequenceDesignation {
            components: ComponentSet::new().with(Component::Swapped).with(Component::Rotated),
            rotation_interval: Some(RotationInterval::Quarter),
            ..Default::default()
        };
        assert_eq!(format_designation(&designation), "Rotated(¼) + Swapped");
    }

    #[test]
    fn test_base_word_alone() {
        let designation = SequenceDesignation {
            base_word: Some("bbbb".to_string()),
            ..Default::default()
        };
        assert_eq!(format_designation(&designation), "[BBBB]");
    }

    #[test]
    fn test_components_and_base_word() {
        let designation = SequenceDesignation {
            components: ComponentSet::new().with(Component::Inverted).with(Component::Mirrored),
            base_word: Some("abba".to_string()),
            ..Default::default()
        };
        assert_eq!(designation.to_string(), "Mirrored + Inverted [ABBA]");
    }
}
