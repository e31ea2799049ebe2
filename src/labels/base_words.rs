//! Base word dictionary and fragment matching
//!
//! Sixteen fixed 4-beat root patterns. Sequences whose letters spell a base
//! word (once or repeated) carry it in their label; otherwise 2-letter
//! fragments are matched against the dictionary.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BaseWord {
    pub id: &'static str,
    pub pattern: &'static str,
}

impl BaseWord {
    pub const BEAT_COUNT: usize = 4;

    const fn new(id: &'static str, pattern: &'static str) -> Self {
        Self { id, pattern }
    }
}

pub const BASE_WORDS: [BaseWord; 16] = [
    BaseWord::new("aaaa", "AAAA"),
    BaseWord::new("bbbb", "BBBB"),
    BaseWord::new("cccc", "CCCC"),
    BaseWord::new("dddd", "DDDD"),
    BaseWord::new("abab", "ABAB"),
    BaseWord::new("baba", "BABA"),
    BaseWord::new("cdcd", "CDCD"),
    BaseWord::new("dcdc", "DCDC"),
    BaseWord::new("abba", "ABBA"),
    BaseWord::new("baab", "BAAB"),
    BaseWord::new("aabb", "AABB"),
    BaseWord::new("bbaa", "BBAA"),
    BaseWord::new("abcd", "ABCD"),
    BaseWord::new("dcba", "DCBA"),
    BaseWord::new("acac", "ACAC"),
    BaseWord::new("bdbd", "BDBD"),
];

/// "XY (from WORD)" for every 2-letter window at an even offset that occurs
/// inside some base word. Case-insensitive.
pub fn detect_fragments(sequence_letters: &str) -> Vec<String> {
    let letters: Vec<char> = sequence_letters.to_uppercase().chars().collect();

    letters
        .chunks_exact(2)
        .filter_map(|pair| {
            let fragment: String = pair.iter().collect();
            BASE_WORDS
                .iter()
                .find(|word| word.pattern.contains(fragment.as_str()))
                .map(|word| format!("{} (from {})", fragment, word.pattern))
        })
        .collect()
}

/// The base word the letters spell, once or repeated back to back
pub fn match_base_word(sequence_letters: &str) -> Option<&'static BaseWord> {
    let letters = sequence_letters.to_uppercase();
    let count = letters.chars().count();
    if count == 0 || count % BaseWord::BEAT_COUNT != 0 {
        return None;
    }

    BASE_WORDS
        .iter()
        .find(|word| letters == word.pattern.repeat(count / BaseWord::BEAT_COUNT))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dictionary_shape() {
        assert_eq!(BASE_WORDS.len(), 16);
        for word in BASE_WORDS {
            assert_eq!(word.pattern.chars().count(), BaseWord::BEAT_COUNT);
            assert_eq!(word.id, word.pattern.to_lowercase());
        }
    }

    #[test]
    fn test_fragments_at_even_offsets() {
        // windows: "AB", "CA"; "BC" at offset 1 is never considered
        let fragments = detect_fragments("abca");
        assert_eq!(fragments, vec!["AB (from ABAB)".to_string(), "CA (from ACAC)".to_string()]);
    }

    #[test]
    fn test_unmatched_fragments_are_skipped() {
        assert_eq!(detect_fragments("XYAA"), vec!["AA (from AAAA)".to_string()]);
        assert!(detect_fragments("Q").is_empty());
        assert!(detect_fragments("").is_empty());
    }

    #[test]
    fn test_match_base_word() {
        assert_eq!(match_base_word("bbbb").map(|w| w.id), Some("bbbb"));
        assert_eq!(match_base_word("ABBAABBA").map(|w| w.id), Some("abba"));
        assert!(match_base_word("ABB").is_none());
        assert!(match_base_word("ABBAABAB").is_none());
        assert!(match_base_word("").is_none());
    }
}
