//! Label synthesis: base word matching, canonical ids and display strings

pub mod base_words;
pub mod designation_map;
pub mod formatter;

pub use base_words::{detect_fragments, match_base_word, BaseWord, BASE_WORDS};
pub use designation_map::{map_to_canonical_id, CanonicalId};
pub use formatter::format_designation;
