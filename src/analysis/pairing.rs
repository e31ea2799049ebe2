//! Pairing strategies: which beat is compared with which

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PairingStrategy {
    /// i ↔ n−1−i
    Palindromic,
    /// i ↔ i+n/2
    HalfSplit,
    /// i ↔ i+n/4, chaining every quarter onto the next
    QuarterSplit,
}

impl PairingStrategy {
    /// Index pairs for a sequence of `len` beats. Empty when the strategy
    /// does not divide the sequence evenly.
    pub fn pairs(self, len: usize) -> Vec<(usize, usize)> {
        match self {
            PairingStrategy::Palindromic => (0..len / 2).map(|i| (i, len - 1 - i)).collect(),
            PairingStrategy::HalfSplit => {
                if len < 2 || len % 2 != 0 {
                    return vec![];
                }
                let half = len / 2;
                (0..half).map(|i| (i, i + half)).collect()
            }
            PairingStrategy::QuarterSplit => {
                if len < 4 || len % 4 != 0 {
                    return vec![];
                }
                let quarter = len / 4;
                (0..len - quarter).map(|i| (i, i + quarter)).collect()
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PairingStrategy::Palindromic => "palindromic",
            PairingStrategy::HalfSplit => "half_split",
            PairingStrategy::QuarterSplit => "quarter_split",
        }
    }
}

impl fmt::Display for PairingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PairingStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "palindromic" => Ok(PairingStrategy::Palindromic),
            "half_split" | "halfsplit" | "half" => Ok(PairingStrategy::HalfSplit),
            "quarter_split" | "quartersplit" | "quarter" => Ok(PairingStrategy::QuarterSplit),
            _ => Err(format!(
                "Invalid pairing strategy: '{}'. Expected palindromic, half_split or quarter_split",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palindromic_pairs() {
        assert_eq!(PairingStrategy::Palindromic.pairs(4), vec![(0, 3), (1, 2)]);
        // odd middle beat stays unpaired
        assert_eq!(PairingStrategy::Palindromic.pairs(5), vec![(0, 4), (1, 3)]);
        assert!(PairingStrategy::Palindromic.pairs(1).is_empty());
    }

    #[test]
    fn test_half_split_pairs() {
        assert_eq!(PairingStrategy::HalfSplit.pairs(4), vec![(0, 2), (1, 3)]);
        assert!(PairingStrategy::HalfSplit.pairs(5).is_empty());
        assert!(PairingStrategy::HalfSplit.pairs(0).is_empty());
    }

    #[test]
    fn test_quarter_split_pairs() {
        assert_eq!(
            PairingStrategy::QuarterSplit.pairs(8),
            vec![(0, 2), (1, 3), (2, 4), (3, 5), (4, 6), (5, 7)]
        );
        assert!(PairingStrategy::QuarterSplit.pairs(6).is_empty());
    }

    #[test]
    fn test_from_str() {
        assert_eq!("half-split".parse::<PairingStrategy>().unwrap(), PairingStrategy::HalfSplit);
        assert_eq!("Palindromic".parse::<PairingStrategy>().unwrap(), PairingStrategy::Palindromic);
        assert!("diagonal".parse::<PairingStrategy>().is_err());
    }
}
