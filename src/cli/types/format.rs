//! Match format and toss decision types.

use std::fmt;

/// International match formats the analytics reports distinguish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchFormat {
    Test,
    Odi,
    T20i,
}

impl MatchFormat {
    /// Parse a format name as the API spells it (case-insensitive).
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_uppercase().as_str() {
            "TEST" => Some(MatchFormat::Test),
            "ODI" => Some(MatchFormat::Odi),
            "T20" | "T20I" => Some(MatchFormat::T20i),
            _ => None,
        }
    }

    /// Canonical spelling, or the trimmed input for formats outside the big three.
    pub fn normalize(raw: &str) -> String {
        Self::parse(raw)
            .map(|f| f.to_string())
            .unwrap_or_else(|| raw.trim().to_string())
    }
}

impl fmt::Display for MatchFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MatchFormat::Test => "Test",
            MatchFormat::Odi => "ODI",
            MatchFormat::T20i => "T20I",
        };
        write!(f, "{}", s)
    }
}

/// What the toss winner chose to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TossDecision {
    Bat,
    Bowl,
}

impl TossDecision {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "bat" | "batting" => Some(TossDecision::Bat),
            "bowl" | "bowling" | "field" | "fielding" => Some(TossDecision::Bowl),
            _ => None,
        }
    }

    pub fn normalize(raw: &str) -> String {
        Self::parse(raw)
            .map(|d| d.to_string())
            .unwrap_or_else(|| raw.trim().to_lowercase())
    }
}

impl fmt::Display for TossDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TossDecision::Bat => write!(f, "bat"),
            TossDecision::Bowl => write!(f, "bowl"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_parse() {
        assert_eq!(MatchFormat::parse("odi"), Some(MatchFormat::Odi));
        assert_eq!(MatchFormat::parse("T20"), Some(MatchFormat::T20i));
        assert_eq!(MatchFormat::parse("TEST"), Some(MatchFormat::Test));
        assert_eq!(MatchFormat::parse("Hundred"), None);
    }

    #[test]
    fn test_format_normalize() {
        assert_eq!(MatchFormat::normalize("t20i"), "T20I");
        assert_eq!(MatchFormat::normalize(" Hundred "), "Hundred");
    }

    #[test]
    fn test_toss_normalize() {
        assert_eq!(TossDecision::normalize("Batting"), "bat");
        assert_eq!(TossDecision::normalize("Fielding"), "bowl");
        assert_eq!(TossDecision::normalize("Unknown"), "unknown");
    }
}
