//! Player role types.

use crate::error::CricError;
use std::fmt;
use std::str::FromStr;

/// Playing role recorded against a player.
///
/// The upstream API spells roles several ways ("Batter", "WK-Batsman",
/// "Bowling Allrounder"); [`FromStr`] folds them into the four canonical
/// roles the analytics reports group by.
///
/// # Examples
///
/// ```rust
/// use cricbuzz_stats::PlayerRole;
///
/// let role: PlayerRole = "WK-Batsman".parse().unwrap();
/// assert_eq!(role, PlayerRole::WicketKeeper);
/// assert_eq!(role.to_string(), "Wicket-keeper");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerRole {
    Batsman,
    Bowler,
    AllRounder,
    WicketKeeper,
}

impl PlayerRole {
    pub const ALL: [PlayerRole; 4] = [
        PlayerRole::Batsman,
        PlayerRole::Bowler,
        PlayerRole::AllRounder,
        PlayerRole::WicketKeeper,
    ];

    /// Canonical spelling of a raw role, or the trimmed input when it is not
    /// a recognized role.
    pub fn normalize(raw: &str) -> String {
        raw.parse::<PlayerRole>()
            .map(|r| r.to_string())
            .unwrap_or_else(|_| raw.trim().to_string())
    }
}

impl fmt::Display for PlayerRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PlayerRole::Batsman => "Batsman",
            PlayerRole::Bowler => "Bowler",
            PlayerRole::AllRounder => "All-rounder",
            PlayerRole::WicketKeeper => "Wicket-keeper",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for PlayerRole {
    type Err = CricError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let folded: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect();

        match folded.as_str() {
            "batsman" | "batter" => Ok(PlayerRole::Batsman),
            "bowler" => Ok(PlayerRole::Bowler),
            "allrounder" | "battingallrounder" | "bowlingallrounder" => Ok(PlayerRole::AllRounder),
            "wicketkeeper" | "wk" | "wkbatsman" | "wkbatter" | "keeper" => {
                Ok(PlayerRole::WicketKeeper)
            }
            _ => Err(CricError::InvalidRole {
                role: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_roundtrip() {
        for role in PlayerRole::ALL {
            assert_eq!(role.to_string().parse::<PlayerRole>().unwrap(), role);
        }
    }

    #[test]
    fn test_api_spellings() {
        assert_eq!("Batter".parse::<PlayerRole>().unwrap(), PlayerRole::Batsman);
        assert_eq!(
            "Bowling Allrounder".parse::<PlayerRole>().unwrap(),
            PlayerRole::AllRounder
        );
        assert_eq!(
            "wk-batter".parse::<PlayerRole>().unwrap(),
            PlayerRole::WicketKeeper
        );
    }

    #[test]
    fn test_invalid_role() {
        let err = "Umpire".parse::<PlayerRole>().unwrap_err();
        assert!(matches!(err, CricError::InvalidRole { role } if role == "Umpire"));
    }

    #[test]
    fn test_normalize_keeps_unknown() {
        assert_eq!(PlayerRole::normalize("Batting Allrounder"), "All-rounder");
        assert_eq!(PlayerRole::normalize(" Captain "), "Captain");
    }
}
