//! Player classes
//!
//! The four playable characters. Everything downstream is class-keyed, so
//! unknown class tokens are rejected instead of defaulted.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::LoadoutError;

/// A playable character class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PlayerClass {
    #[serde(rename = "IRONCLAD")]
    Ironclad,
    #[serde(rename = "THE_SILENT")]
    Silent,
    #[serde(rename = "DEFECT")]
    Defect,
    #[serde(rename = "WATCHER")]
    Watcher,
}

/// Card color of a class pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardColor {
    Red,
    Green,
    Blue,
    Purple,
    Colorless,
}

impl PlayerClass {
    /// Every recognized class, in the host game's order
    pub const ALL: [PlayerClass; 4] = [
        PlayerClass::Ironclad,
        PlayerClass::Silent,
        PlayerClass::Defect,
        PlayerClass::Watcher,
    ];

    /// Token used by the host game and the persistence layer
    pub fn as_str(&self) -> &'static str {
        match self {
            PlayerClass::Ironclad => "IRONCLAD",
            PlayerClass::Silent => "THE_SILENT",
            PlayerClass::Defect => "DEFECT",
            PlayerClass::Watcher => "WATCHER",
        }
    }

    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            PlayerClass::Ironclad => "Ironclad",
            PlayerClass::Silent => "Silent",
            PlayerClass::Defect => "Defect",
            PlayerClass::Watcher => "Watcher",
        }
    }

    /// Suffix the host game puts on this class's basic Strike/Defend IDs
    pub fn basic_suffix(&self) -> &'static str {
        match self {
            PlayerClass::Ironclad => "_R",
            PlayerClass::Silent => "_G",
            PlayerClass::Defect => "_B",
            PlayerClass::Watcher => "_P",
        }
    }

    /// ID of this class's basic Strike
    pub fn strike_id(&self) -> String {
        format!("Strike{}", self.basic_suffix())
    }
}

impl fmt::Display for PlayerClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlayerClass {
    type Err = LoadoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PlayerClass::ALL
            .iter()
            .copied()
            .find(|class| class.as_str() == s)
            .ok_or_else(|| LoadoutError::InvalidClass(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_tokens() {
        for class in PlayerClass::ALL {
            assert_eq!(class.as_str().parse::<PlayerClass>().unwrap(), class);
        }
    }

    #[test]
    fn test_parse_rejects_unknown_token() {
        let err = "NECROBINDER".parse::<PlayerClass>().unwrap_err();
        assert!(matches!(err, LoadoutError::InvalidClass(ref s) if s == "NECROBINDER"));

        // Tokens are case-sensitive
        assert!("ironclad".parse::<PlayerClass>().is_err());
        assert!("SILENT".parse::<PlayerClass>().is_err());
    }

    #[test]
    fn test_strike_ids() {
        assert_eq!(PlayerClass::Ironclad.strike_id(), "Strike_R");
        assert_eq!(PlayerClass::Watcher.strike_id(), "Strike_P");
    }
}
