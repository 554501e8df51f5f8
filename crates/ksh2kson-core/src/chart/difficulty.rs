use serde::{Deserialize, Serialize};
use strum::EnumString;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString)]
#[repr(u8)]
pub enum Difficulty {
    #[strum(serialize = "light")]
    Light = 0,
    #[strum(serialize = "challenge")]
    Challenge = 1,
    #[strum(serialize = "extended")]
    Extended = 2,
    #[strum(serialize = "infinite")]
    Infinite = 3,
}

impl Difficulty {
    /// Classify a header `difficulty` value.
    ///
    /// Anything other than `light`, `challenge` or `extended` lands in the
    /// fourth slot.
    pub fn classify(value: &str) -> Self {
        value.parse().unwrap_or_else(|_| {
            debug!("Unrecognized difficulty {:?}, using Infinite", value);
            Self::Infinite
        })
    }

    /// Display name (e.g., "Challenge")
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Challenge => "Challenge",
            Self::Extended => "Extended",
            Self::Infinite => "Infinite",
        }
    }

    pub fn short_name(&self) -> &'static str {
        match self {
            Self::Light => "LT",
            Self::Challenge => "CH",
            Self::Extended => "EX",
            Self::Infinite => "IN",
        }
    }

    pub fn index(&self) -> u8 {
        *self as u8
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_known_values() {
        assert_eq!(Difficulty::classify("light"), Difficulty::Light);
        assert_eq!(Difficulty::classify("challenge"), Difficulty::Challenge);
        assert_eq!(Difficulty::classify("extended"), Difficulty::Extended);
        assert_eq!(Difficulty::classify("infinite"), Difficulty::Infinite);
    }

    #[test]
    fn test_classify_falls_back_to_infinite() {
        assert_eq!(Difficulty::classify("maximum"), Difficulty::Infinite);
        assert_eq!(Difficulty::classify(""), Difficulty::Infinite);
        assert_eq!(Difficulty::classify("Light"), Difficulty::Infinite);
    }

    #[test]
    fn test_names_and_index() {
        let d = Difficulty::Extended;
        assert_eq!(d.display_name(), "Extended");
        assert_eq!(d.short_name(), "EX");
        assert_eq!(d.index(), 2);
    }
}
