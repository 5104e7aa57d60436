use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Named assignment of engine codes to all three slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Preset {
    #[default]
    General,
    Privacy,
    Academic,
}

impl Preset {
    pub const ALL: [Preset; 3] = [Self::General, Self::Privacy, Self::Academic];

    /// Engine codes for slots 1, 2 and 3.
    pub fn engines(self) -> [&'static str; 3] {
        match self {
            Self::General => ["google", "bing", "duckduckgo"],
            Self::Privacy => ["startpage", "brave", "mojeek"],
            Self::Academic => ["scholar", "pubmed", "wolfram"],
        }
    }

    /// Identifier used by preset buttons and configuration.
    pub fn name(self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Privacy => "privacy",
            Self::Academic => "academic",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::General => "General",
            Self::Privacy => "Privacy",
            Self::Academic => "Academic",
        }
    }
}

impl FromStr for Preset {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| CoreError::UnknownPreset(s.to_string()))
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::EngineRegistry;

    #[test]
    fn parse_known_names() {
        assert_eq!("privacy".parse::<Preset>().unwrap(), Preset::Privacy);
        for p in Preset::ALL {
            assert_eq!(p.name().parse::<Preset>().unwrap(), p);
        }
    }

    #[test]
    fn parse_unknown_name() {
        assert_eq!(
            "shopping".parse::<Preset>(),
            Err(CoreError::UnknownPreset("shopping".into()))
        );
        // Names are case-sensitive.
        assert!("General".parse::<Preset>().is_err());
    }

    #[test]
    fn every_preset_engine_is_registered() {
        let reg = EngineRegistry::builtin();
        for p in Preset::ALL {
            for code in p.engines() {
                assert!(reg.contains(code), "{p}: {code}");
            }
        }
    }
}
