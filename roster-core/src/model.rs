use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::CoreError;
use crate::id::{HeroId, HeroPowerId, PowerId};

/// How strongly a hero wields a power.
///
/// Closed set: anything outside these three variants is rejected at the
/// parse boundary, so an invalid strength is unrepresentable past it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strength {
    /// The hero's signature use of the power.
    Strong,
    /// The hero can barely call on the power.
    Weak,
    /// Unremarkable command of the power.
    Average,
}

impl Strength {
    /// Returns the canonical wire form (`"Strong"`, `"Weak"`, `"Average"`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Strong => "Strong",
            Self::Weak => "Weak",
            Self::Average => "Average",
        }
    }
}

impl FromStr for Strength {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Strong" => Ok(Self::Strong),
            "Weak" => Ok(Self::Weak),
            "Average" => Ok(Self::Average),
            other => Err(CoreError::InvalidStrength { value: other.to_owned() }),
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated power description.
///
/// The 20-character minimum lives in [`Description::new`] and nowhere else;
/// holding a `Description` means the rule already passed. Counts characters,
/// not bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Description(String);

impl Description {
    /// Minimum number of characters a description must contain.
    pub const MIN_CHARS: usize = 20;

    /// Creates a `Description` from any string-like value.
    ///
    /// # Errors
    /// Returns [`CoreError::DescriptionTooShort`] if the value has fewer
    /// than [`Self::MIN_CHARS`] characters.
    pub fn new(value: impl Into<String>) -> Result<Self, CoreError> {
        let value = value.into();
        let len = value.chars().count();
        if len < Self::MIN_CHARS {
            return Err(CoreError::DescriptionTooShort { len });
        }
        Ok(Self(value))
    }

    /// Returns the description text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the wrapper and returns the inner `String`.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Description {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

// Deserialization must not bypass the length rule.
impl<'de> Deserialize<'de> for Description {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}

/// A named character who may hold any number of powers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    /// Unique identifier, assigned by the store.
    pub id: HeroId,
    /// Civilian name (e.g. `"Kamala Khan"`).
    pub name: String,
    /// Hero alias (e.g. `"Ms. Marvel"`).
    pub super_name: String,
}

/// A named ability with a validated textual description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Power {
    /// Unique identifier, assigned by the store.
    pub id: PowerId,
    /// Ability name (e.g. `"super strength"`).
    pub name: String,
    /// What the ability does; at least 20 characters.
    pub description: Description,
}

/// The association fact "this hero has this power at this strength".
///
/// Many hero-powers may reference the same hero or power. Both references
/// must exist at creation time; the store enforces this inside the creating
/// transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroPower {
    /// Unique identifier, assigned by the store.
    pub id: HeroPowerId,
    /// How strongly the hero wields the power.
    pub strength: Strength,
    /// The owning hero.
    pub hero_id: HeroId,
    /// The owning power.
    pub power_id: PowerId,
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn strength_parses_all_members_of_the_closed_set() {
        assert_eq!("Strong".parse::<Strength>().ok(), Some(Strength::Strong));
        assert_eq!("Weak".parse::<Strength>().ok(), Some(Strength::Weak));
        assert_eq!("Average".parse::<Strength>().ok(), Some(Strength::Average));
    }

    #[test]
    fn strength_rejects_values_outside_the_set() {
        assert!("strong".parse::<Strength>().is_err(), "parse is case-sensitive");
        assert!("Mighty".parse::<Strength>().is_err());
        assert!("".parse::<Strength>().is_err());
    }

    #[test]
    fn strength_round_trips_through_as_str() {
        for s in [Strength::Strong, Strength::Weak, Strength::Average] {
            let parsed = match s.as_str().parse::<Strength>() {
                Ok(p) => p,
                Err(e) => panic!("canonical form failed to parse: {e}"),
            };
            assert_eq!(parsed, s);
        }
    }

    #[test]
    fn description_accepts_exactly_twenty_chars() {
        let value = "a".repeat(20);
        assert!(Description::new(value).is_ok());
    }

    #[test]
    fn description_rejects_nineteen_chars() {
        let value = "a".repeat(19);
        let err = match Description::new(value) {
            Err(e) => e,
            Ok(d) => panic!("19-char description must be rejected, got {d:?}"),
        };
        assert!(matches!(err, CoreError::DescriptionTooShort { len: 19 }));
    }

    #[test]
    fn description_counts_characters_not_bytes() {
        // 20 two-byte characters: valid even though chars < bytes.
        let value = "é".repeat(20);
        assert!(value.len() > 20);
        assert!(Description::new(value).is_ok());
    }

    #[test]
    fn description_deserialization_enforces_minimum() {
        let short = serde_json::from_str::<Description>("\"too short\"");
        assert!(short.is_err(), "deserialization must not bypass validation");

        let ok = serde_json::from_str::<Description>("\"a perfectly fine description\"");
        assert!(ok.is_ok());
    }

    proptest! {
        #[test]
        fn description_length_rule_holds_for_arbitrary_strings(s in ".{0,40}") {
            let expected_ok = s.chars().count() >= Description::MIN_CHARS;
            prop_assert_eq!(Description::new(s).is_ok(), expected_ok);
        }

        #[test]
        fn strength_rejects_arbitrary_non_members(s in "[a-zA-Z]{0,12}") {
            prop_assume!(s != "Strong" && s != "Weak" && s != "Average");
            prop_assert!(s.parse::<Strength>().is_err());
        }
    }
}
