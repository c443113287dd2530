//! Core types for the Roster hero/power data service.
//!
//! Defines the fundamental domain types: heroes, powers, the hero-power
//! association with its strength rating, and the per-direction response
//! view models that keep relationship serialization acyclic.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod error;
pub mod id;
pub mod model;
pub mod views;

pub use error::CoreError;
pub use id::{HeroId, HeroPowerId, PowerId};
pub use model::{Description, Hero, HeroPower, Power, Strength};
pub use views::{HeroDetail, HeroPowerDetail, HeroPowerWithPower, HeroSummary, PowerView};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strength_serializes_to_canonical_strings() {
        let json = match serde_json::to_string(&Strength::Strong) {
            Ok(s) => s,
            Err(e) => panic!("serialization failed: {e}"),
        };
        assert_eq!(json, "\"Strong\"");
    }

    #[test]
    fn strength_deserialization_rejects_unknown_variant() {
        assert!(serde_json::from_str::<Strength>("\"Mighty\"").is_err());
    }

    #[test]
    fn ids_serialize_as_plain_integers() {
        let hero = Hero {
            id: HeroId(7),
            name: "Carol Danvers".to_owned(),
            super_name: "Captain Marvel".to_owned(),
        };
        let json = match serde_json::to_value(&hero) {
            Ok(v) => v,
            Err(e) => panic!("serialization failed: {e}"),
        };
        assert_eq!(json["id"], 7, "newtype ids must not add a JSON wrapper");
    }

    #[test]
    fn description_display_matches_inner_text() {
        let description = match Description::new("usable for fixture construction") {
            Ok(d) => d,
            Err(e) => panic!("fixture description invalid: {e}"),
        };
        assert_eq!(description.to_string(), "usable for fixture construction");
        assert_eq!(description.as_str(), "usable for fixture construction");
    }
}
