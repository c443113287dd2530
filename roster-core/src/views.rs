//! Response view models.
//!
//! Heroes and powers reference each other through hero-powers, so a naive
//! "serialize with all relations" walk would never terminate. Each view type
//! here fixes one direction and omits the reverse edge, bounding nesting to
//! exactly one level.

use serde::Serialize;

use crate::id::{HeroId, HeroPowerId, PowerId};
use crate::model::{Hero, HeroPower, Power, Strength};

/// Shallow hero payload: no association collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeroSummary {
    pub id: HeroId,
    pub name: String,
    pub super_name: String,
}

impl From<Hero> for HeroSummary {
    fn from(hero: Hero) -> Self {
        Self { id: hero.id, name: hero.name, super_name: hero.super_name }
    }
}

/// Power payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PowerView {
    pub id: PowerId,
    pub name: String,
    pub description: String,
}

impl From<Power> for PowerView {
    fn from(power: Power) -> Self {
        Self {
            id: power.id,
            name: power.name,
            description: power.description.into_inner(),
        }
    }
}

/// An association as seen from its hero: nests the power, never the hero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeroPowerWithPower {
    pub id: HeroPowerId,
    pub hero_id: HeroId,
    pub power_id: PowerId,
    pub strength: Strength,
    pub power: PowerView,
}

impl From<(HeroPower, Power)> for HeroPowerWithPower {
    fn from((hero_power, power): (HeroPower, Power)) -> Self {
        Self {
            id: hero_power.id,
            hero_id: hero_power.hero_id,
            power_id: hero_power.power_id,
            strength: hero_power.strength,
            power: PowerView::from(power),
        }
    }
}

/// Deep hero payload: the hero plus its associations, powers nested one
/// level down.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeroDetail {
    pub id: HeroId,
    pub name: String,
    pub super_name: String,
    pub hero_powers: Vec<HeroPowerWithPower>,
}

impl HeroDetail {
    /// Assembles the deep payload from a hero and its association rows.
    #[must_use]
    pub fn new(hero: Hero, associations: Vec<(HeroPower, Power)>) -> Self {
        Self {
            id: hero.id,
            name: hero.name,
            super_name: hero.super_name,
            hero_powers: associations.into_iter().map(HeroPowerWithPower::from).collect(),
        }
    }
}

/// An association with both ends nested, each shallow.
///
/// Returned from hero-power creation. The nested hero is a [`HeroSummary`],
/// so the payload cannot recurse back into hero-powers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeroPowerDetail {
    pub id: HeroPowerId,
    pub hero_id: HeroId,
    pub power_id: PowerId,
    pub strength: Strength,
    pub hero: HeroSummary,
    pub power: PowerView,
}

impl From<(HeroPower, Hero, Power)> for HeroPowerDetail {
    fn from((hero_power, hero, power): (HeroPower, Hero, Power)) -> Self {
        Self {
            id: hero_power.id,
            hero_id: hero_power.hero_id,
            power_id: hero_power.power_id,
            strength: hero_power.strength,
            hero: HeroSummary::from(hero),
            power: PowerView::from(power),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Description;

    fn sample_hero() -> Hero {
        Hero {
            id: HeroId(1),
            name: "Kamala Khan".to_owned(),
            super_name: "Ms. Marvel".to_owned(),
        }
    }

    fn sample_power() -> Power {
        let description = match Description::new("gives the wielder the ability to fly") {
            Ok(d) => d,
            Err(e) => panic!("fixture description invalid: {e}"),
        };
        Power { id: PowerId(2), name: "flight".to_owned(), description }
    }

    fn sample_hero_power() -> HeroPower {
        HeroPower {
            id: HeroPowerId(3),
            strength: Strength::Average,
            hero_id: HeroId(1),
            power_id: PowerId(2),
        }
    }

    fn to_json<T: Serialize>(value: &T) -> serde_json::Value {
        match serde_json::to_value(value) {
            Ok(v) => v,
            Err(e) => panic!("serialization failed: {e}"),
        }
    }

    #[test]
    fn hero_summary_has_no_hero_powers_key() {
        let json = to_json(&HeroSummary::from(sample_hero()));
        assert_eq!(json["id"], 1);
        assert_eq!(json["name"], "Kamala Khan");
        assert_eq!(json["super_name"], "Ms. Marvel");
        assert!(json.get("hero_powers").is_none());
    }

    #[test]
    fn hero_detail_nests_power_but_never_hero() {
        let detail = HeroDetail::new(
            sample_hero(),
            vec![(sample_hero_power(), sample_power())],
        );
        let json = to_json(&detail);

        let entries = match json["hero_powers"].as_array() {
            Some(a) => a,
            None => panic!("hero_powers must be an array"),
        };
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0]["strength"], "Average");
        assert_eq!(entries[0]["power"]["name"], "flight");
        assert!(
            entries[0].get("hero").is_none(),
            "association under a hero must not nest the hero back"
        );
    }

    #[test]
    fn hero_power_detail_nested_hero_is_shallow() {
        let detail =
            HeroPowerDetail::from((sample_hero_power(), sample_hero(), sample_power()));
        let json = to_json(&detail);

        assert_eq!(json["hero_id"], 1);
        assert_eq!(json["power_id"], 2);
        assert_eq!(json["strength"], "Average");
        assert_eq!(json["hero"]["super_name"], "Ms. Marvel");
        assert!(
            json["hero"].get("hero_powers").is_none(),
            "nested hero must omit its association collection"
        );
        assert_eq!(
            json["power"]["description"],
            "gives the wielder the ability to fly"
        );
    }

    #[test]
    fn power_view_exposes_description_text() {
        let json = to_json(&PowerView::from(sample_power()));
        assert_eq!(json["id"], 2);
        assert_eq!(json["description"], "gives the wielder the ability to fly");
    }
}
