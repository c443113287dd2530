//! High-level data access over the SQLite pool.
//!
//! Every mutating method runs as a single transaction: reference checks and
//! the write commit together or not at all. Lookup misses are `Ok(None)`;
//! only broken references and infrastructure failures are errors.

use sqlx::sqlite::SqlitePool;

use roster_core::{
    Description, Hero, HeroId, HeroPower, HeroPowerId, Power, PowerId, Strength,
};

use crate::error::StoreError;

/// Data access handle over a shared connection pool.
///
/// Cheap to clone; clones share the pool.
#[derive(Debug, Clone)]
pub struct Repository {
    pool: SqlitePool,
}

#[derive(sqlx::FromRow)]
struct HeroRow {
    id: i64,
    name: String,
    super_name: String,
}

impl From<HeroRow> for Hero {
    fn from(row: HeroRow) -> Self {
        Self { id: HeroId(row.id), name: row.name, super_name: row.super_name }
    }
}

#[derive(sqlx::FromRow)]
struct PowerRow {
    id: i64,
    name: String,
    description: String,
}

impl TryFrom<PowerRow> for Power {
    type Error = StoreError;

    fn try_from(row: PowerRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: PowerId(row.id),
            name: row.name,
            description: Description::new(row.description)?,
        })
    }
}

#[derive(sqlx::FromRow)]
struct HeroPowerRow {
    id: i64,
    strength: String,
    hero_id: i64,
    power_id: i64,
}

impl TryFrom<HeroPowerRow> for HeroPower {
    type Error = StoreError;

    fn try_from(row: HeroPowerRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: HeroPowerId(row.id),
            strength: row.strength.parse()?,
            hero_id: HeroId(row.hero_id),
            power_id: PowerId(row.power_id),
        })
    }
}

/// One association joined with its power, as needed for the deep hero view.
#[derive(sqlx::FromRow)]
struct HeroPowerJoinRow {
    id: i64,
    strength: String,
    hero_id: i64,
    power_id: i64,
    power_name: String,
    power_description: String,
}

impl TryFrom<HeroPowerJoinRow> for (HeroPower, Power) {
    type Error = StoreError;

    fn try_from(row: HeroPowerJoinRow) -> Result<Self, Self::Error> {
        let hero_power = HeroPower {
            id: HeroPowerId(row.id),
            strength: row.strength.parse()?,
            hero_id: HeroId(row.hero_id),
            power_id: PowerId(row.power_id),
        };
        let power = Power {
            id: PowerId(row.power_id),
            name: row.power_name,
            description: Description::new(row.power_description)?,
        };
        Ok((hero_power, power))
    }
}

impl Repository {
    /// Wrap an already-connected pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List all heroes, ordered by id.
    ///
    /// # Errors
    /// Returns [`StoreError::Database`] on query failure.
    pub async fn list_heroes(&self) -> Result<Vec<Hero>, StoreError> {
        let rows: Vec<HeroRow> =
            sqlx::query_as("SELECT id, name, super_name FROM heroes ORDER BY id")
                .fetch_all(&self.pool)
                .await?;
        Ok(rows.into_iter().map(Hero::from).collect())
    }

    /// Fetch one hero by id.
    ///
    /// # Errors
    /// Returns [`StoreError::Database`] on query failure.
    pub async fn get_hero(&self, id: HeroId) -> Result<Option<Hero>, StoreError> {
        let row: Option<HeroRow> =
            sqlx::query_as("SELECT id, name, super_name FROM heroes WHERE id = ?1")
                .bind(id.0)
                .fetch_optional(&self.pool)
                .await?;
        Ok(row.map(Hero::from))
    }

    /// Fetch one hero together with its associations and their powers.
    ///
    /// Both reads run in one transaction so the association list matches the
    /// hero row it was read with.
    ///
    /// # Errors
    /// Returns [`StoreError::Database`] on query failure, or
    /// [`StoreError::Corrupt`] if a stored row fails domain validation.
    pub async fn get_hero_detail(
        &self,
        id: HeroId,
    ) -> Result<Option<(Hero, Vec<(HeroPower, Power)>)>, StoreError> {
        let mut tx = self.pool.begin().await?;

        let hero: Option<HeroRow> =
            sqlx::query_as("SELECT id, name, super_name FROM heroes WHERE id = ?1")
                .bind(id.0)
                .fetch_optional(&mut *tx)
                .await?;
        let Some(hero) = hero else {
            return Ok(None);
        };

        let rows: Vec<HeroPowerJoinRow> = sqlx::query_as(
            "SELECT hp.id, hp.strength, hp.hero_id, hp.power_id, \
             p.name AS power_name, p.description AS power_description \
             FROM hero_powers hp \
             JOIN powers p ON p.id = hp.power_id \
             WHERE hp.hero_id = ?1 \
             ORDER BY hp.id",
        )
        .bind(id.0)
        .fetch_all(&mut *tx)
        .await?;

        tx.commit().await?;

        let associations: Vec<(HeroPower, Power)> = rows
            .into_iter()
            .map(TryFrom::try_from)
            .collect::<Result<_, StoreError>>()?;
        Ok(Some((hero.into(), associations)))
    }

    /// List all powers, ordered by id.
    ///
    /// # Errors
    /// Returns [`StoreError::Database`] on query failure, or
    /// [`StoreError::Corrupt`] if a stored row fails domain validation.
    pub async fn list_powers(&self) -> Result<Vec<Power>, StoreError> {
        let rows: Vec<PowerRow> =
            sqlx::query_as("SELECT id, name, description FROM powers ORDER BY id")
                .fetch_all(&self.pool)
                .await?;
        rows.into_iter().map(Power::try_from).collect()
    }

    /// Fetch one power by id.
    ///
    /// # Errors
    /// Returns [`StoreError::Database`] on query failure, or
    /// [`StoreError::Corrupt`] if the stored row fails domain validation.
    pub async fn get_power(&self, id: PowerId) -> Result<Option<Power>, StoreError> {
        let row: Option<PowerRow> =
            sqlx::query_as("SELECT id, name, description FROM powers WHERE id = ?1")
                .bind(id.0)
                .fetch_optional(&self.pool)
                .await?;
        row.map(Power::try_from).transpose()
    }

    /// Replace a power's description, returning the updated power.
    ///
    /// Takes an already-validated [`Description`], so the write cannot
    /// violate the length rule. Returns `Ok(None)` if the power does not
    /// exist. Single statement, so atomic.
    ///
    /// # Errors
    /// Returns [`StoreError::Database`] on query failure.
    pub async fn update_power_description(
        &self,
        id: PowerId,
        description: &Description,
    ) -> Result<Option<Power>, StoreError> {
        let row: Option<PowerRow> = sqlx::query_as(
            "UPDATE powers SET description = ?1 WHERE id = ?2 \
             RETURNING id, name, description",
        )
        .bind(description.as_str())
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await?;

        if row.is_some() {
            tracing::debug!(power = %id, "power description updated");
        }
        row.map(Power::try_from).transpose()
    }

    /// Create a hero-power association.
    ///
    /// Both referenced rows are checked inside the same transaction as the
    /// insert; if either is missing, nothing is committed. Returns the new
    /// association together with the rows it references.
    ///
    /// # Errors
    /// Returns [`StoreError::UnknownHero`] or [`StoreError::UnknownPower`]
    /// if a reference is broken, and [`StoreError::Database`] on query
    /// failure.
    pub async fn create_hero_power(
        &self,
        strength: Strength,
        hero_id: HeroId,
        power_id: PowerId,
    ) -> Result<(HeroPower, Hero, Power), StoreError> {
        let mut tx = self.pool.begin().await?;

        let hero: HeroRow =
            sqlx::query_as("SELECT id, name, super_name FROM heroes WHERE id = ?1")
                .bind(hero_id.0)
                .fetch_optional(&mut *tx)
                .await?
                .ok_or(StoreError::UnknownHero(hero_id))?;

        let power: PowerRow =
            sqlx::query_as("SELECT id, name, description FROM powers WHERE id = ?1")
                .bind(power_id.0)
                .fetch_optional(&mut *tx)
                .await?
                .ok_or(StoreError::UnknownPower(power_id))?;

        let row: HeroPowerRow = sqlx::query_as(
            "INSERT INTO hero_powers (strength, hero_id, power_id) \
             VALUES (?1, ?2, ?3) \
             RETURNING id, strength, hero_id, power_id",
        )
        .bind(strength.as_str())
        .bind(hero_id.0)
        .bind(power_id.0)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::debug!(hero = %hero_id, power = %power_id, strength = %strength, "hero power created");
        Ok((row.try_into()?, hero.into(), power.try_into()?))
    }

    /// Insert a hero, returning it with its assigned id.
    ///
    /// # Errors
    /// Returns [`StoreError::Database`] on query failure.
    pub async fn insert_hero(&self, name: &str, super_name: &str) -> Result<Hero, StoreError> {
        let row: HeroRow = sqlx::query_as(
            "INSERT INTO heroes (name, super_name) VALUES (?1, ?2) \
             RETURNING id, name, super_name",
        )
        .bind(name)
        .bind(super_name)
        .fetch_one(&self.pool)
        .await?;
        Ok(row.into())
    }

    /// Insert a power, returning it with its assigned id.
    ///
    /// # Errors
    /// Returns [`StoreError::Database`] on query failure.
    pub async fn insert_power(
        &self,
        name: &str,
        description: &Description,
    ) -> Result<Power, StoreError> {
        let row: PowerRow = sqlx::query_as(
            "INSERT INTO powers (name, description) VALUES (?1, ?2) \
             RETURNING id, name, description",
        )
        .bind(name)
        .bind(description.as_str())
        .fetch_one(&self.pool)
        .await?;
        row.try_into()
    }

    /// Delete a hero; its associations go with it (cascade).
    ///
    /// Returns `true` if a row was deleted.
    ///
    /// # Errors
    /// Returns [`StoreError::Database`] on query failure.
    pub async fn delete_hero(&self, id: HeroId) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM heroes WHERE id = ?1")
            .bind(id.0)
            .execute(&self.pool)
            .await?;
        let deleted = result.rows_affected() > 0;
        if deleted {
            tracing::debug!(hero = %id, "hero deleted");
        }
        Ok(deleted)
    }

    /// Delete a power; its associations go with it (cascade).
    ///
    /// Returns `true` if a row was deleted.
    ///
    /// # Errors
    /// Returns [`StoreError::Database`] on query failure.
    pub async fn delete_power(&self, id: PowerId) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM powers WHERE id = ?1")
            .bind(id.0)
            .execute(&self.pool)
            .await?;
        let deleted = result.rows_affected() > 0;
        if deleted {
            tracing::debug!(power = %id, "power deleted");
        }
        Ok(deleted)
    }
}
