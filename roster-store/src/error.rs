//! Error types for the store crate.

use roster_core::{CoreError, HeroId, PowerId};

/// Errors that can occur during persistence operations.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum StoreError {
    /// A hero referenced during hero-power creation does not exist.
    #[error("hero {0} does not exist")]
    UnknownHero(HeroId),

    /// A power referenced during hero-power creation does not exist.
    #[error("power {0} does not exist")]
    UnknownPower(PowerId),

    /// A stored row no longer satisfies a domain invariant.
    ///
    /// The schema carries matching CHECK constraints, so this only fires if
    /// the database file was edited outside the service.
    #[error("stored row failed validation: {0}")]
    Corrupt(#[from] CoreError),

    /// Underlying database failure.
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    /// Schema migration failure.
    #[error("migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}
