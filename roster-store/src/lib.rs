//! SQLite persistence for the Roster hero/power data service.
//!
//! Encapsulates all database-specific logic behind a small repository API:
//! pool construction, the embedded schema migration, and transactional
//! operations over heroes, powers, and hero-power associations. Referential
//! integrity (foreign keys with cascade delete) lives in the schema.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod connection;
pub mod error;
pub mod repository;

pub use connection::{connect, run_migrations};
pub use error::StoreError;
pub use repository::Repository;
