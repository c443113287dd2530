//! HTTP API gateway for the Roster hero/power data service.
//!
//! Exposes hero and power lookups, power description updates, and
//! hero-power creation as a JSON API over the SQLite-backed store.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod error;
pub mod routes;
