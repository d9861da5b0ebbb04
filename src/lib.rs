//! # Clans Store Library
//!
//! This library declares the `clans` table (migration and SeaORM entity)
//! together with the configuration, connection, and logging plumbing needed
//! to apply it.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod schema;
pub mod seeds;
pub mod telemetry;
pub use migration;
