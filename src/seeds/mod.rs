//! Database seeding functionality
//!
//! This module populates the clans table from data kept outside the
//! database, such as the JSON clan store used before the table existed.

pub mod legacy_config;

pub use legacy_config::{ImportReport, LegacyClanEntry, import_legacy_config, load_legacy_config};
