//! # Data Models
//!
//! SeaORM entity models for the clans store.

pub mod clan;

pub use clan::Entity as Clan;
