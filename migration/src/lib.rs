//! Database migrations for the clans store.
//!
//! This module contains all database migrations using SeaORM Migration.

pub use sea_orm_migration::prelude::*;

mod m2025_01_20_000001_create_clans;

pub use m2025_01_20_000001_create_clans::create_clans_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m2025_01_20_000001_create_clans::Migration)]
    }
}
