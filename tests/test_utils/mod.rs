//! Test utilities for database testing.
//!
//! This module provides utilities for setting up in-memory SQLite databases
//! with migrations for testing purposes.

use anyhow::Result;
use clans::models::clan;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Set, Statement};

/// Sets up an in-memory SQLite database with all migrations applied.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = Database::connect("sqlite::memory:").await?;
    Migrator::up(&db, None).await?;
    Ok(db)
}

/// Builds a clan with only the required columns set.
#[allow(dead_code)]
pub fn new_clan(tag: &str, name: &str) -> clan::ActiveModel {
    clan::ActiveModel {
        tag: Set(tag.to_string()),
        name: Set(name.to_string()),
        ..Default::default()
    }
}

/// Column layout of a SQLite table as reported by `PRAGMA table_info`.
#[allow(dead_code)]
#[derive(Debug, Clone)]
pub struct ColumnInfo {
    pub name: String,
    pub data_type: String,
    pub not_null: bool,
    pub primary_key: bool,
    pub default_value: Option<String>,
}

/// Reads the column layout of `table` from a SQLite database.
#[allow(dead_code)]
pub async fn sqlite_columns(db: &DatabaseConnection, table: &str) -> Result<Vec<ColumnInfo>> {
    let rows = db
        .query_all(Statement::from_string(
            db.get_database_backend(),
            format!("PRAGMA table_info({table})"),
        ))
        .await?;

    let mut columns = Vec::with_capacity(rows.len());
    for row in rows {
        columns.push(ColumnInfo {
            name: row.try_get("", "name")?,
            data_type: row.try_get("", "type")?,
            not_null: row.try_get::<i32>("", "notnull")? != 0,
            primary_key: row.try_get::<i32>("", "pk")? != 0,
            default_value: row.try_get("", "dflt_value")?,
        });
    }
    Ok(columns)
}

/// Counts rows in the clans table.
#[allow(dead_code)]
pub async fn count_clans(db: &DatabaseConnection) -> Result<i64> {
    let row = db
        .query_one(Statement::from_string(
            db.get_database_backend(),
            "SELECT COUNT(*) AS total FROM clans".to_string(),
        ))
        .await?
        .ok_or_else(|| anyhow::anyhow!("count query returned no row"))?;
    Ok(row.try_get("", "total")?)
}
