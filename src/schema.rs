//! Schema management for the clans table.
//!
//! Both entry points are idempotent: applying them to a database that
//! already holds the table leaves its rows untouched.

use migration::{Migrator, MigratorTrait, create_clans_table};
use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr};

/// Applies every pending migration.
pub async fn ensure_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    Migrator::up(db, None).await?;
    tracing::info!("Schema is up to date");
    Ok(())
}

/// Executes `CREATE TABLE IF NOT EXISTS clans (...)` directly, bypassing the
/// migration history table.
pub async fn apply_clans_table<C>(db: &C) -> Result<(), DbErr>
where
    C: ConnectionTrait,
{
    let backend = db.get_database_backend();
    db.execute(backend.build(&create_clans_table())).await?;
    tracing::debug!(?backend, "Applied clans table declaration");
    Ok(())
}

/// Rolls back the most recent `steps` migrations.
pub async fn rollback(db: &DatabaseConnection, steps: u32) -> Result<(), DbErr> {
    Migrator::down(db, Some(steps)).await?;
    tracing::info!(steps, "Rolled back migrations");
    Ok(())
}

/// Names of the migrations recorded as applied, oldest first.
pub async fn applied_migrations(db: &DatabaseConnection) -> Result<Vec<String>, DbErr> {
    let applied = Migrator::get_applied_migrations(db).await?;
    Ok(applied
        .iter()
        .map(|migration| migration.name().to_string())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::Database;

    #[tokio::test]
    async fn test_ensure_schema_records_clans_migration() {
        let db = Database::connect("sqlite::memory:").await.unwrap();

        ensure_schema(&db).await.unwrap();
        ensure_schema(&db).await.unwrap();

        let applied = applied_migrations(&db).await.unwrap();
        assert_eq!(applied, vec!["m2025_01_20_000001_create_clans".to_string()]);
    }

    #[tokio::test]
    async fn test_rollback_drops_clans_table() {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        ensure_schema(&db).await.unwrap();

        rollback(&db, 1).await.unwrap();

        assert!(applied_migrations(&db).await.unwrap().is_empty());
    }
}
