//! Migration to create the clans table.
//!
//! Clans are keyed by their in-game tag. Every column except `tag`, `name`
//! and `recruitment` is nullable; `recruitment` defaults to false.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.create_table(create_clans_table()).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Clans::Table).if_exists().to_owned())
            .await
    }
}

/// Builds the `CREATE TABLE IF NOT EXISTS clans (...)` statement.
///
/// Applying the statement against a database that already holds the table is
/// a no-op, so it can be executed on every startup.
pub fn create_clans_table() -> TableCreateStatement {
    Table::create()
        .table(Clans::Table)
        .if_not_exists()
        .col(
            ColumnDef::new(Clans::Tag)
                .string_len(15)
                .not_null()
                .primary_key(),
        )
        .col(ColumnDef::new(Clans::Name).string_len(50).not_null())
        .col(ColumnDef::new(Clans::LeaderId).big_integer().null())
        .col(ColumnDef::new(Clans::Prefix).string_len(5).null())
        .col(ColumnDef::new(Clans::Emoji).string_len(50).null())
        .col(ColumnDef::new(Clans::Msg).text().null())
        .col(ColumnDef::new(Clans::Questions).text().null())
        .col(ColumnDef::new(Clans::Requirements).string_len(20).null())
        .col(ColumnDef::new(Clans::RoleId).big_integer().null())
        .col(ColumnDef::new(Clans::GkRoleId).big_integer().null())
        .col(ColumnDef::new(Clans::ClanType).string_len(20).null())
        .col(
            ColumnDef::new(Clans::Recruitment)
                .boolean()
                .not_null()
                .default(false),
        )
        .col(ColumnDef::new(Clans::ChatChannelId).big_integer().null())
        .col(ColumnDef::new(Clans::AnnouncementId).big_integer().null())
        .col(ColumnDef::new(Clans::CheckHeroMax).integer().null())
        .col(ColumnDef::new(Clans::CheckHeroSum).integer().null())
        .to_owned()
}

#[derive(DeriveIden)]
enum Clans {
    Table,
    Tag,
    Name,
    LeaderId,
    Prefix,
    Emoji,
    Msg,
    Questions,
    Requirements,
    RoleId,
    GkRoleId,
    ClanType,
    Recruitment,
    ChatChannelId,
    // Deployed databases carry the misspelled column name.
    #[sea_orm(iden = "announcment_id")]
    AnnouncementId,
    CheckHeroMax,
    CheckHeroSum,
}
