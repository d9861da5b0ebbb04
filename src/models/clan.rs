//! Clan entity model
//!
//! This module contains the SeaORM entity model for the clans table. Column
//! types mirror the `create_clans` migration.

use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue, ConnectionTrait};
use serde::{Deserialize, Serialize};

use crate::error::ClanError;

pub const TAG_MAX_LEN: usize = 15;
pub const NAME_MAX_LEN: usize = 50;
pub const PREFIX_MAX_LEN: usize = 5;
pub const EMOJI_MAX_LEN: usize = 50;
pub const REQUIREMENTS_MAX_LEN: usize = 20;
pub const CLAN_TYPE_MAX_LEN: usize = 20;

/// Clan entity keyed by its in-game tag
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "clans")]
pub struct Model {
    /// In-game clan tag (primary key, immutable once created)
    #[sea_orm(
        primary_key,
        auto_increment = false,
        column_type = "String(StringLen::N(15))"
    )]
    pub tag: String,

    /// Display name, not unique
    #[sea_orm(column_type = "String(StringLen::N(50))")]
    pub name: String,

    /// Account ID of the clan leader
    pub leader_id: Option<i64>,

    #[sea_orm(column_type = "String(StringLen::N(5))", nullable)]
    pub prefix: Option<String>,

    /// Emoji glyph or custom emoji code
    #[sea_orm(column_type = "String(StringLen::N(50))", nullable)]
    pub emoji: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub msg: Option<String>,

    /// Recruitment questionnaire
    #[sea_orm(column_type = "Text", nullable)]
    pub questions: Option<String>,

    /// Eligibility criteria, e.g. `TH14+`
    #[sea_orm(column_type = "String(StringLen::N(20))", nullable)]
    pub requirements: Option<String>,

    /// Member role ID
    pub role_id: Option<i64>,

    /// Gatekeeper role ID
    pub gk_role_id: Option<i64>,

    #[sea_orm(column_type = "String(StringLen::N(20))", nullable)]
    pub clan_type: Option<String>,

    /// Whether the clan accepts new members
    #[sea_orm(default_value = false)]
    pub recruitment: bool,

    pub chat_channel_id: Option<i64>,

    /// Announcement message ID
    #[sea_orm(column_name = "announcment_id")]
    pub announcement_id: Option<i64>,

    pub check_hero_max: Option<i32>,

    pub check_hero_sum: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        self.check_lengths()
            .map_err(|err| DbErr::Custom(err.to_string()))?;
        Ok(self)
    }
}

impl ActiveModel {
    /// Rejects string values longer than their column allows.
    ///
    /// SQLite ignores `VARCHAR(n)`, so the bound is checked here for every
    /// backend. Lengths are counted in characters, as Postgres does.
    pub fn check_lengths(&self) -> Result<(), ClanError> {
        check_len("tag", present(&self.tag), TAG_MAX_LEN)?;
        check_len("name", present(&self.name), NAME_MAX_LEN)?;
        check_len("prefix", nullable(&self.prefix), PREFIX_MAX_LEN)?;
        check_len("emoji", nullable(&self.emoji), EMOJI_MAX_LEN)?;
        check_len(
            "requirements",
            nullable(&self.requirements),
            REQUIREMENTS_MAX_LEN,
        )?;
        check_len("clan_type", nullable(&self.clan_type), CLAN_TYPE_MAX_LEN)?;
        Ok(())
    }
}

fn present(value: &ActiveValue<String>) -> Option<&str> {
    match value {
        ActiveValue::Set(v) | ActiveValue::Unchanged(v) => Some(v.as_str()),
        ActiveValue::NotSet => None,
    }
}

fn nullable(value: &ActiveValue<Option<String>>) -> Option<&str> {
    match value {
        ActiveValue::Set(v) | ActiveValue::Unchanged(v) => v.as_deref(),
        ActiveValue::NotSet => None,
    }
}

fn check_len(column: &'static str, value: Option<&str>, max: usize) -> Result<(), ClanError> {
    let Some(value) = value else {
        return Ok(());
    };

    let actual = value.chars().count();
    if actual > max {
        return Err(ClanError::ValueTooLong {
            column,
            max,
            actual,
        });
    }

    Ok(())
}

/// Eligibility thresholds configured for a clan
///
/// `None` means no threshold is configured, which is not the same as zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroThresholds {
    pub hero_max: Option<i32>,
    pub hero_sum: Option<i32>,
}

impl HeroThresholds {
    pub fn is_empty(&self) -> bool {
        self.hero_max.is_none() && self.hero_sum.is_none()
    }
}

impl Model {
    pub fn thresholds(&self) -> HeroThresholds {
        HeroThresholds {
            hero_max: self.check_hero_max,
            hero_sum: self.check_hero_sum,
        }
    }
}
