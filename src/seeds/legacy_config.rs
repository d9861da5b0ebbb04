//! Legacy clan config import
//!
//! Before the clans table existed, clans were kept in a JSON file mapping
//! each clan tag to its settings:
//!
//! ```json
//! {
//!   "#2PP": {
//!     "leader": 123, "name": "Alpha Clan", "prefix": "AC", "emoji": "alpha",
//!     "msg": "a|b", "questions": null, "requirement": "TH14+",
//!     "role": 456, "gk_role": 789, "type": "Competitive",
//!     "recruitment": true, "chat": 111, "announcement": null,
//!     "checks": { "hero_max": { "min_value": 80 } }
//!   }
//! }
//! ```
//!
//! [`import_legacy_config`] copies those entries into the table.

use std::collections::BTreeMap;
use std::path::Path;

use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ConnectionTrait, DatabaseConnection, EntityTrait, Set,
    TransactionTrait,
};
use serde::Deserialize;

use crate::error::ClanError;
use crate::models::clan::{self, Entity as Clan};

const HERO_MAX_CHECK: &str = "hero_max";
const HERO_SUM_CHECK: &str = "hero_sum";

/// A single clan as stored in the legacy JSON config
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LegacyClanEntry {
    pub name: Option<String>,
    pub leader: Option<i64>,
    pub emoji: Option<String>,
    pub msg: Option<String>,
    pub questions: Option<String>,
    pub prefix: Option<String>,
    pub requirement: Option<String>,
    pub role: Option<i64>,
    pub gk_role: Option<i64>,
    #[serde(rename = "type")]
    pub clan_type: Option<String>,
    pub recruitment: Option<bool>,
    pub chat: Option<i64>,
    pub announcement: Option<i64>,
    pub checks: Option<BTreeMap<String, LegacyCheck>>,
}

/// Threshold of an eligibility check
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct LegacyCheck {
    pub min_value: i32,
}

impl LegacyClanEntry {
    /// Builds the row for `tag`.
    ///
    /// Absent keys stay unset so the column defaults apply. Checks without a
    /// matching column are dropped.
    pub fn into_active_model(self, tag: &str) -> clan::ActiveModel {
        let mut check_hero_max = None;
        let mut check_hero_sum = None;
        for (kind, check) in self.checks.iter().flatten() {
            match kind.as_str() {
                HERO_MAX_CHECK => check_hero_max = Some(check.min_value),
                HERO_SUM_CHECK => check_hero_sum = Some(check.min_value),
                other => {
                    tracing::warn!(tag, check = other, "Dropping check without a clans column");
                }
            }
        }

        clan::ActiveModel {
            tag: Set(tag.to_string()),
            name: self.name.map_or(NotSet, Set),
            leader_id: Set(self.leader),
            prefix: Set(self.prefix),
            emoji: Set(self.emoji),
            msg: Set(self.msg),
            questions: Set(self.questions),
            requirements: Set(self.requirement),
            role_id: Set(self.role),
            gk_role_id: Set(self.gk_role),
            clan_type: Set(self.clan_type),
            recruitment: self.recruitment.map_or(NotSet, Set),
            chat_channel_id: Set(self.chat),
            announcement_id: Set(self.announcement),
            check_hero_max: Set(check_hero_max),
            check_hero_sum: Set(check_hero_sum),
        }
    }
}

/// Outcome of a legacy import
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    /// Tags written to the table
    pub inserted: Vec<String>,
    /// Tags already present, left untouched
    pub skipped: Vec<String>,
}

/// Reads and parses a legacy clan config file.
pub async fn load_legacy_config(
    path: &Path,
) -> Result<BTreeMap<String, LegacyClanEntry>, ClanError> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| ClanError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    serde_json::from_str(&raw).map_err(|source| ClanError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Imports every clan from the legacy config at `path`.
///
/// Tags that already exist are skipped, so re-running the import is safe.
/// The import runs in one transaction: if any entry is rejected, nothing is
/// written.
pub async fn import_legacy_config(
    db: &DatabaseConnection,
    path: &Path,
) -> Result<ImportReport, ClanError> {
    let entries = load_legacy_config(path).await?;
    log::info!(
        "Importing {} clan(s) from {}",
        entries.len(),
        path.display()
    );

    let txn = db.begin().await?;
    let mut report = ImportReport::default();

    for (tag, entry) in entries {
        if insert_if_absent(&txn, &tag, entry).await? {
            log::info!("Imported clan {}", tag);
            report.inserted.push(tag);
        } else {
            log::info!("Clan '{}' already exists, skipping", tag);
            report.skipped.push(tag);
        }
    }

    txn.commit().await?;

    log::info!(
        "Legacy import completed: {} inserted, {} skipped",
        report.inserted.len(),
        report.skipped.len()
    );
    Ok(report)
}

async fn insert_if_absent<C>(db: &C, tag: &str, entry: LegacyClanEntry) -> Result<bool, ClanError>
where
    C: ConnectionTrait,
{
    if Clan::find_by_id(tag.to_string()).one(db).await?.is_some() {
        return Ok(false);
    }

    let clan = entry.into_active_model(tag);
    clan.check_lengths()?;
    clan.insert(db)
        .await
        .map_err(|err| ClanError::from_write(tag, err))?;

    Ok(true)
}
