//! Daily archives: whole session logs snapshotted under `log-<YYYY-MM-DD>`
//! keys. Saving twice on the same day overwrites; archives are never
//! deleted automatically. The index is rebuilt from the store on open and
//! kept sorted newest date first.

use crate::errors::{AppError, AppResult};
use crate::models::AttendanceEntry;
use crate::storage::KvStore;
use crate::utils::time::date_key;
use chrono::{DateTime, Utc};

/// Prefix of every archive key in the store.
pub const ARCHIVE_PREFIX: &str = "log-";

/// One row of the archive index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveRef {
    pub key: String,
    pub date: String,
}

pub struct Archive<'s> {
    store: &'s mut dyn KvStore,
    dates: Vec<String>,
}

impl<'s> Archive<'s> {
    pub fn open(store: &'s mut dyn KvStore) -> AppResult<Self> {
        let mut dates: Vec<String> = store
            .keys_with_prefix(ARCHIVE_PREFIX)?
            .into_iter()
            .map(|k| k[ARCHIVE_PREFIX.len()..].to_string())
            .collect();
        dates.sort_by(|a, b| b.cmp(a));
        Ok(Self { store, dates })
    }

    /// Snapshot `log` under today's UTC date. The snapshot goes through
    /// serialization, so later mutation of the live log cannot leak into
    /// it. Returns the date key written.
    pub fn save_today(
        &mut self,
        log: &[AttendanceEntry],
        now: DateTime<Utc>,
    ) -> AppResult<String> {
        let date = date_key(now);
        let json = serde_json::to_string(log)?;
        self.store.set(&format!("{ARCHIVE_PREFIX}{date}"), &json)?;

        if !self.dates.contains(&date) {
            self.dates.push(date.clone());
            self.dates.sort_by(|a, b| b.cmp(a));
        }
        Ok(date)
    }

    /// The stored log for `date`, or `ArchiveNotFound`.
    pub fn snapshot(&self, date: &str) -> AppResult<Vec<AttendanceEntry>> {
        let key = format!("{ARCHIVE_PREFIX}{date}");
        let raw = self
            .store
            .get(&key)?
            .ok_or_else(|| AppError::ArchiveNotFound(date.to_string()))?;
        serde_json::from_str(&raw).map_err(|source| AppError::CorruptValue { key, source })
    }

    /// All archives, newest date first.
    pub fn list(&self) -> Vec<ArchiveRef> {
        self.dates
            .iter()
            .map(|d| ArchiveRef {
                key: format!("{ARCHIVE_PREFIX}{d}"),
                date: d.clone(),
            })
            .collect()
    }
}
