use super::status::Status;
use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

/// One line of the sign-out board.
///
/// `id` is assigned once at creation and never reused within a log; sign-in
/// addresses entries by it, so the newest-first display order stays a pure
/// presentation concern. Logs written by older versions carry no id (serde
/// default 0); the board re-assigns those on load.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AttendanceEntry {
    #[serde(default)]
    pub id: i64,
    pub name: String,
    pub status: Status,
    pub time: DateTime<Utc>,
}

impl AttendanceEntry {
    /// New OUT entry, timestamped now.
    pub fn signed_out(id: i64, name: &str, time: DateTime<Utc>) -> Self {
        Self {
            id,
            name: name.to_string(),
            status: Status::Out,
            time,
        }
    }

    /// Timestamp rendered in the local timezone with the given format.
    pub fn local_time_str(&self, fmt: &str) -> String {
        self.time.with_timezone(&Local).format(fmt).to_string()
    }
}
