use crate::errors::AppResult;
use crate::models::AttendanceEntry;

/// Write the session log as pretty-printed JSON.
pub fn write_json(path: &str, entries: &[AttendanceEntry]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(entries)?;
    std::fs::write(path, json)?;
    Ok(())
}
