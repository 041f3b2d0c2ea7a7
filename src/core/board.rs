//! The live sign-out board: the session log plus the roster, loaded from
//! and persisted to an injected key-value store.
//!
//! The log is newest-first. Signing out always prepends a fresh entry,
//! even when the same name already has one out (repeated sign-outs
//! accumulate; see the `repeated_sign_out_accumulates` test). Signing in
//! flips one existing entry to IN, in place, addressed by its stable id.

use crate::core::roster::Roster;
use crate::errors::{AppError, AppResult};
use crate::models::{AttendanceEntry, Status};
use crate::storage::KvStore;
use chrono::Utc;

/// Storage key for the live session log.
pub const LOG_KEY: &str = "students";
/// Storage key for the roster.
pub const ROSTER_KEY: &str = "studentList";

pub struct Board<'s> {
    store: &'s mut dyn KvStore,
    log: Vec<AttendanceEntry>,
    roster: Roster,
    next_id: i64,
}

impl<'s> Board<'s> {
    /// Load the board from the store. Missing keys mean an empty board,
    /// not an error; a present but unparseable value is surfaced as
    /// `CorruptValue` and nothing is overwritten.
    pub fn open(store: &'s mut dyn KvStore) -> AppResult<Self> {
        let mut log: Vec<AttendanceEntry> = match store.get(LOG_KEY)? {
            Some(raw) => serde_json::from_str(&raw).map_err(|source| {
                AppError::CorruptValue {
                    key: LOG_KEY.to_string(),
                    source,
                }
            })?,
            None => Vec::new(),
        };

        let roster = match store.get(ROSTER_KEY)? {
            Some(raw) => {
                let names: Vec<String> =
                    serde_json::from_str(&raw).map_err(|source| AppError::CorruptValue {
                        key: ROSTER_KEY.to_string(),
                        source,
                    })?;
                Roster::from_names(names)
            }
            None => Roster::default(),
        };

        // Logs written before ids existed deserialize with id 0; give
        // those entries fresh ids so sign-in by id works on them too.
        let mut next_id = log.iter().map(|e| e.id).max().unwrap_or(0) + 1;
        for entry in log.iter_mut().filter(|e| e.id == 0) {
            entry.id = next_id;
            next_id += 1;
        }

        Ok(Self {
            store,
            log,
            roster,
            next_id,
        })
    }

    /// The session log, newest first.
    pub fn log(&self) -> &[AttendanceEntry] {
        &self.log
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Record `name` as out of the room. Prepends a new OUT entry; any
    /// prior entries for the same name are left untouched.
    pub fn sign_out(&mut self, name: &str) -> AppResult<&AttendanceEntry> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::EmptyName);
        }

        let entry = AttendanceEntry::signed_out(self.next_id, name, Utc::now());
        self.next_id += 1;
        self.log.insert(0, entry);
        self.persist_log()?;
        Ok(&self.log[0])
    }

    /// Mark the entry with the given id as back in, timestamped now.
    pub fn sign_in(&mut self, id: i64) -> AppResult<&AttendanceEntry> {
        let pos = self
            .log
            .iter()
            .position(|e| e.id == id)
            .ok_or(AppError::EntryNotFound(id))?;
        self.sign_in_pos(pos)
    }

    /// Positional variant of [`sign_in`](Self::sign_in), counting from the
    /// newest entry. Rejects an out-of-range index without touching the log.
    pub fn sign_in_at(&mut self, index: usize) -> AppResult<&AttendanceEntry> {
        if index >= self.log.len() {
            return Err(AppError::OutOfRange(index));
        }
        self.sign_in_pos(index)
    }

    fn sign_in_pos(&mut self, pos: usize) -> AppResult<&AttendanceEntry> {
        self.log[pos].status = Status::In;
        self.log[pos].time = Utc::now();
        self.persist_log()?;
        Ok(&self.log[pos])
    }

    /// Empty the log and drop its persisted copy.
    pub fn clear_all(&mut self) -> AppResult<()> {
        self.log.clear();
        self.store.remove(LOG_KEY)
    }

    /// Replace the roster wholesale from a raw text block (one name per
    /// line). Returns how many names the new roster holds.
    pub fn replace_roster(&mut self, raw: &str) -> AppResult<usize> {
        let names = Roster::parse(raw);
        let count = names.len();
        self.roster.replace(names);
        let json = serde_json::to_string(self.roster.names())?;
        self.store.set(ROSTER_KEY, &json)?;
        Ok(count)
    }

    /// Replace the live log wholesale, e.g. when restoring an archived
    /// day. Ids are preserved; the id counter moves past the highest one.
    pub fn replace_log(&mut self, entries: Vec<AttendanceEntry>) -> AppResult<()> {
        self.log = entries;
        self.next_id = self.log.iter().map(|e| e.id).max().unwrap_or(0) + 1;
        self.persist_log()
    }

    fn persist_log(&mut self) -> AppResult<()> {
        let json = serde_json::to_string(&self.log)?;
        self.store.set(LOG_KEY, &json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{KvStore, MemStore};

    #[test]
    fn sign_out_prepends_out_entry_at_index_zero() {
        let mut store = MemStore::new();
        let mut board = Board::open(&mut store).unwrap();

        let before = Utc::now();
        board.sign_out("Sam").unwrap();
        let after = Utc::now();

        let log = board.log();
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].name, "Sam");
        assert!(log[0].status.is_out());
        assert!(log[0].time >= before && log[0].time <= after);
    }

    #[test]
    fn sign_out_empty_name_is_rejected() {
        let mut store = MemStore::new();
        let mut board = Board::open(&mut store).unwrap();
        assert!(matches!(board.sign_out("   "), Err(AppError::EmptyName)));
        assert!(board.log().is_empty());
    }

    #[test]
    fn scenario_two_out_then_sign_in_oldest() {
        let mut store = MemStore::new();
        let mut board = Board::open(&mut store).unwrap();

        board.sign_out("Sam").unwrap();
        board.sign_out("Lee").unwrap();

        // Newest first: Lee at 0, Sam at 1.
        assert_eq!(board.log()[0].name, "Lee");
        assert_eq!(board.log()[1].name, "Sam");

        board.sign_in_at(1).unwrap();

        assert_eq!(board.log()[0].name, "Lee");
        assert!(board.log()[0].status.is_out());
        assert_eq!(board.log()[1].name, "Sam");
        assert!(board.log()[1].status.is_in());
        // Sign-in refreshed the timestamp.
        assert!(board.log()[1].time >= board.log()[0].time);
    }

    #[test]
    fn sign_in_touches_only_the_addressed_entry() {
        let mut store = MemStore::new();
        let mut board = Board::open(&mut store).unwrap();
        board.sign_out("Sam").unwrap();
        board.sign_out("Lee").unwrap();
        board.sign_out("Kim").unwrap();

        let untouched = board.log().to_vec();
        let lee_id = board.log()[1].id;
        board.sign_in(lee_id).unwrap();

        assert_eq!(board.log()[0], untouched[0]);
        assert_eq!(board.log()[2], untouched[2]);
        assert!(board.log()[1].status.is_in());
        assert_eq!(board.log()[1].name, "Lee");
    }

    #[test]
    fn sign_in_out_of_range_fails_and_leaves_log_unchanged() {
        let mut store = MemStore::new();
        let mut board = Board::open(&mut store).unwrap();
        board.sign_out("Sam").unwrap();
        let snapshot: Vec<_> = board.log().to_vec();

        assert!(matches!(
            board.sign_in_at(5),
            Err(AppError::OutOfRange(5))
        ));
        assert_eq!(board.log(), snapshot.as_slice());
    }

    #[test]
    fn sign_in_unknown_id_fails() {
        let mut store = MemStore::new();
        let mut board = Board::open(&mut store).unwrap();
        assert!(matches!(
            board.sign_in(42),
            Err(AppError::EntryNotFound(42))
        ));
    }

    #[test]
    fn repeated_sign_out_accumulates() {
        let mut store = MemStore::new();
        let mut board = Board::open(&mut store).unwrap();
        board.sign_out("Sam").unwrap();
        board.sign_out("Sam").unwrap();

        assert_eq!(board.log().len(), 2);
        assert_ne!(board.log()[0].id, board.log()[1].id);
    }

    #[test]
    fn clear_all_empties_log_and_persisted_copy() {
        let mut store = MemStore::new();
        {
            let mut board = Board::open(&mut store).unwrap();
            board.sign_out("Sam").unwrap();
            board.clear_all().unwrap();
            assert!(board.log().is_empty());
        }
        assert_eq!(store.get(LOG_KEY).unwrap(), None);
    }

    #[test]
    fn replace_roster_parses_and_persists() {
        let mut store = MemStore::new();
        {
            let mut board = Board::open(&mut store).unwrap();
            let count = board.replace_roster("Alice\n\nBob \n").unwrap();
            assert_eq!(count, 2);
            assert_eq!(board.roster().names(), ["Alice", "Bob"]);
        }
        assert_eq!(
            store.get(ROSTER_KEY).unwrap().as_deref(),
            Some(r#"["Alice","Bob"]"#)
        );
    }

    #[test]
    fn board_state_survives_reload() {
        let mut store = MemStore::new();
        {
            let mut board = Board::open(&mut store).unwrap();
            board.replace_roster("Sam\nLee").unwrap();
            board.sign_out("Sam").unwrap();
        }
        let board = Board::open(&mut store).unwrap();
        assert_eq!(board.roster().names(), ["Sam", "Lee"]);
        assert_eq!(board.log().len(), 1);
        assert_eq!(board.log()[0].name, "Sam");
    }

    #[test]
    fn corrupt_stored_log_is_reported_and_left_untouched() {
        let mut store = MemStore::new();
        store.set(LOG_KEY, "not json").unwrap();

        assert!(matches!(
            Board::open(&mut store),
            Err(AppError::CorruptValue { .. })
        ));
        // Nothing overwrote the stored value.
        assert_eq!(store.get(LOG_KEY).unwrap().as_deref(), Some("not json"));
    }

    #[test]
    fn legacy_entries_without_ids_get_fresh_ones() {
        let mut store = MemStore::new();
        // Shape written by the original web app: no id field.
        store
            .set(
                LOG_KEY,
                r#"[{"name":"Sam","status":"out","time":"2026-08-25T14:00:00Z"},
                    {"name":"Lee","status":"in","time":"2026-08-25T13:00:00Z"}]"#,
            )
            .unwrap();

        let mut board = Board::open(&mut store).unwrap();
        assert!(board.log().iter().all(|e| e.id > 0));
        assert_ne!(board.log()[0].id, board.log()[1].id);

        let id = board.log()[0].id;
        board.sign_in(id).unwrap();
        assert!(board.log()[0].status.is_in());
    }
}
