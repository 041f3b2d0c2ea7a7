use crate::cli::auth::require_admin;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{Archive, Board};
use crate::errors::{AppError, AppResult};
use crate::storage;
use crate::ui::messages;
use chrono::{NaiveDate, Utc};

/// Save, restore or list daily archives.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Archive {
        save,
        load,
        list,
        password,
    } = cmd
    {
        let mut store = storage::open_default(&cfg.database);

        if *save {
            require_admin(cfg, password.as_deref())?;

            let snapshot = {
                let board = Board::open(store.as_mut())?;
                board.log().to_vec()
            };
            let mut archive = Archive::open(store.as_mut())?;
            let date = archive.save_today(&snapshot, Utc::now())?;
            messages::success(format!(
                "Saved today's board as {} ({} entries)",
                date,
                snapshot.len()
            ));
            return Ok(());
        }

        if let Some(date) = load {
            require_admin(cfg, password.as_deref())?;

            NaiveDate::parse_from_str(date, "%Y-%m-%d")
                .map_err(|_| AppError::InvalidDate(date.to_string()))?;

            let snapshot = {
                let archive = Archive::open(store.as_mut())?;
                archive.snapshot(date)?
            };
            let count = snapshot.len();
            let mut board = Board::open(store.as_mut())?;
            board.replace_log(snapshot)?;
            messages::success(format!(
                "Board restored from {} ({} entries)",
                date, count
            ));
            return Ok(());
        }

        // Plain `archive` or `archive --list`: show the index.
        let _ = list;
        let archive = Archive::open(store.as_mut())?;
        let refs = archive.list();
        if refs.is_empty() {
            messages::info("No archives saved yet.");
        } else {
            println!("🗂  Saved archives:\n");
            for r in refs {
                println!(" {}", r.date);
            }
        }
    }
    Ok(())
}
