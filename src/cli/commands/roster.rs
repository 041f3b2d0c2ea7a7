use crate::cli::auth::require_admin;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Board;
use crate::errors::AppResult;
use crate::storage;
use crate::ui::messages;
use std::fs;

/// Show or replace the roster.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Roster {
        file,
        names,
        print,
        password,
    } = cmd
    {
        let mut store = storage::open_default(&cfg.database);
        let mut board = Board::open(store.as_mut())?;

        let raw = match (file, names) {
            (Some(path), _) => Some(fs::read_to_string(path)?),
            (None, Some(inline)) => Some(inline.clone()),
            (None, None) => None,
        };

        if let Some(raw) = raw {
            require_admin(cfg, password.as_deref())?;
            let count = board.replace_roster(&raw)?;
            messages::success(format!("Roster replaced: {} name(s)", count));
        }

        if *print || (file.is_none() && names.is_none()) {
            if board.roster().is_empty() {
                messages::info("The roster is empty.");
            } else {
                println!("📋 Roster:\n");
                for (i, name) in board.roster().names().iter().enumerate() {
                    println!(" {:>3}. {}", i + 1, name);
                }
            }
        }
    }
    Ok(())
}
