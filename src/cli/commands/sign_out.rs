use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Board;
use crate::errors::AppResult;
use crate::storage;
use crate::ui::messages;

/// Sign a member out of the room.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Out { name } = cmd {
        let mut store = storage::open_default(&cfg.database);
        let mut board = Board::open(store.as_mut())?;

        if !board.roster().is_empty() && !board.roster().names().iter().any(|n| n == name.trim()) {
            messages::warning(format!("'{}' is not on the roster", name.trim()));
        }

        let entry = board.sign_out(name)?;
        messages::success(format!(
            "{} signed out (entry {}, {})",
            entry.name,
            entry.id,
            entry.local_time_str(&cfg.time_format)
        ));
    }
    Ok(())
}
