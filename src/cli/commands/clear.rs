use crate::cli::auth::require_admin;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Board;
use crate::errors::AppResult;
use crate::storage;
use crate::ui::messages;

/// Wipe the live board.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Clear { password } = cmd {
        require_admin(cfg, password.as_deref())?;

        let mut store = storage::open_default(&cfg.database);
        let mut board = Board::open(store.as_mut())?;
        board.clear_all()?;
        messages::success("Board cleared");
    }
    Ok(())
}
