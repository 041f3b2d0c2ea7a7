use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Board;
use crate::errors::AppResult;
use crate::storage;
use crate::ui::messages;

/// Sign a member back in, addressed by entry id.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::In { id } = cmd {
        let mut store = storage::open_default(&cfg.database);
        let mut board = Board::open(store.as_mut())?;

        let entry = board.sign_in(*id)?;
        messages::success(format!(
            "{} signed back in at {}",
            entry.name,
            entry.local_time_str(&cfg.time_format)
        ));
    }
    Ok(())
}
