use crate::cli::auth::require_admin;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Board;
use crate::errors::AppResult;
use crate::export::{ExportFormat, csv, json, notify_export_success};
use crate::storage;
use std::path::Path;

/// Export the live board to a file.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        password,
    } = cmd
    {
        require_admin(cfg, password.as_deref())?;

        let mut store = storage::open_default(&cfg.database);
        let board = Board::open(store.as_mut())?;

        match format {
            ExportFormat::Csv => csv::write_csv(file, board.log(), &cfg.time_format)?,
            ExportFormat::Json => json::write_json(file, board.log())?,
        }
        notify_export_success(format.as_str(), Path::new(file));
    }
    Ok(())
}
