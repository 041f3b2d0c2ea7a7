use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Board;
use crate::errors::AppResult;
use crate::storage;
use crate::ui::messages;
use crate::utils::time::format_elapsed;
use ansi_term::Colour;
use chrono::Utc;

/// Print the live board, newest entry first.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Board = cmd {
        let mut store = storage::open_default(&cfg.database);
        let board = Board::open(store.as_mut())?;

        if board.roster().is_empty() {
            messages::warning("No roster loaded. Use 'roomlog roster --file <FILE>' to set one.");
        }

        if board.log().is_empty() {
            messages::info("The board is empty.");
            return Ok(());
        }

        let now = Utc::now();
        let id_w = board
            .log()
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        let name_w = board
            .log()
            .iter()
            .map(|e| e.name.len())
            .max()
            .unwrap_or(4);

        println!("🚪 Room board:\n");
        for entry in board.log() {
            let status = if entry.status.is_out() {
                Colour::Red.bold().paint("OUT")
            } else {
                Colour::Green.paint("IN ")
            };

            let elapsed = if entry.status.is_out() {
                format!("  (out for {})", format_elapsed(entry.time, now))
            } else {
                String::new()
            };

            println!(
                " [{:>id_w$}] {:<name_w$}  {}  {}{}",
                entry.id,
                entry.name,
                status,
                entry.local_time_str(&cfg.time_format),
                elapsed,
                id_w = id_w,
                name_w = name_w
            );
        }
    }
    Ok(())
}
