use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::storage::SqliteStore;

/// Create the config file and the database with its kv table.
pub fn handle(cli: &Cli) -> AppResult<()> {
    Config::init_all(cli.db.clone(), cli.test)?;

    let cfg = {
        let mut cfg = Config::load();
        if let Some(custom_db) = &cli.db {
            cfg.database = custom_db.clone();
        }
        cfg
    };

    // Opening the store creates the schema.
    SqliteStore::open(&cfg.database)?;
    Ok(())
}
