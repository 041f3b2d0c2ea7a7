use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for roomlog:
/// a sign-out board for a room, backed by SQLite.
#[derive(Parser)]
#[command(
    name = "roomlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track who is signed out of the room: roster, live board, daily archives",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,
    },

    /// Sign a member out of the room
    Out {
        /// Display name, normally one from the roster
        name: String,
    },

    /// Sign a member back in, by the entry id shown on the board
    In {
        /// Entry id from `roomlog board`
        id: i64,
    },

    /// Show the live board: who is out, since when, for how long
    Board,

    /// Show or replace the roster (replacing requires the admin password)
    Roster {
        /// Read the new roster from a file, one name per line
        #[arg(long, value_name = "FILE", conflicts_with = "names")]
        file: Option<String>,

        /// Inline roster text, one name per line (shell: --names "$(printf 'Sam\nLee')")
        #[arg(long, value_name = "NAMES")]
        names: Option<String>,

        /// Print the current roster
        #[arg(long)]
        print: bool,

        /// Admin password (required to replace the roster)
        #[arg(long, short = 'p')]
        password: Option<String>,
    },

    /// Clear the whole board (requires the admin password)
    Clear {
        /// Admin password
        #[arg(long, short = 'p')]
        password: Option<String>,
    },

    /// Export the live board (requires the admin password)
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        /// Admin password
        #[arg(long, short = 'p')]
        password: Option<String>,
    },

    /// Save, restore or list daily archives of the board
    Archive {
        /// Archive today's board (requires the admin password)
        #[arg(long, conflicts_with_all = ["load", "list"])]
        save: bool,

        /// Replace the live board with the archive for DATE (YYYY-MM-DD;
        /// requires the admin password)
        #[arg(long, value_name = "DATE", conflicts_with = "list")]
        load: Option<String>,

        /// List saved archives, newest first
        #[arg(long)]
        list: bool,

        /// Admin password
        #[arg(long, short = 'p')]
        password: Option<String>,
    },
}
