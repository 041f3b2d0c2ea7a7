use crate::ui::messages;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_admin_password")]
    pub admin_password: String,
    #[serde(default = "default_time_format")]
    pub time_format: String,
}

fn default_admin_password() -> String {
    // Shared static credential, same as the original deployment.
    "admin123".to_string()
}

fn default_time_format() -> String {
    "%Y-%m-%d %H:%M:%S".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            admin_password: default_admin_password(),
            time_format: default_time_format(),
        }
    }
}

impl Config {
    /// Standard configuration directory depending on the platform.
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".roomlog")
    }

    /// Full path of the config file.
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("roomlog.conf")
    }

    /// Full path of the SQLite database.
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("roomlog.sqlite")
    }

    /// Load configuration from file, or return defaults if not found.
    /// A broken config file is reported and replaced by defaults rather
    /// than aborting the command.
    pub fn load() -> Self {
        let path = Self::config_file();
        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(&path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(cfg) => cfg,
                Err(e) => {
                    messages::warning(format!(
                        "Cannot parse {:?} ({}); using defaults",
                        path, e
                    ));
                    Self::default()
                }
            },
            Err(e) => {
                messages::warning(format!("Cannot read {:?} ({}); using defaults", path, e));
                Self::default()
            }
        }
    }

    /// Initialize configuration and database files.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let db_path = if let Some(name) = custom_db {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::database_file()
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        if !is_test {
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| io::Error::other(e.to_string()))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            messages::success(format!("Config file: {:?}", Self::config_file()));
        }

        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }
        messages::success(format!("Database:    {:?}", db_path));

        Ok(())
    }
}
