//! Admin gate for privileged commands.
//!
//! The check lives here at the CLI boundary: the core managers expose the
//! privileged operations but never see or store the credential.

use crate::config::Config;
use crate::errors::{AppError, AppResult};

/// Compare the provided password against the configured shared secret.
pub fn require_admin(cfg: &Config, provided: Option<&str>) -> AppResult<()> {
    match provided {
        Some(p) if p == cfg.admin_password => Ok(()),
        _ => Err(AppError::Unauthorized),
    }
}
