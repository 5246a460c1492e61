//! Configuration Management
//!
//! Resolution of the connection parameters handed to the gateway at startup.
//!
//! # Resolution Precedence
//! 1. Explicit CLI flags (highest priority)
//! 2. Profile file (`--profile <path>`, or `~/.config/rosterctl/connection.json`
//!    when present)
//! 3. Built-in defaults (localhost:3306, root, empty password, `employees_db`)
//!
//! A profile may name an environment variable for the password instead of
//! storing it directly.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::db::ConnectionConfig;
use crate::error::{Result, RosterError};

/// Partial connection settings loaded from a profile file.
///
/// Every field is optional; anything absent falls back to the defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConnectionProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,

    /// Password stored directly. Prefer `password_env`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    /// Environment variable to read the password from. Takes effect only
    /// when `password` itself is absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_env: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
}

/// Connection settings given on the command line.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub user: Option<String>,
    pub password: Option<String>,
    pub database: Option<String>,
}

/// Default profile location: `<config dir>/rosterctl/connection.json`.
#[must_use]
pub fn default_profile_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("rosterctl").join("connection.json"))
}

/// Load and parse a profile file.
pub fn load_profile(path: &Path) -> Result<ConnectionProfile> {
    let contents = fs::read_to_string(path).map_err(|e| {
        RosterError::config_error(format!("Failed to read profile {}: {e}", path.display()))
    })?;

    serde_json::from_str(&contents).map_err(|e| {
        RosterError::config_error(format!("Failed to parse profile {}: {e}", path.display()))
    })
}

/// Layer defaults, profile and CLI flags into the final connection config.
pub fn resolve_connection(
    profile: Option<&ConnectionProfile>,
    overrides: &Overrides,
) -> Result<ConnectionConfig> {
    let mut config = ConnectionConfig::default();

    if let Some(profile) = profile {
        if let Some(host) = &profile.host {
            config.host = host.clone();
        }
        if let Some(port) = profile.port {
            config.port = port;
        }
        if let Some(user) = &profile.user {
            config.user = user.clone();
        }
        if let Some(database) = &profile.database {
            config.database = database.clone();
        }
        if let Some(password) = &profile.password {
            config.password = password.clone();
        } else if let Some(env_var) = &profile.password_env {
            match std::env::var(env_var) {
                Ok(password) => config.password = password,
                Err(_) => {
                    return Err(RosterError::config_error(format!(
                        "Environment variable {env_var} not found for password"
                    )));
                }
            }
        }
    }

    if let Some(host) = &overrides.host {
        config.host = host.clone();
    }
    if let Some(port) = overrides.port {
        config.port = port;
    }
    if let Some(user) = &overrides.user {
        config.user = user.clone();
    }
    if let Some(password) = &overrides.password {
        config.password = password.clone();
    }
    if let Some(database) = &overrides.database {
        config.database = database.clone();
    }

    Ok(config)
}
