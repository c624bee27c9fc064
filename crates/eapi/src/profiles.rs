//! Connection profiles
//!
//! Named connection parameter sets in a TOML file under the user config
//! directory, so operators don't repeat host/credential flags on every
//! invocation:
//!
//! ```toml
//! [profiles.lab]
//! host = "sw1.lab.example.net"
//! username = "admin"
//! password = "admin"
//! transport = "https"
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::types::Connection;

/// The set of named connection profiles.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Profiles {
    #[serde(default)]
    profiles: BTreeMap<String, Connection>,
}

/// Default profile file path: `~/.config/eosctl/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config").join("eosctl").join("config.toml"))
}

impl Profiles {
    /// Load profiles from the default location.
    ///
    /// A missing file yields an empty profile set, not an error.
    pub fn load() -> Result<Self> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load profiles from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .map_err(|e| Error::profile_config(path, e.to_string()))?;
        toml::from_str(&content).map_err(|e| Error::profile_config(path, e.to_string()))
    }

    /// Save profiles to an explicit path, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| Error::profile_config(path, e.to_string()))?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::profile_config(path, e.to_string()))?;
        fs::write(path, content).map_err(|e| Error::profile_config(path, e.to_string()))
    }

    /// Look up a profile by name.
    pub fn find(&self, name: &str) -> Result<&Connection> {
        self.profiles
            .get(name)
            .ok_or_else(|| Error::ProfileNotFound(name.to_string()))
    }

    /// Add or replace a profile.
    pub fn insert(&mut self, name: impl Into<String>, conn: Connection) {
        self.profiles.insert(name.into(), conn);
    }

    /// Iterate profile names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.profiles.keys().map(String::as_str)
    }
}
