//! Configuration for a single update run
//!
//! A flat five-field record decoded from a JSON file. The record is
//! read-only once constructed and owned by the driver for the duration
//! of the run; nothing persists between invocations.

use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::{Error, Result};

/// Everything a run needs to know.
///
/// Absent keys decode to empty strings rather than failing the load;
/// a blank value surfaces later as a malformed request against the
/// service in question, not as a configuration error.
#[derive(Clone, Deserialize)]
pub struct Config {
    /// URL of the plain-text IP lookup service
    #[serde(rename = "url_check_ip", default)]
    pub check_ip_url: String,

    /// URL of the provider's update endpoint
    #[serde(rename = "url_update_ip", default)]
    pub update_ip_url: String,

    /// Provider account name
    #[serde(rename = "user", default)]
    pub username: String,

    /// Provider account password
    /// ⚠️ NEVER log this value
    #[serde(rename = "pass", default)]
    pub password: String,

    /// DNS record to keep pointed at the current address
    #[serde(default)]
    pub hostname: String,
}

// Custom Debug implementation that hides the password
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("check_ip_url", &self.check_ip_url)
            .field("update_ip_url", &self.update_ip_url)
            .field("username", &self.username)
            .field("password", &"<REDACTED>")
            .field("hostname", &self.hostname)
            .finish()
    }
}

impl Config {
    /// Read and decode the configuration file at `path`.
    ///
    /// The existence check runs before the open so that a missing file
    /// is reported as [`Error::NotFound`] instead of a bare i/o error.
    /// Concurrent deletion between check and open is not guarded.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::NotFound(path.display().to_string()));
        }

        let file = File::open(path)?;
        let config: Config = serde_json::from_reader(BufReader::new(file))?;

        tracing::debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }
}
