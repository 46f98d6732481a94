//! Client configuration
//!
//! Values come from environment variables and may be overridden by command
//! line flags:
//! - `LASPAD_SERVER`: server base URL (default `http://127.0.0.1:51823`)
//! - `LASPAD_BRANCH_SPLIT`: `lines`, `chars` or `delim:<char>`
//! - `LASPAD_TIMEOUT_SECS`: per-request timeout, unset means none

use crate::branches::BranchSplit;
use crate::error::{Error, Result};
use crate::session::{SessionOptions, DEFAULT_BUSY_APPEARANCE};
use crate::types::Appearance;
use std::env;
use std::time::Duration;
use url::Url;

/// Address the laspad server listens on
pub const DEFAULT_SERVER: &str = "http://127.0.0.1:51823";

/// Environment variable for the server URL
pub const SERVER_ENV: &str = "LASPAD_SERVER";

/// Environment variable for the branch segmentation rule
pub const BRANCH_SPLIT_ENV: &str = "LASPAD_BRANCH_SPLIT";

/// Environment variable for the request timeout in seconds
pub const TIMEOUT_ENV: &str = "LASPAD_TIMEOUT_SECS";

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL
    pub server: Url,
    /// Branch-list segmentation rule
    pub branch_split: BranchSplit,
    /// Optional per-request timeout
    pub request_timeout: Option<Duration>,
    /// Appearance of controls while a command is in flight
    pub busy_appearance: Appearance,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server: Url::parse(DEFAULT_SERVER).expect("default server URL is valid"),
            branch_split: BranchSplit::default(),
            request_timeout: None,
            busy_appearance: Appearance::new(DEFAULT_BUSY_APPEARANCE),
        }
    }
}

impl ClientConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(server) = lookup(SERVER_ENV) {
            config.server = parse_server(&server)?;
        }
        if let Some(split) = lookup(BRANCH_SPLIT_ENV) {
            config.branch_split = split.parse()?;
        }
        if let Some(secs) = lookup(TIMEOUT_ENV) {
            config.request_timeout = Some(parse_timeout(&secs)?);
        }

        Ok(config)
    }

    /// Options for sessions created from this configuration
    pub fn session_options(&self) -> SessionOptions {
        SessionOptions {
            branch_split: self.branch_split.clone(),
            busy_appearance: self.busy_appearance.clone(),
        }
    }
}

/// Parse a server base URL, accepting only http and https
pub fn parse_server(value: &str) -> Result<Url> {
    let url = Url::parse(value)?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(Error::Config(format!(
            "unsupported server scheme {scheme:?} in {value}"
        ))),
    }
}

/// Parse a timeout given in whole seconds
pub fn parse_timeout(value: &str) -> Result<Duration> {
    value
        .trim()
        .parse::<u64>()
        .ok()
        .filter(|secs| *secs > 0)
        .map(Duration::from_secs)
        .ok_or_else(|| Error::Config(format!("invalid timeout {value:?}, expected seconds > 0")))
}
