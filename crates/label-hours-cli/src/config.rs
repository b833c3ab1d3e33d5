//! Environment-driven configuration.

use std::fmt;

use thiserror::Error;

pub const TOKEN_VAR: &str = "GITLAB_TOKEN";
pub const GROUP_VAR: &str = "GITLAB_GROUP_ID";
pub const URL_VAR: &str = "GITLAB_URL";
pub const DEFAULT_GITLAB_URL: &str = "https://gitlab.com";

/// Required variables that were unset or blank.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Missing environment variable(s): {}.", .missing.join(", "))]
pub struct MissingVars {
    pub missing: Vec<&'static str>,
}

#[derive(Clone)]
pub struct Config {
    pub token: String,
    pub group_id: String,
    pub base_url: String,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("token", &"<redacted>")
            .field("group_id", &self.group_id)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, MissingVars> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through `lookup`. Blank values count as missing.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, MissingVars> {
        let read = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let token = read(TOKEN_VAR);
        let group_id = read(GROUP_VAR);

        match (token, group_id) {
            (Some(token), Some(group_id)) => Ok(Self {
                token,
                group_id,
                base_url: read(URL_VAR).unwrap_or_else(|| DEFAULT_GITLAB_URL.to_string()),
            }),
            (token, group_id) => {
                let mut missing = Vec::new();
                if token.is_none() {
                    missing.push(TOKEN_VAR);
                }
                if group_id.is_none() {
                    missing.push(GROUP_VAR);
                }
                Err(MissingVars { missing })
            }
        }
    }
}
