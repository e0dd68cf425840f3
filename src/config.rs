//! Landing page configuration.
//!
//! Every value has a default matching the backend's routes, so an empty
//! lookup yields a working config. In the browser, overrides come from
//! `<meta name="ignition:KEY" content="...">` tags in the host page.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_PROFILE_ENDPOINT: &str = "/profile";
pub const DEFAULT_ORGANIZATION_ENDPOINT: &str = "/organization";
pub const DEFAULT_LOGIN_PATH: &str = "/login";
pub const DEFAULT_LOGOUT_PATH: &str = "/logout";
pub const DEFAULT_FETCH_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_COMPANY_NAME: &str = "Pivotal";
pub const DEFAULT_SPACE_NAME: &str = "development";

const META_PREFIX: &str = "ignition:";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{key} must be a positive integer, got '{value}'")]
    InvalidNumber { key: &'static str, value: String },
    #[error("{key} must be a same-origin path starting with '/', got '{value}'")]
    InvalidPath { key: &'static str, value: String },
    #[error("unknown run-mode '{0}' (expected 'live' or 'harness')")]
    InvalidRunMode(String),
    #[error("footer-links is not a JSON list of {{text, url}}: {0}")]
    InvalidLinks(String),
}

/// Whether the session flow touches the network and the window location.
///
/// `Harness` suppresses every side effect: no fetch on mount, no gating
/// redirect, no logout navigation. Components can then be exercised with an
/// injected profile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RunMode {
    #[default]
    Live,
    Harness,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterLink {
    pub text: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LandingConfig {
    pub profile_endpoint: String,
    pub organization_endpoint: String,
    pub login_path: String,
    pub logout_path: String,
    pub fetch_timeout_ms: u64,
    pub run_mode: RunMode,
    /// Company named in the welcome call-to-action.
    pub company_name: String,
    /// Name of the first space created in a new org.
    pub space_name: String,
    pub footer_links: Vec<FooterLink>,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            profile_endpoint: DEFAULT_PROFILE_ENDPOINT.to_owned(),
            organization_endpoint: DEFAULT_ORGANIZATION_ENDPOINT.to_owned(),
            login_path: DEFAULT_LOGIN_PATH.to_owned(),
            logout_path: DEFAULT_LOGOUT_PATH.to_owned(),
            fetch_timeout_ms: DEFAULT_FETCH_TIMEOUT_MS,
            run_mode: RunMode::Live,
            company_name: DEFAULT_COMPANY_NAME.to_owned(),
            space_name: DEFAULT_SPACE_NAME.to_owned(),
            footer_links: default_footer_links(),
        }
    }
}

impl LandingConfig {
    /// Build a config from a key lookup, falling back to defaults.
    ///
    /// Keys:
    /// - `profile-endpoint`, `organization-endpoint`, `login-path`,
    ///   `logout-path`: same-origin paths
    /// - `fetch-timeout-ms`: default 10000
    /// - `run-mode`: `live` (default) or `harness`
    /// - `company-name`, `space-name`: marketing copy
    /// - `footer-links`: JSON list of `{"text": .., "url": ..}`
    ///
    /// Blank values count as absent.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` naming the first key whose value is malformed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());
        let defaults = Self::default();

        let path = |key: &'static str, fallback: String| -> Result<String, ConfigError> {
            match get(key) {
                Some(value) if value.starts_with('/') => Ok(value),
                Some(value) => Err(ConfigError::InvalidPath { key, value }),
                None => Ok(fallback),
            }
        };

        let profile_endpoint = path("profile-endpoint", defaults.profile_endpoint)?;
        let organization_endpoint = path("organization-endpoint", defaults.organization_endpoint)?;
        let login_path = path("login-path", defaults.login_path)?;
        let logout_path = path("logout-path", defaults.logout_path)?;
        let fetch_timeout_ms = parse_positive_u64("fetch-timeout-ms", get("fetch-timeout-ms"), defaults.fetch_timeout_ms)?;
        let run_mode = parse_run_mode(get("run-mode").as_deref())?;
        let company_name = get("company-name").unwrap_or(defaults.company_name);
        let space_name = get("space-name").unwrap_or(defaults.space_name);
        let footer_links = match get("footer-links") {
            Some(raw) => serde_json::from_str(&raw).map_err(|e| ConfigError::InvalidLinks(e.to_string()))?,
            None => defaults.footer_links,
        };

        Ok(Self {
            profile_endpoint,
            organization_endpoint,
            login_path,
            logout_path,
            fetch_timeout_ms,
            run_mode,
            company_name,
            space_name,
            footer_links,
        })
    }

    /// Read overrides from the host page's `ignition:*` meta tags.
    ///
    /// # Errors
    ///
    /// Same as [`LandingConfig::from_lookup`].
    pub fn from_document() -> Result<Self, ConfigError> {
        Self::from_lookup(read_meta)
    }
}

/// Error page for a non-2xx status that is not a 401.
pub fn status_page(status: u16) -> String {
    format!("/{status}")
}

fn parse_positive_u64(key: &'static str, raw: Option<String>, default: u64) -> Result<u64, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => match value.parse::<u64>() {
            Ok(n) if n > 0 => Ok(n),
            _ => Err(ConfigError::InvalidNumber { key, value }),
        },
    }
}

fn parse_run_mode(raw: Option<&str>) -> Result<RunMode, ConfigError> {
    match raw.map(str::to_ascii_lowercase).as_deref() {
        None | Some("live") => Ok(RunMode::Live),
        Some("harness") => Ok(RunMode::Harness),
        Some(other) => Err(ConfigError::InvalidRunMode(other.to_owned())),
    }
}

fn default_footer_links() -> Vec<FooterLink> {
    vec![
        FooterLink {
            text: "DOCUMENTATION".to_owned(),
            url: "https://docs.pivotal.io/pivotalcf/latest/".to_owned(),
        },
        FooterLink {
            text: "CF CLI".to_owned(),
            url: "https://docs.pivotal.io/pivotalcf/latest/cf-cli/".to_owned(),
        },
        FooterLink {
            text: "SAMPLE APP".to_owned(),
            url: "https://github.com/cloudfoundry-samples/spring-music".to_owned(),
        },
    ]
}

fn read_meta(key: &str) -> Option<String> {
    #[cfg(feature = "csr")]
    {
        let document = web_sys::window()?.document()?;
        let selector = format!("meta[name=\"{META_PREFIX}{key}\"]");
        document.query_selector(&selector).ok().flatten()?.get_attribute("content")
    }
    #[cfg(not(feature = "csr"))]
    {
        log::trace!("no document to read {META_PREFIX}{key} from");
        None
    }
}
