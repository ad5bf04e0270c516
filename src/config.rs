//! Client configuration.
//!
//! There is one setting, the base URL of the calculator API. It comes from
//! the built-in default, then the `API_URL` environment variable, then an
//! explicit override (the CLI's `--api-url`), later sources winning.

use figment::providers::{Env, Serialized};
use figment::Figment;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// Where the API lives when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:5005";

/// A single problem with a configured value.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigIssue {
    #[error("api_url is empty")]
    EmptyUrl,

    #[error("api_url '{url}' is not a valid URL: {reason}")]
    MalformedUrl { url: String, reason: String },

    #[error("api_url scheme '{0}' is not http or https")]
    UnsupportedScheme(String),

    #[error("api_url must not carry a query or fragment")]
    QueryOrFragment,
}

/// Errors loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read configuration: {0}")]
    Load(#[from] figment::Error),

    #[error("Invalid configuration: {}", join_issues(.0))]
    Invalid(Vec<ConfigIssue>),
}

fn join_issues(issues: &[ConfigIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the calculator API
    pub api_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl ClientConfig {
    /// Defaults overlaid with the environment.
    pub fn figment() -> Figment {
        Figment::new()
            .merge(Serialized::defaults(ClientConfig::default()))
            .merge(Env::raw().only(&["api_url"]))
    }

    /// Load from defaults and environment, apply an optional override and
    /// validate the result.
    pub fn load(api_url_override: Option<&str>) -> Result<Self, ConfigError> {
        let mut figment = Self::figment();
        if let Some(url) = api_url_override {
            figment = figment.merge(Serialized::default("api_url", url));
        }
        Self::from_figment(figment)
    }

    /// Extract and validate from an arbitrary figment.
    pub fn from_figment(figment: Figment) -> Result<Self, ConfigError> {
        let config: ClientConfig = figment.extract()?;

        match config.validate() {
            Validation::Success(_) => Ok(Self {
                api_url: config.api_url.trim().to_string(),
            }),
            Validation::Failure(issues) => {
                Err(ConfigError::Invalid(issues.iter().cloned().collect()))
            }
        }
    }

    /// Check every setting, collecting all problems at once.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigIssue>> {
        let url = self.api_url.trim();
        if url.is_empty() {
            return Validation::fail(ConfigIssue::EmptyUrl);
        }

        let parsed = match Url::parse(url) {
            Ok(parsed) => parsed,
            Err(e) => {
                return Validation::fail(ConfigIssue::MalformedUrl {
                    url: url.to_string(),
                    reason: e.to_string(),
                })
            }
        };

        let scheme_check = if matches!(parsed.scheme(), "http" | "https") {
            Validation::success(())
        } else {
            Validation::fail(ConfigIssue::UnsupportedScheme(parsed.scheme().to_string()))
        };

        let shape_check = if parsed.query().is_none() && parsed.fragment().is_none() {
            Validation::success(())
        } else {
            Validation::fail(ConfigIssue::QueryOrFragment)
        };

        Validation::all_vec(vec![scheme_check, shape_check]).map(|_| ())
    }
}
