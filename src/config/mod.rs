//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.reposcope.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `REPOSCOPE_QUERY`, `REPOSCOPE_TOKEN`, or
//!    legacy `GITHUB_TOKEN`
//! 4. **Command-line arguments** – `--query`/`-q` and `--token`/`-t`
//!
//! # Configuration File
//!
//! ```toml
//! token = "ghp_example"
//! api_base = "https://api.github.com"
//! users_per_page = 5
//! repos_page_size = 100
//! log_file = "reposcope.log"
//! log_filter = "reposcope=debug"
//! ```

use std::env;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::github::error::ExplorerError;
use crate::github::gateway::{DEFAULT_API_BASE, GatewaySettings};
use crate::github::identity::PersonalAccessToken;
use crate::github::pagination::MAX_PER_PAGE;
use crate::query::{DEFAULT_USERS_PER_PAGE, QuerySettings};

/// Default `tracing_subscriber::EnvFilter` directive for file logging.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Legacy environment variable consulted when no token is configured.
const LEGACY_TOKEN_VAR: &str = "GITHUB_TOKEN";

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Environment Variables
///
/// - `REPOSCOPE_TOKEN`, `GITHUB_TOKEN`, or `--token`: Authentication token
/// - `REPOSCOPE_QUERY` or `--query`: Keyword searched at startup
/// - `REPOSCOPE_API_BASE` or `--api-base`: REST API base URL
/// - `REPOSCOPE_USERS_PER_PAGE` or `--users-per-page`: Users per search
/// - `REPOSCOPE_REPOS_PAGE_SIZE` or `--repos-page-size`: Repositories per page
/// - `REPOSCOPE_LOG_FILE` or `--log-file`: Enables file logging
/// - `REPOSCOPE_LOG_FILTER` or `--log-filter`: Log filter directive
///
/// # Example
///
/// ```no_run
/// use ortho_config::OrthoConfig;
/// use reposcope::ExplorerConfig;
///
/// let config = ExplorerConfig::load().expect("failed to load configuration");
/// let settings = config.query_settings().expect("invalid page sizes");
/// assert!(settings.users_per_page > 0);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "REPOSCOPE",
    discovery(
        dotfile_name = ".reposcope.toml",
        config_file_name = "reposcope.toml",
        app_name = "reposcope"
    )
)]
pub struct ExplorerConfig {
    /// Personal access token for GitHub API authentication.
    ///
    /// Optional: without a token requests are sent anonymously.
    ///
    /// Can be provided via:
    /// - CLI: `--token <TOKEN>` or `-t <TOKEN>`
    /// - Environment: `REPOSCOPE_TOKEN` or `GITHUB_TOKEN` (legacy)
    /// - Config file: `token = "..."`
    #[ortho_config(cli_short = 't')]
    pub token: Option<String>,

    /// Keyword submitted as soon as the explorer starts.
    ///
    /// Can be provided via:
    /// - CLI: `--query <KEYWORD>` or `-q <KEYWORD>`
    /// - Environment: `REPOSCOPE_QUERY`
    /// - Config file: `query = "..."`
    #[ortho_config(cli_short = 'q')]
    pub query: Option<String>,

    /// REST API base URL.
    ///
    /// Defaults to `https://api.github.com`.
    #[ortho_config()]
    pub api_base: String,

    /// Number of users requested per search.
    ///
    /// Defaults to 5. Must lie within `1..=100`.
    #[ortho_config()]
    pub users_per_page: u8,

    /// Number of repositories requested per page when a panel is expanded.
    ///
    /// Defaults to 100. Must lie within `1..=100`.
    #[ortho_config()]
    pub repos_page_size: u8,

    /// File that receives structured logs.
    ///
    /// Logging stays disabled unless this is set, so the terminal UI is
    /// never written over.
    pub log_file: Option<String>,

    /// `tracing_subscriber::EnvFilter` directive used for file logging.
    ///
    /// `RUST_LOG` takes precedence when set.
    #[ortho_config()]
    pub log_filter: String,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            token: None,
            query: None,
            api_base: DEFAULT_API_BASE.to_owned(),
            users_per_page: DEFAULT_USERS_PER_PAGE,
            repos_page_size: MAX_PER_PAGE,
            log_file: None,
            log_filter: DEFAULT_LOG_FILTER.to_owned(),
        }
    }
}

impl ExplorerConfig {
    /// Resolves the token from configuration or the legacy `GITHUB_TOKEN`
    /// environment variable.
    ///
    /// Blank values count as absent: GitHub is then called anonymously.
    #[must_use]
    pub fn resolve_token(&self) -> Option<PersonalAccessToken> {
        self.token
            .clone()
            .or_else(|| env::var(LEGACY_TOKEN_VAR).ok())
            .and_then(|value| PersonalAccessToken::new(value).ok())
    }

    /// Returns the initial search keyword, ignoring blank values.
    #[must_use]
    pub fn initial_query(&self) -> Option<String> {
        self.query
            .as_deref()
            .map(str::trim)
            .filter(|query| !query.is_empty())
            .map(str::to_owned)
    }

    /// Builds the gateway connection settings.
    ///
    /// # Errors
    ///
    /// Returns [`ExplorerError::Configuration`] when `api_base` is not an
    /// absolute HTTP(S) URL.
    pub fn gateway_settings(&self) -> Result<GatewaySettings, ExplorerError> {
        let parsed = Url::parse(&self.api_base).map_err(|error| ExplorerError::Configuration {
            message: format!("api_base {:?} is not a valid URL: {error}", self.api_base),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ExplorerError::Configuration {
                message: format!("api_base {:?} must use http or https", self.api_base),
            });
        }

        Ok(GatewaySettings {
            api_base: self.api_base.clone(),
            token: self.resolve_token(),
        })
    }

    /// Builds the page sizes used by the query store.
    ///
    /// # Errors
    ///
    /// Returns [`ExplorerError::Configuration`] when either page size lies
    /// outside `1..=100`.
    pub fn query_settings(&self) -> Result<QuerySettings, ExplorerError> {
        Ok(QuerySettings {
            users_per_page: require_page_size("users_per_page", self.users_per_page)?,
            repos_page_size: require_page_size("repos_page_size", self.repos_page_size)?,
        })
    }

    /// Validates every derived setting without building anything else.
    ///
    /// # Errors
    ///
    /// Returns the first [`ExplorerError::Configuration`] encountered.
    pub fn validate(&self) -> Result<(), ExplorerError> {
        self.gateway_settings()?;
        self.query_settings()?;
        Ok(())
    }
}

fn require_page_size(field: &str, value: u8) -> Result<u8, ExplorerError> {
    if (1..=MAX_PER_PAGE).contains(&value) {
        Ok(value)
    } else {
        Err(ExplorerError::Configuration {
            message: format!("{field} must be between 1 and {MAX_PER_PAGE}, got {value}"),
        })
    }
}

#[cfg(test)]
mod tests;
