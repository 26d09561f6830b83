//! Error types exposed by the GitHub explorer layer.

use thiserror::Error;

/// Message shown when a search is submitted without a keyword.
pub const EMPTY_KEYWORD_MESSAGE: &str = "Please enter at least 1 character";

/// Errors surfaced while validating input or communicating with GitHub.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ExplorerError {
    /// The search keyword was empty or whitespace only.
    #[error("{}", EMPTY_KEYWORD_MESSAGE)]
    EmptyKeyword,

    /// A user login was empty or contained characters GitHub never issues.
    #[error("invalid user login: {login:?}")]
    InvalidLogin {
        /// The rejected login value.
        login: String,
    },

    /// The configured API base URL could not be parsed.
    #[error("API base URL is invalid: {0}")]
    InvalidUrl(String),

    /// A token was supplied but contained no usable characters.
    #[error("personal access token is blank")]
    MissingToken,

    /// The authentication token was rejected by GitHub.
    #[error("GitHub rejected the token: {message}")]
    Authentication {
        /// GitHub error message returned with the 401/403 response.
        message: String,
    },

    /// GitHub returned a non-authentication API error or an unreadable body.
    #[error("GitHub API error: {message}")]
    Api {
        /// Response detail describing the failure.
        message: String,
    },

    /// Networking failed while calling GitHub.
    #[error("network error talking to GitHub: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// Invalid pagination parameters.
    #[error("invalid pagination: {message}")]
    InvalidPagination {
        /// Description of the invalid parameter.
        message: String,
    },

    /// Configuration could not be loaded or failed validation.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// The terminal UI could not start or crashed.
    #[error("terminal UI error: {message}")]
    Terminal {
        /// Error detail reported by the TUI runtime.
        message: String,
    },
}
