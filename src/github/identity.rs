//! Validated wrappers for the values sent to GitHub.
//!
//! Each wrapper is checked once at construction so that gateways and the
//! query store never handle a blank keyword, a malformed login, or an empty
//! token.

use std::fmt;

use super::error::ExplorerError;

/// Trimmed, non-empty keyword for the user search endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SearchKeyword(String);

impl SearchKeyword {
    /// Trims surrounding whitespace and rejects empty keywords.
    ///
    /// # Errors
    ///
    /// Returns [`ExplorerError::EmptyKeyword`] when nothing is left after
    /// trimming.
    ///
    /// # Example
    ///
    /// ```
    /// use reposcope::github::SearchKeyword;
    ///
    /// let keyword = SearchKeyword::parse("  octocat ").expect("keyword is valid");
    /// assert_eq!(keyword.as_str(), "octocat");
    /// assert!(SearchKeyword::parse(" \t ").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self, ExplorerError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ExplorerError::EmptyKeyword);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the keyword.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for SearchKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// GitHub account login used as a path segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserLogin(String);

impl UserLogin {
    /// Validates a login returned by search or typed by a caller.
    ///
    /// Logins may only contain ASCII alphanumerics, `-`, `_`, `.` and `[`/`]`
    /// (bot accounts such as `dependabot[bot]`), which keeps them safe to
    /// interpolate into a request path.
    ///
    /// # Errors
    ///
    /// Returns [`ExplorerError::InvalidLogin`] for empty values, values made
    /// only of dots, or values with other characters.
    pub fn new(value: &str) -> Result<Self, ExplorerError> {
        let is_valid = !value.is_empty()
            && !value.chars().all(|ch| ch == '.')
            && value
                .chars()
                .all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '-' | '_' | '.' | '[' | ']'));
        if !is_valid {
            return Err(ExplorerError::InvalidLogin {
                login: value.to_owned(),
            });
        }
        Ok(Self(value.to_owned()))
    }

    /// Borrow the login.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub(crate) fn repos_path(&self) -> String {
        format!("/users/{}/repos", self.0)
    }
}

impl fmt::Display for UserLogin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Personal access token wrapper enforcing presence.
#[derive(Clone, PartialEq, Eq)]
pub struct PersonalAccessToken(String);

impl PersonalAccessToken {
    /// Validates that the token is non-empty and trims whitespace.
    ///
    /// # Errors
    ///
    /// Returns `ExplorerError::MissingToken` when the supplied string is blank.
    pub fn new(token: impl AsRef<str>) -> Result<Self, ExplorerError> {
        let trimmed = token.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ExplorerError::MissingToken);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the token value.
    #[must_use]
    pub const fn value(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for PersonalAccessToken {
    fn as_ref(&self) -> &str {
        self.value()
    }
}

impl fmt::Debug for PersonalAccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PersonalAccessToken(***)")
    }
}
