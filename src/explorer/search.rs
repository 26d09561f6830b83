//! Keyword input and submission validation.

use crate::github::error::ExplorerError;
use crate::github::identity::SearchKeyword;

/// The single live search session.
///
/// Typing only edits the input; nothing is searched until
/// [`SearchSession::submit`] is called.
#[derive(Debug, Clone, Default)]
pub struct SearchSession {
    input: String,
    validation_error: Option<ExplorerError>,
    active: Option<SearchKeyword>,
}

impl SearchSession {
    /// Current contents of the search input.
    #[must_use]
    pub const fn input(&self) -> &str {
        self.input.as_str()
    }

    /// Replaces the search input.
    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    /// Appends a character to the search input.
    pub fn push_char(&mut self, ch: char) {
        self.input.push(ch);
    }

    /// Removes the last character of the search input.
    pub fn pop_char(&mut self) {
        self.input.pop();
    }

    /// Validation failure from the latest submission.
    #[must_use]
    pub const fn validation_error(&self) -> Option<&ExplorerError> {
        self.validation_error.as_ref()
    }

    /// Keyword of the latest valid submission.
    #[must_use]
    pub const fn active(&self) -> Option<&SearchKeyword> {
        self.active.as_ref()
    }

    /// Validates the input and makes it the active keyword.
    ///
    /// A rejected submission leaves the active keyword unchanged, so results
    /// already on screen stay visible under the validation message.
    ///
    /// # Errors
    ///
    /// Returns [`ExplorerError::EmptyKeyword`] when the trimmed input is
    /// empty.
    pub fn submit(&mut self) -> Result<SearchKeyword, ExplorerError> {
        match SearchKeyword::parse(&self.input) {
            Ok(keyword) => {
                self.validation_error = None;
                self.active = Some(keyword.clone());
                Ok(keyword)
            }
            Err(error) => {
                self.validation_error = Some(error.clone());
                Err(error)
            }
        }
    }
}
