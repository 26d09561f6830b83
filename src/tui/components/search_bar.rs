//! Search input and its validation line.

use crate::github::error::ExplorerError;

/// Placeholder shown while the input is empty and unfocused.
const PLACEHOLDER: &str = "Search GitHub username...";

/// Cursor glyph drawn after the input while it has focus.
const CURSOR: char = '█';

/// Context for rendering the search bar.
#[derive(Debug, Clone)]
pub struct SearchBarViewContext<'a> {
    /// Current input text.
    pub input: &'a str,
    /// Whether the input has keyboard focus.
    pub focused: bool,
    /// Validation failure from the last submission.
    pub validation_error: Option<&'a ExplorerError>,
}

/// Renders the search input line followed by the validation line.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchBarComponent;

impl SearchBarComponent {
    /// Renders exactly two lines: the input and the validation message (or a
    /// blank line).
    #[must_use]
    pub fn view(ctx: &SearchBarViewContext<'_>) -> String {
        let mut output = String::from("Search: ");
        if ctx.focused {
            output.push_str(ctx.input);
            output.push(CURSOR);
        } else if ctx.input.is_empty() {
            output.push_str(PLACEHOLDER);
        } else {
            output.push_str(ctx.input);
        }
        output.push('\n');

        if let Some(error) = ctx.validation_error {
            output.push_str(&format!("  {error}"));
        }
        output.push('\n');
        output
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn unfocused_empty_input_shows_placeholder() {
        let ctx = SearchBarViewContext {
            input: "",
            focused: false,
            validation_error: None,
        };

        let output = SearchBarComponent::view(&ctx);

        assert_eq!(output, "Search: Search GitHub username...\n\n");
    }

    #[rstest]
    fn focused_input_shows_cursor_and_validation_message() {
        let ctx = SearchBarViewContext {
            input: "  ",
            focused: true,
            validation_error: Some(&ExplorerError::EmptyKeyword),
        };

        let output = SearchBarComponent::view(&ctx);

        assert_eq!(
            output,
            "Search:   █\n  Please enter at least 1 character\n"
        );
    }
}
