//! Rendering logic for the explorer TUI application.
//!
//! These are pure query methods that read state without modification.

use super::ExplorerApp;
use crate::query::QueryStatus;
use crate::tui::components::{SearchBarComponent, SearchBarViewContext, UserListViewContext};
use crate::tui::input::InputContext;

impl ExplorerApp {
    /// Renders the header bar.
    pub(super) fn render_header(&self) -> String {
        let title = "GitHub Repositories Explorer";
        let loading_indicator = if self.explorer.search_status() == QueryStatus::Loading {
            " [Loading...]"
        } else {
            ""
        };
        format!("{title}{loading_indicator}\n")
    }

    /// Renders the search input and validation line.
    pub(super) fn render_search_bar(&self) -> String {
        let search = self.explorer.search();
        let ctx = SearchBarViewContext {
            input: search.input(),
            focused: self.focus == InputContext::Search,
            validation_error: search.validation_error(),
        };
        SearchBarComponent::view(&ctx)
    }

    /// Renders the result list padded to the list height.
    pub(super) fn render_user_list(&self) -> String {
        let list_height = self.calculate_list_height();
        let ctx = UserListViewContext {
            rows: &self.rows,
            cursor_position: self.cursor_position,
            scroll_offset: self.scroll_offset,
            visible_height: list_height,
            focused: self.focus == InputContext::List,
        };
        let mut output = self.user_list.view(&ctx);
        let rendered = output.lines().count();
        for _ in rendered..list_height {
            output.push('\n');
        }
        output
    }

    /// Renders the status bar with help hints.
    pub(super) fn render_status_bar(&self) -> String {
        let hints = match self.focus {
            InputContext::Search => "Enter:search  Tab:results  Ctrl-C:quit",
            InputContext::List => self.list_status_hints(),
        };
        format!("{hints}\n")
    }

    const fn list_status_hints(&self) -> &'static str {
        if self.width <= 80 {
            "q:quit  ?:help  j/k:move  Enter:toggle  /:search"
        } else {
            "j/k:move  Enter:toggle  n:more  r:refresh  /:search  ?:help  q:quit"
        }
    }

    /// Renders the help overlay if visible.
    pub(super) fn render_help_overlay(&self) -> String {
        if !self.show_help {
            return String::new();
        }

        let help_text = r"
=== Keyboard Shortcuts ===

Search input:
  text keys   Edit the keyword
  Backspace   Delete one character
  Enter       Search users
  Tab, Esc    Go to the results

Results:
  j, Down     Move cursor down
  k, Up       Move cursor up
  PgDn        Page down
  PgUp        Page up
  Home, g     Go to first row
  End, G      Go to last row
  Enter, Spc  Expand or collapse the user
  n           Load more repositories
  r           Reload the user's repositories
  /, Esc      Back to the search input

Other:
  ?           Toggle this help
  q, Ctrl-C   Quit

Press any key to close this help.
";
        help_text.to_owned()
    }
}
