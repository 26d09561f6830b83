//! Message types for the TUI update loop.
//!
//! Messages represent user actions, completed fetches, and terminal events.

use crate::explorer::FetchOutcome;

/// Messages for the explorer TUI application.
#[derive(Debug, Clone)]
pub enum AppMsg {
    // Search input
    /// Append a character to the search input.
    InputChar(char),
    /// Delete the last character of the search input.
    DeleteChar,
    /// Submit the search input.
    SubmitSearch,
    /// Move keyboard focus to the search input.
    FocusSearch,
    /// Move keyboard focus to the result list.
    FocusList,

    // Navigation
    /// Move cursor up one row.
    CursorUp,
    /// Move cursor down one row.
    CursorDown,
    /// Move cursor up one page.
    PageUp,
    /// Move cursor down one page.
    PageDown,
    /// Move cursor to the first row.
    Home,
    /// Move cursor to the last row.
    End,

    // Panels
    /// Expand or collapse the panel under the cursor.
    TogglePanel,
    /// Request the next repository page of the panel under the cursor.
    LoadMore,
    /// Reload the repositories of the panel under the cursor.
    RefreshPanel,

    // Data loading
    /// Fetches finished; each outcome is handed to the explorer.
    FetchCompleted(Vec<FetchOutcome>),

    // Application lifecycle
    /// Quit the application.
    Quit,
    /// Toggle help overlay.
    ToggleHelp,

    // Window events
    /// Terminal window was resized.
    WindowResized {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },
}

impl AppMsg {
    /// Returns true for messages that edit or move focus away from the
    /// search input.
    #[must_use]
    pub const fn is_search(&self) -> bool {
        matches!(
            self,
            Self::InputChar(_)
                | Self::DeleteChar
                | Self::SubmitSearch
                | Self::FocusSearch
                | Self::FocusList
        )
    }

    /// Returns true for cursor movement messages.
    #[must_use]
    pub const fn is_navigation(&self) -> bool {
        matches!(
            self,
            Self::CursorUp
                | Self::CursorDown
                | Self::PageUp
                | Self::PageDown
                | Self::Home
                | Self::End
        )
    }

    /// Returns true for messages acting on the panel under the cursor.
    #[must_use]
    pub const fn is_panel(&self) -> bool {
        matches!(self, Self::TogglePanel | Self::LoadMore | Self::RefreshPanel)
    }
}
