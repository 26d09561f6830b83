//! Scrollable list of user panels and their repositories.
//!
//! The list scrolls by terminal line rather than by row because repository
//! rows span three lines.

use crate::explorer::{
    LOADING_MORE_TEXT, NO_REPOSITORIES_TEXT, NO_USERS_TEXT, REPOSITORIES_FAILED_TEXT,
    REPOSITORIES_LOADING_TEXT, USERS_FAILED_TEXT, USERS_LOADING_TEXT, ViewRow,
};

/// Default visible height for the list component.
const DEFAULT_VISIBLE_HEIGHT: usize = 20;

/// Shown before the first search.
const IDLE_TEXT: &str = "Type a GitHub username and press Enter.";

/// Text of the row marking a listing with further pages.
const SENTINEL_TEXT: &str = "... (n: load more)";

/// Context for rendering the user list.
#[derive(Debug, Clone)]
pub struct UserListViewContext<'a> {
    /// Rows laid out by the explorer.
    pub rows: &'a [ViewRow],
    /// Index of the selected row.
    pub cursor_position: usize,
    /// Number of lines scrolled from the top.
    pub scroll_offset: usize,
    /// Maximum visible height in lines.
    pub visible_height: usize,
    /// Whether the list has keyboard focus.
    pub focused: bool,
}

/// Component for displaying the user panels.
#[derive(Debug, Clone)]
pub struct UserListComponent {
    visible_height: usize,
}

impl Default for UserListComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl UserListComponent {
    /// Creates a new list component.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            visible_height: DEFAULT_VISIBLE_HEIGHT,
        }
    }

    /// Updates the visible height for scrolling calculations.
    pub const fn set_visible_height(&mut self, height: usize) {
        self.visible_height = height;
    }

    /// Returns the visible height.
    #[must_use]
    pub const fn visible_height(&self) -> usize {
        self.visible_height
    }

    /// Renders the lines of the list that fall inside the viewport.
    #[must_use]
    pub fn view(&self, ctx: &UserListViewContext<'_>) -> String {
        if ctx.rows.is_empty() {
            return format!("  {IDLE_TEXT}\n");
        }

        let visible_height = if ctx.visible_height > 0 {
            ctx.visible_height
        } else {
            self.visible_height
        };

        let mut output = String::new();
        let lines = ctx.rows.iter().enumerate().flat_map(|(index, row)| {
            let selected = ctx.focused && index == ctx.cursor_position;
            row_lines(row, selected)
        });
        for line in lines.skip(ctx.scroll_offset).take(visible_height) {
            output.push_str(&line);
            output.push('\n');
        }
        output
    }
}

/// Formats one row as its terminal lines.
fn row_lines(row: &ViewRow, selected: bool) -> Vec<String> {
    let marker = if selected { ">" } else { " " };
    match row {
        ViewRow::UsersLoading => vec![format!("{marker} {USERS_LOADING_TEXT}")],
        ViewRow::UsersFailed => vec![format!("{marker} {USERS_FAILED_TEXT}")],
        ViewRow::NoUsers => vec![format!("{marker} {NO_USERS_TEXT}")],
        ViewRow::UserHeader { login, expanded } => {
            let arrow = if *expanded { '▲' } else { '▼' };
            vec![format!("{marker} {arrow} {login}")]
        }
        ViewRow::RepositoriesLoading { .. } => {
            vec![format!("{marker}     {REPOSITORIES_LOADING_TEXT}")]
        }
        ViewRow::RepositoriesFailed { .. } => {
            vec![format!("{marker}     {REPOSITORIES_FAILED_TEXT}")]
        }
        ViewRow::NoRepositories { .. } => vec![format!("{marker}     {NO_REPOSITORIES_TEXT}")],
        ViewRow::Repository { lines, .. } => vec![
            format!("{marker}     {}", lines.name),
            format!("        {}", lines.description),
            format!("        {}", lines.summary),
        ],
        ViewRow::LoadingMore { .. } => vec![format!("{marker}     {LOADING_MORE_TEXT}")],
        ViewRow::Sentinel { .. } => vec![format!("{marker}     {SENTINEL_TEXT}")],
    }
}
