//! Navigation handlers, scrolling, and sentinel visibility.
//!
//! The cursor selects a row while the viewport scrolls by line. After every
//! cursor move the layout is refreshed, because scrolling can bring a
//! sentinel row into view and trigger the next repository page.

use bubbletea_rs::Cmd;

use super::ExplorerApp;
use crate::explorer::ViewRow;
use crate::github::identity::UserLogin;

impl ExplorerApp {
    /// First list line occupied by the row at `index`.
    fn row_top(&self, index: usize) -> usize {
        self.rows.iter().take(index).map(ViewRow::height).sum()
    }

    fn total_lines(&self) -> usize {
        self.rows.iter().map(ViewRow::height).sum()
    }

    /// Keeps the cursor on an existing row.
    pub(super) fn clamp_cursor(&mut self) {
        let max_index = self.rows.len().saturating_sub(1);
        self.cursor_position = self.cursor_position.min(max_index);
    }

    /// Adjusts the scroll offset so the selected row remains within the
    /// viewport, preferring its first line when it does not fit.
    pub(super) fn adjust_scroll_to_cursor(&mut self) {
        let visible_height = self.user_list.visible_height();

        // If nothing is visible, keep the scroll offset unchanged.
        if visible_height == 0 {
            return;
        }

        let max_scroll = self.total_lines().saturating_sub(visible_height);
        self.scroll_offset = self.scroll_offset.min(max_scroll);

        let top = self.row_top(self.cursor_position);
        let height = self
            .rows
            .get(self.cursor_position)
            .map_or(1, ViewRow::height);
        let bottom = top.saturating_add(height);

        if top < self.scroll_offset {
            self.scroll_offset = top;
            return;
        }

        let viewport_end = self.scroll_offset.saturating_add(visible_height);
        if bottom > viewport_end {
            self.scroll_offset = bottom.saturating_sub(visible_height).min(top);
        }
    }

    /// Owners whose sentinel row starts inside the viewport.
    pub(super) fn visible_sentinels(&self) -> Vec<UserLogin> {
        let start = self.scroll_offset;
        let end = start.saturating_add(self.user_list.visible_height());
        let mut owners = Vec::new();
        let mut top = 0_usize;
        for row in &self.rows {
            if let ViewRow::Sentinel { owner } = row
                && (start..end).contains(&top)
            {
                owners.push(owner.clone());
            }
            top = top.saturating_add(row.height());
        }
        owners
    }

    fn move_cursor_up(&mut self, step: usize) -> Option<Cmd> {
        self.cursor_position = self.cursor_position.saturating_sub(step);
        self.relayout(Vec::new())
    }

    fn move_cursor_down(&mut self, step: usize) -> Option<Cmd> {
        let max_index = self.rows.len().saturating_sub(1);
        self.cursor_position = self.cursor_position.saturating_add(step).min(max_index);
        self.relayout(Vec::new())
    }

    /// Handles cursor up navigation.
    pub(super) fn handle_cursor_up(&mut self) -> Option<Cmd> {
        self.move_cursor_up(1)
    }

    /// Handles cursor down navigation.
    pub(super) fn handle_cursor_down(&mut self) -> Option<Cmd> {
        self.move_cursor_down(1)
    }

    /// Handles page up navigation.
    pub(super) fn handle_page_up(&mut self) -> Option<Cmd> {
        let page_size = self.user_list.visible_height();
        self.move_cursor_up(page_size)
    }

    /// Handles page down navigation.
    pub(super) fn handle_page_down(&mut self) -> Option<Cmd> {
        let page_size = self.user_list.visible_height();
        self.move_cursor_down(page_size)
    }

    /// Handles Home key navigation.
    pub(super) fn handle_home(&mut self) -> Option<Cmd> {
        // Reset scroll offset to ensure the view starts at the top.
        self.scroll_offset = 0;
        self.cursor_position = 0;
        self.relayout(Vec::new())
    }

    /// Handles End key navigation.
    pub(super) fn handle_end(&mut self) -> Option<Cmd> {
        self.cursor_position = self.rows.len().saturating_sub(1);
        self.relayout(Vec::new())
    }
}
