//! Main TUI application model implementing the MVU pattern.
//!
//! This module provides the application state and update logic for the
//! explorer TUI. It routes key presses to the search input or the result
//! list, turns explorer fetch requests into commands, and keeps the cursor
//! and viewport consistent with the rows the explorer lays out.
//!
//! # Module Structure
//!
//! - `fetch_handlers`: Command construction and fetch completion
//! - `model_impl`: `bubbletea_rs::Model` implementation and viewport
//!   normalisation
//! - `navigation`: Cursor movement, scrolling, and sentinel visibility
//! - `rendering`: Header, status bar, and help overlay

use std::fmt;
use std::sync::Arc;

use bubbletea_rs::Cmd;

use crate::explorer::{Explorer, FetchRequest, ViewRow};
use crate::github::gateway::ExplorerGateway;
use crate::github::identity::UserLogin;

use super::components::UserListComponent;
use super::input::InputContext;
use super::messages::AppMsg;

mod fetch_handlers;
mod model_impl;
mod navigation;
mod rendering;

/// Rows used by the header, search input, validation line, and status bar.
pub(crate) const CHROME_HEIGHT: usize = 4;

/// Main application model for the explorer TUI.
pub struct ExplorerApp {
    /// Search, panel, and cache state.
    pub(crate) explorer: Explorer,
    /// Gateway used by fetch commands.
    gateway: Option<Arc<dyn ExplorerGateway>>,
    /// Rows laid out from the explorer after the last state change.
    pub(crate) rows: Vec<ViewRow>,
    /// Which region receives key presses.
    pub(crate) focus: InputContext,
    /// Index of the selected row.
    pub(crate) cursor_position: usize,
    /// Number of list lines scrolled from the top.
    pub(crate) scroll_offset: usize,
    /// Terminal dimensions.
    width: u16,
    height: u16,
    /// Whether help overlay is visible.
    pub(crate) show_help: bool,
    /// Result list component.
    user_list: UserListComponent,
}

impl fmt::Debug for ExplorerApp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExplorerApp")
            .field("explorer", &self.explorer)
            .field("has_gateway", &self.gateway.is_some())
            .field("rows", &self.rows)
            .field("focus", &self.focus)
            .field("cursor_position", &self.cursor_position)
            .field("scroll_offset", &self.scroll_offset)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("show_help", &self.show_help)
            .finish_non_exhaustive()
    }
}

impl ExplorerApp {
    /// Creates an application sized to the initial terminal dimensions.
    ///
    /// Uses the size stored by
    /// [`set_initial_terminal_size`](crate::tui::set_initial_terminal_size),
    /// then the size crossterm reports, then 80x24. Without a gateway every
    /// fetch resolves immediately with an error.
    #[must_use]
    pub fn new(explorer: Explorer, gateway: Option<Arc<dyn ExplorerGateway>>) -> Self {
        let (width, height) = super::initial_terminal_size();
        Self::with_dimensions(explorer, gateway, width, height)
    }

    /// Creates an application with explicit terminal dimensions.
    #[must_use]
    pub fn with_dimensions(
        explorer: Explorer,
        gateway: Option<Arc<dyn ExplorerGateway>>,
        width: u16,
        height: u16,
    ) -> Self {
        let rows = explorer.rows();
        let mut app = Self {
            explorer,
            gateway,
            rows,
            focus: InputContext::Search,
            cursor_position: 0,
            scroll_offset: 0,
            width,
            height,
            show_help: false,
            user_list: UserListComponent::new(),
        };
        app.set_visible_list_height();
        app
    }

    /// The explorer state behind the view.
    #[must_use]
    pub const fn explorer(&self) -> &Explorer {
        &self.explorer
    }

    /// Rows currently displayed in the result list.
    #[must_use]
    pub fn rows(&self) -> &[ViewRow] {
        &self.rows
    }

    /// Returns the current cursor position.
    #[must_use]
    pub const fn cursor_position(&self) -> usize {
        self.cursor_position
    }

    /// Region that currently receives key presses.
    #[must_use]
    pub const fn focus(&self) -> InputContext {
        self.focus
    }

    /// Owner of the panel the selected row belongs to.
    fn selected_owner(&self) -> Option<UserLogin> {
        self.rows
            .get(self.cursor_position)
            .and_then(ViewRow::owner)
            .cloned()
    }

    /// Handles a message and updates state accordingly.
    ///
    /// This method is the core update function that processes all application
    /// messages and returns any resulting commands. It delegates to specialised
    /// handlers for each message category.
    pub fn handle_message(&mut self, msg: &AppMsg) -> Option<Cmd> {
        if msg.is_search() {
            return self.handle_search_msg(msg);
        }
        if msg.is_navigation() {
            return self.handle_navigation_msg(msg);
        }
        if msg.is_panel() {
            return self.handle_panel_msg(msg);
        }
        if let AppMsg::FetchCompleted(outcomes) = msg {
            return self.handle_fetch_completed(outcomes);
        }
        self.handle_lifecycle_msg(msg)
    }

    /// Dispatches search input messages to their handlers.
    fn handle_search_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::InputChar(ch) => {
                self.explorer.push_char(*ch);
                None
            }
            AppMsg::DeleteChar => {
                self.explorer.pop_char();
                None
            }
            AppMsg::SubmitSearch => self.handle_submit_search(),
            AppMsg::FocusSearch => {
                self.focus = InputContext::Search;
                None
            }
            AppMsg::FocusList => {
                self.focus = InputContext::List;
                None
            }
            _ => {
                debug_assert!(false, "non-search message routed to handle_search_msg");
                None
            }
        }
    }

    /// Dispatches navigation messages to their handlers.
    fn handle_navigation_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::CursorUp => self.handle_cursor_up(),
            AppMsg::CursorDown => self.handle_cursor_down(),
            AppMsg::PageUp => self.handle_page_up(),
            AppMsg::PageDown => self.handle_page_down(),
            AppMsg::Home => self.handle_home(),
            AppMsg::End => self.handle_end(),
            _ => {
                debug_assert!(
                    false,
                    "non-navigation message routed to handle_navigation_msg"
                );
                None
            }
        }
    }

    /// Dispatches panel messages for the panel under the cursor.
    fn handle_panel_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        let owner = self.selected_owner()?;
        match msg {
            AppMsg::TogglePanel => self.handle_toggle_panel(&owner),
            AppMsg::LoadMore => {
                let request = self.explorer.load_more(&owner);
                self.relayout(request.into_iter().collect())
            }
            AppMsg::RefreshPanel => {
                let request = self.explorer.refresh_panel(&owner);
                self.relayout(request.into_iter().collect())
            }
            _ => {
                debug_assert!(false, "non-panel message routed to handle_panel_msg");
                None
            }
        }
    }

    /// Dispatches lifecycle and window messages to their handlers.
    fn handle_lifecycle_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::Quit => Some(bubbletea_rs::quit()),
            AppMsg::ToggleHelp => {
                self.show_help = !self.show_help;
                None
            }
            AppMsg::WindowResized { width, height } => self.handle_resize(*width, *height),
            _ => {
                debug_assert!(
                    false,
                    "non-lifecycle message routed to handle_lifecycle_msg"
                );
                None
            }
        }
    }

    fn handle_submit_search(&mut self) -> Option<Cmd> {
        let request = self.explorer.submit_search();
        if self.explorer.search().validation_error().is_none() {
            self.focus = InputContext::List;
            self.cursor_position = 0;
            self.scroll_offset = 0;
        }
        self.relayout(request.into_iter().collect())
    }

    /// Toggles a panel; collapsing moves the cursor back to its header so it
    /// never points into rows that disappeared.
    fn handle_toggle_panel(&mut self, owner: &UserLogin) -> Option<Cmd> {
        let request = self.explorer.toggle_panel(owner);
        if !self.explorer.is_expanded(owner) {
            self.rows = self.explorer.rows();
            if let Some(index) = self.header_index(owner) {
                self.cursor_position = index;
            }
        }
        self.relayout(request.into_iter().collect())
    }

    fn header_index(&self, owner: &UserLogin) -> Option<usize> {
        self.rows
            .iter()
            .position(|row| matches!(row, ViewRow::UserHeader { login, .. } if login == owner))
    }

    // Window event handlers

    fn handle_resize(&mut self, width: u16, height: u16) -> Option<Cmd> {
        self.width = width;
        self.height = height;
        self.set_visible_list_height();
        self.relayout(Vec::new())
    }

    /// Rows available to the result list.
    pub(super) fn calculate_list_height(&self) -> usize {
        usize::from(self.height)
            .saturating_sub(CHROME_HEIGHT)
            .max(1)
    }

    fn set_visible_list_height(&mut self) {
        let list_height = self.calculate_list_height();
        self.user_list.set_visible_height(list_height);
    }

    /// Re-derives the rows after a state change, keeps the cursor in view,
    /// and starts `requests` together with any page requests triggered by
    /// newly visible sentinels.
    pub(super) fn relayout(&mut self, mut requests: Vec<FetchRequest>) -> Option<Cmd> {
        self.rows = self.explorer.rows();
        self.clamp_cursor();
        self.adjust_scroll_to_cursor();

        let triggered = self.explorer.sentinels_visible(self.visible_sentinels());
        if !triggered.is_empty() {
            self.rows = self.explorer.rows();
            requests.extend(triggered);
        }
        self.fetch_cmd(requests)
    }
}
