//! Input handling for the TUI application.
//!
//! Keys mean different things depending on focus: while the search input is
//! focused printable characters are typed, while the result list is focused
//! they navigate and act on panels.

use crossterm::event::{KeyCode, KeyModifiers};

use super::messages::AppMsg;

/// Which part of the screen receives key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputContext {
    /// The search input.
    #[default]
    Search,
    /// The result list.
    List,
}

/// Maps a key event to an application message for the given context.
///
/// Returns `None` for unrecognised key events, allowing them to be ignored.
#[must_use]
pub fn map_key_to_message_with_context(
    key: &bubbletea_rs::event::KeyMsg,
    context: InputContext,
) -> Option<AppMsg> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.key {
            KeyCode::Char('c') => Some(AppMsg::Quit),
            _ => None,
        };
    }

    match context {
        InputContext::Search => map_search_key(key),
        InputContext::List => map_list_key(key),
    }
}

#[expect(
    clippy::missing_const_for_fn,
    reason = "KeyCode match patterns prevent const evaluation"
)]
fn map_search_key(key: &bubbletea_rs::event::KeyMsg) -> Option<AppMsg> {
    match key.key {
        KeyCode::Enter => Some(AppMsg::SubmitSearch),
        KeyCode::Backspace => Some(AppMsg::DeleteChar),
        KeyCode::Tab | KeyCode::Down | KeyCode::Esc => Some(AppMsg::FocusList),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::ALT) => {
            Some(AppMsg::InputChar(ch))
        }
        _ => None,
    }
}

#[expect(
    clippy::missing_const_for_fn,
    reason = "KeyCode match patterns prevent const evaluation"
)]
fn map_list_key(key: &bubbletea_rs::event::KeyMsg) -> Option<AppMsg> {
    match key.key {
        KeyCode::Char('q') => Some(AppMsg::Quit),
        KeyCode::Char('j') | KeyCode::Down => Some(AppMsg::CursorDown),
        KeyCode::Char('k') | KeyCode::Up => Some(AppMsg::CursorUp),
        KeyCode::PageDown => Some(AppMsg::PageDown),
        KeyCode::PageUp => Some(AppMsg::PageUp),
        KeyCode::Home | KeyCode::Char('g') => Some(AppMsg::Home),
        KeyCode::End | KeyCode::Char('G') => Some(AppMsg::End),
        KeyCode::Enter | KeyCode::Char(' ') => Some(AppMsg::TogglePanel),
        KeyCode::Char('n') => Some(AppMsg::LoadMore),
        KeyCode::Char('r') => Some(AppMsg::RefreshPanel),
        KeyCode::Char('/') | KeyCode::Esc | KeyCode::Tab => Some(AppMsg::FocusSearch),
        KeyCode::Char('?') => Some(AppMsg::ToggleHelp),
        _ => None,
    }
}
