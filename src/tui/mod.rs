//! Terminal user interface for searching users and browsing repositories.
//!
//! The TUI follows the Model-View-Update (MVU) pattern of bubbletea-rs:
//!
//! - **Model**: [`app::ExplorerApp`] wraps the [`Explorer`](crate::explorer::Explorer)
//!   service together with focus, cursor, and viewport state
//! - **View**: [`app::ExplorerApp`] renders a header, the search bar, the
//!   result list, and a status bar
//! - **Update**: key presses become [`messages::AppMsg`] values; fetches run
//!   as commands and report back with [`messages::AppMsg::FetchCompleted`]
//!
//! # Startup context
//!
//! bubbletea-rs constructs the model through the static `Model::init`, so the
//! gateway, page sizes, and optional initial query are stored in module-level
//! storage beforehand. Call [`set_explorer_context`] before starting the
//! program, and [`set_initial_terminal_size`] so the first frame matches the
//! terminal.

use std::sync::{Arc, OnceLock};

use crossterm::terminal;

use crate::github::gateway::ExplorerGateway;
use crate::query::QuerySettings;

pub mod app;
pub mod components;
pub mod input;
pub mod messages;

pub use app::ExplorerApp;

static EXPLORER_CONTEXT: OnceLock<ExplorerContext> = OnceLock::new();

/// Terminal dimensions read by `ExplorerApp::new()` for the first frame.
static INITIAL_TERMINAL_SIZE: OnceLock<(u16, u16)> = OnceLock::new();

/// Dimensions used when neither storage nor the terminal reports a size.
const FALLBACK_TERMINAL_SIZE: (u16, u16) = (80, 24);

/// Everything `ExplorerApp::init()` needs to build the model.
struct ExplorerContext {
    gateway: Arc<dyn ExplorerGateway>,
    settings: QuerySettings,
    initial_query: Option<String>,
}

/// Stores the gateway, page sizes, and initial query for the TUI.
///
/// This must be called before starting the bubbletea-rs program. Without it
/// the application starts with default page sizes and every fetch fails with
/// an error message.
///
/// # Returns
///
/// `true` if the context was set, `false` if it was already set.
pub fn set_explorer_context(
    gateway: Arc<dyn ExplorerGateway>,
    settings: QuerySettings,
    initial_query: Option<String>,
) -> bool {
    EXPLORER_CONTEXT
        .set(ExplorerContext {
            gateway,
            settings,
            initial_query,
        })
        .is_ok()
}

/// Gateway stored by [`set_explorer_context`].
pub(crate) fn explorer_gateway() -> Option<Arc<dyn ExplorerGateway>> {
    EXPLORER_CONTEXT
        .get()
        .map(|context| Arc::clone(&context.gateway))
}

/// Page sizes stored by [`set_explorer_context`], or the defaults.
pub(crate) fn explorer_settings() -> QuerySettings {
    EXPLORER_CONTEXT
        .get()
        .map(|context| context.settings)
        .unwrap_or_default()
}

/// Initial query stored by [`set_explorer_context`].
pub(crate) fn initial_query() -> Option<String> {
    EXPLORER_CONTEXT
        .get()
        .and_then(|context| context.initial_query.clone())
}

/// Stores the terminal dimensions used for the first frame.
///
/// # Returns
///
/// `true` if the dimensions were set, `false` if they were already set.
pub fn set_initial_terminal_size(width: u16, height: u16) -> bool {
    INITIAL_TERMINAL_SIZE.set((width, height)).is_ok()
}

/// Dimensions for the first frame: stored, then queried, then 80x24.
pub(crate) fn initial_terminal_size() -> (u16, u16) {
    resolve_terminal_size(INITIAL_TERMINAL_SIZE.get().copied(), || {
        terminal::size().ok()
    })
}

/// Picks the first non-empty size, querying the terminal only when needed.
fn resolve_terminal_size<F>(stored: Option<(u16, u16)>, query: F) -> (u16, u16)
where
    F: FnOnce() -> Option<(u16, u16)>,
{
    let usable = |(width, height): &(u16, u16)| *width > 0 && *height > 0;
    stored
        .filter(usable)
        .or_else(|| query().filter(usable))
        .unwrap_or(FALLBACK_TERMINAL_SIZE)
}
