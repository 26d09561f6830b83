//! UI components for the explorer TUI.
//!
//! Each component renders one region of the screen from a borrowed view
//! context.

mod search_bar;
mod user_list;

pub use search_bar::{SearchBarComponent, SearchBarViewContext};
pub use user_list::{UserListComponent, UserListViewContext};
