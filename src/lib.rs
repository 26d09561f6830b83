//! Reposcope library crate: a terminal explorer for GitHub users and their
//! repositories.
//!
//! The library wraps Octocrab to search users by keyword and to page through
//! each user's repositories, caches every request in a keyed query store, and
//! drives a bubbletea-rs terminal interface on top of the [`Explorer`]
//! service.

pub mod config;
pub mod explorer;
pub mod github;
pub mod logging;
pub mod query;
pub mod tui;

pub use config::ExplorerConfig;
pub use explorer::{Explorer, FetchOutcome, FetchRequest, ViewRow};
pub use github::{
    ExplorerError, ExplorerGateway, GatewaySettings, ListRepositoriesParams,
    OctocrabExplorerGateway, PersonalAccessToken, Repository, SearchKeyword, User, UserLogin,
    UserSearchResult,
};
pub use logging::init_logging;
pub use query::{QuerySettings, QueryStatus};
