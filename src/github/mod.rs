//! GitHub user search and repository listing.
//!
//! This module wraps Octocrab to search accounts by keyword and page through
//! the repositories each account owns. Errors are mapped into user-friendly
//! variants so that callers can surface failures without exposing Octocrab
//! internals.

pub mod error;
pub mod gateway;
pub mod identity;
pub mod models;
pub mod pagination;

pub use error::{EMPTY_KEYWORD_MESSAGE, ExplorerError};
pub use gateway::{
    DEFAULT_API_BASE, ExplorerGateway, GatewaySettings, ListRepositoriesParams,
    OctocrabExplorerGateway,
};
pub use identity::{PersonalAccessToken, SearchKeyword, UserLogin};
pub use models::{Repository, User, UserSearchResult};
pub use pagination::{FIRST_PAGE, MAX_PER_PAGE, PageCursor};

#[cfg(test)]
pub use gateway::MockExplorerGateway;
