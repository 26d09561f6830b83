//! Gateways for searching users and listing repositories through Octocrab.
//!
//! The trait-based design lets the explorer and the TUI run against mocks in
//! tests while the Octocrab implementation handles real HTTP requests.

mod client;
mod error_mapping;
mod rest;
mod types;

pub use rest::OctocrabExplorerGateway;
pub use types::{DEFAULT_API_BASE, GatewaySettings, ListRepositoriesParams};

use async_trait::async_trait;

use crate::github::error::ExplorerError;
use crate::github::identity::{SearchKeyword, UserLogin};
use crate::github::models::{Repository, UserSearchResult};

/// Gateway that can search users and list their repositories.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExplorerGateway: Send + Sync {
    /// Search accounts whose login matches `keyword`, returning at most
    /// `per_page` users.
    async fn search_users(
        &self,
        keyword: &SearchKeyword,
        per_page: u8,
    ) -> Result<UserSearchResult, ExplorerError>;

    /// Fetch one page of repositories owned by `owner`.
    async fn list_repositories(
        &self,
        owner: &UserLogin,
        params: &ListRepositoriesParams,
    ) -> Result<Vec<Repository>, ExplorerError>;
}
