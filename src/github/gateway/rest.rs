//! Octocrab-backed implementation of [`ExplorerGateway`].

use async_trait::async_trait;
use octocrab::Octocrab;

use crate::github::error::ExplorerError;
use crate::github::identity::{SearchKeyword, UserLogin};
use crate::github::models::{ApiRepository, ApiUserSearchResponse, Repository, UserSearchResult};

use super::ExplorerGateway;
use super::client::build_octocrab_client;
use super::error_mapping::map_octocrab_error;
use super::types::{GatewaySettings, ListRepositoriesParams, validate_per_page};

const SEARCH_USERS_ROUTE: &str = "/search/users";

/// Octocrab-backed gateway for user search and repository listing.
pub struct OctocrabExplorerGateway {
    client: Octocrab,
}

impl OctocrabExplorerGateway {
    /// Creates a new gateway from an Octocrab client.
    #[must_use]
    pub const fn new(client: Octocrab) -> Self {
        Self { client }
    }

    /// Builds an Octocrab client from the connection settings.
    ///
    /// # Errors
    ///
    /// Returns `ExplorerError::InvalidUrl` when the base URI cannot be parsed
    /// or `ExplorerError::Api` when Octocrab fails to construct a client.
    pub fn from_settings(settings: &GatewaySettings) -> Result<Self, ExplorerError> {
        let octocrab = build_octocrab_client(settings)?;
        Ok(Self::new(octocrab))
    }
}

#[async_trait]
impl ExplorerGateway for OctocrabExplorerGateway {
    async fn search_users(
        &self,
        keyword: &SearchKeyword,
        per_page: u8,
    ) -> Result<UserSearchResult, ExplorerError> {
        validate_per_page(per_page)?;

        let per_page_str = per_page.to_string();
        let query_params = [("q", keyword.as_str()), ("per_page", per_page_str.as_str())];

        let response: ApiUserSearchResponse = self
            .client
            .get(SEARCH_USERS_ROUTE, Some(&query_params))
            .await
            .map_err(|error| map_octocrab_error("search users", &error))?;

        Ok(response.into())
    }

    async fn list_repositories(
        &self,
        owner: &UserLogin,
        params: &ListRepositoriesParams,
    ) -> Result<Vec<Repository>, ExplorerError> {
        params.validate()?;

        let page_str = params.page.to_string();
        let per_page_str = params.per_page.to_string();
        let query_params = [
            ("page", page_str.as_str()),
            ("per_page", per_page_str.as_str()),
        ];

        let items: Vec<ApiRepository> = self
            .client
            .get(owner.repos_path(), Some(&query_params))
            .await
            .map_err(|error| map_octocrab_error("list repositories", &error))?;

        Ok(items.into_iter().map(Repository::from).collect())
    }
}
