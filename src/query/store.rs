//! The keyed store and its fetch descriptors.

use std::collections::HashMap;

use crate::github::error::ExplorerError;
use crate::github::gateway::ListRepositoriesParams;
use crate::github::identity::{SearchKeyword, UserLogin};
use crate::github::models::{Repository, UserSearchResult};
use crate::github::pagination::MAX_PER_PAGE;

use super::state::{InFlightPage, PagedQueryState, QueryState};

/// Users requested per search, matching the compact result list.
pub const DEFAULT_USERS_PER_PAGE: u8 = 5;

/// Page sizes used when building fetch descriptors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuerySettings {
    /// `per_page` for user searches.
    pub users_per_page: u8,
    /// `per_page` for repository listings; a shorter page ends pagination.
    pub repos_page_size: u8,
}

impl Default for QuerySettings {
    fn default() -> Self {
        Self {
            users_per_page: DEFAULT_USERS_PER_PAGE,
            repos_page_size: MAX_PER_PAGE,
        }
    }
}

/// Descriptor for one user search request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsersFetch {
    generation: u64,
    keyword: SearchKeyword,
    per_page: u8,
}

impl UsersFetch {
    /// Keyword to search for.
    #[must_use]
    pub const fn keyword(&self) -> &SearchKeyword {
        &self.keyword
    }

    /// Number of users to request.
    #[must_use]
    pub const fn per_page(&self) -> u8 {
        self.per_page
    }
}

/// Descriptor for one repository page request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoriesFetch {
    generation: u64,
    owner: UserLogin,
    params: ListRepositoriesParams,
}

impl RepositoriesFetch {
    /// Owner whose repositories are listed.
    #[must_use]
    pub const fn owner(&self) -> &UserLogin {
        &self.owner
    }

    /// Page and page size to request.
    #[must_use]
    pub const fn params(&self) -> &ListRepositoriesParams {
        &self.params
    }
}

/// Outcome of handing a result back to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The result was stored under its key.
    Applied,
    /// The request was superseded or invalidated; the result was dropped.
    Stale,
}

/// Keyed request cache for user searches and repository listings.
#[derive(Debug, Clone)]
pub struct QueryStore {
    settings: QuerySettings,
    users: HashMap<SearchKeyword, QueryState<UserSearchResult>>,
    repositories: HashMap<UserLogin, PagedQueryState<Repository>>,
    last_generation: u64,
}

impl Default for QueryStore {
    fn default() -> Self {
        Self::new(QuerySettings::default())
    }
}

impl QueryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new(settings: QuerySettings) -> Self {
        Self {
            settings,
            users: HashMap::new(),
            repositories: HashMap::new(),
            last_generation: 0,
        }
    }

    /// Page sizes used for new requests.
    #[must_use]
    pub const fn settings(&self) -> &QuerySettings {
        &self.settings
    }

    const fn next_generation(&mut self) -> u64 {
        self.last_generation = self.last_generation.wrapping_add(1);
        self.last_generation
    }

    /// Cached state of the search for `keyword`.
    #[must_use]
    pub fn users(&self, keyword: &SearchKeyword) -> Option<&QueryState<UserSearchResult>> {
        self.users.get(keyword)
    }

    /// Cached repository listing for `owner`.
    #[must_use]
    pub fn repositories(&self, owner: &UserLogin) -> Option<&PagedQueryState<Repository>> {
        self.repositories.get(owner)
    }

    /// Starts a search for `keyword` unless one is already in flight.
    ///
    /// A completed entry is refetched: an explicit submission always asks
    /// GitHub again.
    pub fn begin_user_search(&mut self, keyword: &SearchKeyword) -> Option<UsersFetch> {
        if self
            .users
            .get(keyword)
            .is_some_and(QueryState::is_fetching)
        {
            tracing::debug!(%keyword, "user search already in flight");
            return None;
        }

        let generation = self.next_generation();
        let entry = self.users.entry(keyword.clone()).or_default();
        entry.in_flight = Some(generation);

        Some(UsersFetch {
            generation,
            keyword: keyword.clone(),
            per_page: self.settings.users_per_page,
        })
    }

    /// Stores the result of a search started by [`QueryStore::begin_user_search`].
    pub fn resolve_user_search(
        &mut self,
        fetch: &UsersFetch,
        result: Result<UserSearchResult, ExplorerError>,
    ) -> Resolution {
        let Some(entry) = self.users.get_mut(&fetch.keyword) else {
            return Resolution::Stale;
        };
        if entry.in_flight != Some(fetch.generation) {
            tracing::debug!(keyword = %fetch.keyword, "dropping stale user search result");
            return Resolution::Stale;
        }

        entry.in_flight = None;
        match result {
            Ok(data) => {
                entry.data = Some(data);
                entry.error = None;
            }
            Err(error) => {
                entry.error = Some(error);
            }
        }
        Resolution::Applied
    }

    /// Starts loading the first repository page for `owner`.
    ///
    /// Returns `None` when pages are already cached or a request is in flight.
    /// An entry whose first page failed is retried.
    pub fn begin_first_page(&mut self, owner: &UserLogin) -> Option<RepositoriesFetch> {
        let per_page = self.settings.repos_page_size;
        let generation = self.next_generation();
        let entry = self
            .repositories
            .entry(owner.clone())
            .or_insert_with(|| PagedQueryState::new(per_page));

        if entry.is_fetching() || entry.page_count() > 0 {
            return None;
        }

        Some(start_page(owner, entry, generation))
    }

    /// Starts loading the page after the last one loaded for `owner`.
    ///
    /// Requires a loaded, full last page and no request in flight. A failed
    /// later page is retried.
    pub fn begin_next_page(&mut self, owner: &UserLogin) -> Option<RepositoriesFetch> {
        let generation = self.next_generation();
        let entry = self.repositories.get_mut(owner)?;

        if entry.is_fetching() || entry.page_count() == 0 {
            return None;
        }
        let retrying = entry.error.is_some();
        if !retrying && !entry.has_next_page() {
            return None;
        }

        Some(start_page(owner, entry, generation))
    }

    /// Stores a repository page started by one of the `begin_*_page` methods.
    pub fn resolve_repositories(
        &mut self,
        fetch: &RepositoriesFetch,
        result: Result<Vec<Repository>, ExplorerError>,
    ) -> Resolution {
        let expected = InFlightPage {
            generation: fetch.generation,
            page: fetch.params.page,
        };
        let Some(entry) = self.repositories.get_mut(&fetch.owner) else {
            tracing::debug!(owner = %fetch.owner, "dropping repositories for evicted entry");
            return Resolution::Stale;
        };
        if entry.in_flight != Some(expected) {
            tracing::debug!(owner = %fetch.owner, page = fetch.params.page, "dropping stale repository page");
            return Resolution::Stale;
        }

        entry.in_flight = None;
        match result {
            Ok(items) => {
                entry.cursor.record_page(items.len());
                entry.pages.push(items);
                entry.error = None;
            }
            Err(error) => {
                entry.error = Some(error);
            }
        }
        Resolution::Applied
    }

    /// Drops the cached listing for `owner`; an in-flight page for it
    /// resolves as stale.
    pub fn invalidate_repositories(&mut self, owner: &UserLogin) -> bool {
        self.repositories.remove(owner).is_some()
    }

    /// Drops settled searches for every keyword other than `active`.
    ///
    /// Searches still in flight are kept so their results resolve normally.
    pub fn prune_user_searches(&mut self, active: &SearchKeyword) {
        self.users
            .retain(|keyword, state| keyword == active || state.is_fetching());
    }

    /// Keeps only the repository listings whose owner satisfies `keep`.
    pub fn retain_repositories<F>(&mut self, mut keep: F)
    where
        F: FnMut(&UserLogin) -> bool,
    {
        self.repositories.retain(|owner, _| keep(owner));
    }
}

fn start_page(
    owner: &UserLogin,
    entry: &mut PagedQueryState<Repository>,
    generation: u64,
) -> RepositoriesFetch {
    let params = ListRepositoriesParams {
        page: entry.cursor.next_page(),
        per_page: entry.cursor.per_page(),
    };
    entry.in_flight = Some(InFlightPage {
        generation,
        page: params.page,
    });

    RepositoriesFetch {
        generation,
        owner: owner.clone(),
        params,
    }
}
