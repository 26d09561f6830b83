//! Explorer service: the search session, panel state, and the query store.
//!
//! [`Explorer`] owns every piece of interaction state. User actions are
//! methods that mutate that state and return the [`FetchRequest`]s they
//! require; the caller executes each request against an
//! [`ExplorerGateway`] and hands the [`FetchOutcome`] back through
//! [`Explorer::apply`]. Presentation is derived from the state by
//! [`Explorer::rows`].

use std::collections::HashSet;
use std::time::Instant;

use crate::github::error::ExplorerError;
use crate::github::gateway::ExplorerGateway;
use crate::github::identity::UserLogin;
use crate::github::models::{Repository, User, UserSearchResult};
use crate::query::{
    PagedQueryState, QuerySettings, QueryStatus, QueryStore, RepositoriesFetch, Resolution,
    UsersFetch,
};

mod panels;
mod search;
mod sentinel;
mod view;

pub use panels::PanelSet;
pub use search::SearchSession;
pub use sentinel::SentinelTracker;
pub use view::{
    LOADING_MORE_TEXT, NO_REPOSITORIES_TEXT, NO_USERS_TEXT, REPOSITORIES_FAILED_TEXT,
    REPOSITORIES_LOADING_TEXT, RepositoryLines, USERS_FAILED_TEXT, USERS_LOADING_TEXT, ViewRow,
};


/// A request the caller must execute against the gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchRequest {
    /// Search users by keyword.
    Users(UsersFetch),
    /// Load one page of a user's repositories.
    Repositories(RepositoriesFetch),
}

/// Result of executing a [`FetchRequest`].
#[derive(Debug, Clone)]
pub enum FetchOutcome {
    /// Completed user search.
    Users {
        /// Request that produced the result.
        fetch: UsersFetch,
        /// Search result or failure.
        result: Result<UserSearchResult, ExplorerError>,
    },
    /// Completed repository page.
    Repositories {
        /// Request that produced the result.
        fetch: RepositoriesFetch,
        /// Page contents or failure.
        result: Result<Vec<Repository>, ExplorerError>,
    },
}

impl FetchRequest {
    /// Executes the request and wraps the result for [`Explorer::apply`].
    pub async fn execute(self, gateway: &dyn ExplorerGateway) -> FetchOutcome {
        let start = Instant::now();
        match self {
            Self::Users(fetch) => {
                tracing::debug!(
                    keyword = %fetch.keyword(),
                    per_page = fetch.per_page(),
                    "searching users"
                );
                let result = gateway
                    .search_users(fetch.keyword(), fetch.per_page())
                    .await;
                let latency_ms = elapsed_ms(start);
                match &result {
                    Ok(found) => tracing::info!(
                        keyword = %fetch.keyword(),
                        count = found.items.len(),
                        latency_ms,
                        "user search completed"
                    ),
                    Err(error) => tracing::warn!(
                        keyword = %fetch.keyword(),
                        latency_ms,
                        %error,
                        "user search failed"
                    ),
                }
                FetchOutcome::Users { fetch, result }
            }
            Self::Repositories(fetch) => {
                let page = fetch.params().page;
                tracing::debug!(
                    owner = %fetch.owner(),
                    page,
                    per_page = fetch.params().per_page,
                    "loading repositories"
                );
                let result = gateway
                    .list_repositories(fetch.owner(), fetch.params())
                    .await;
                let latency_ms = elapsed_ms(start);
                match &result {
                    Ok(repositories) => tracing::info!(
                        owner = %fetch.owner(),
                        page,
                        count = repositories.len(),
                        latency_ms,
                        "repository page loaded"
                    ),
                    Err(error) => tracing::warn!(
                        owner = %fetch.owner(),
                        page,
                        latency_ms,
                        %error,
                        "repository page failed"
                    ),
                }
                FetchOutcome::Repositories { fetch, result }
            }
        }
    }

    /// Resolves the request with `error` without executing it.
    #[must_use]
    pub fn fail(self, error: ExplorerError) -> FetchOutcome {
        match self {
            Self::Users(fetch) => FetchOutcome::Users {
                fetch,
                result: Err(error),
            },
            Self::Repositories(fetch) => FetchOutcome::Repositories {
                fetch,
                result: Err(error),
            },
        }
    }
}

fn elapsed_ms(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX)
}

/// Interaction state of the explorer.
#[derive(Debug, Clone, Default)]
pub struct Explorer {
    store: QueryStore,
    search: SearchSession,
    panels: PanelSet,
    sentinels: SentinelTracker,
}

impl Explorer {
    /// Creates an explorer with an empty store.
    #[must_use]
    pub fn new(settings: QuerySettings) -> Self {
        Self::with_store(QueryStore::new(settings))
    }

    /// Creates an explorer around an existing store.
    #[must_use]
    pub fn with_store(store: QueryStore) -> Self {
        Self {
            store,
            search: SearchSession::default(),
            panels: PanelSet::default(),
            sentinels: SentinelTracker::default(),
        }
    }

    /// The request cache.
    #[must_use]
    pub const fn store(&self) -> &QueryStore {
        &self.store
    }

    /// The search session.
    #[must_use]
    pub const fn search(&self) -> &SearchSession {
        &self.search
    }

    /// Replaces the search input without searching.
    pub fn set_input(&mut self, input: impl Into<String>) {
        self.search.set_input(input);
    }

    /// Appends a typed character to the search input.
    pub fn push_char(&mut self, ch: char) {
        self.search.push_char(ch);
    }

    /// Deletes the last character of the search input.
    pub fn pop_char(&mut self) {
        self.search.pop_char();
    }

    /// Submits the search input.
    ///
    /// A blank input records the validation error and requests nothing. A
    /// valid keyword becomes the active search, collapses every panel, and
    /// starts a search unless one for the same keyword is already in flight.
    pub fn submit_search(&mut self) -> Option<FetchRequest> {
        let keyword = self.search.submit().ok()?;
        self.panels.clear();
        self.sentinels.clear();
        self.store
            .begin_user_search(&keyword)
            .map(FetchRequest::Users)
    }

    /// Status of the active search; `Idle` before the first valid submission.
    #[must_use]
    pub fn search_status(&self) -> QueryStatus {
        self.search
            .active()
            .and_then(|keyword| self.store.users(keyword))
            .map_or(QueryStatus::Idle, |state| state.status())
    }

    /// Users found by the active search once it has succeeded.
    #[must_use]
    pub fn users(&self) -> &[User] {
        if self.search_status() != QueryStatus::Success {
            return &[];
        }
        self.search
            .active()
            .and_then(|keyword| self.store.users(keyword))
            .and_then(|state| state.data())
            .map(|result| result.items.as_slice())
            .unwrap_or_default()
    }

    /// Returns true when the panel for `login` is expanded.
    #[must_use]
    pub fn is_expanded(&self, login: &UserLogin) -> bool {
        self.panels.is_expanded(login)
    }

    /// Expands or collapses the panel for `login`.
    ///
    /// Expanding requests the first page unless it is cached or already in
    /// flight. Collapsing keeps the cache and lets an in-flight page land.
    pub fn toggle_panel(&mut self, login: &UserLogin) -> Option<FetchRequest> {
        if self.panels.toggle(login) {
            self.store
                .begin_first_page(login)
                .map(FetchRequest::Repositories)
        } else {
            self.sentinels.forget(login);
            None
        }
    }

    /// Requests the next repository page for an expanded panel.
    pub fn load_more(&mut self, login: &UserLogin) -> Option<FetchRequest> {
        if !self.panels.is_expanded(login) {
            return None;
        }
        self.store
            .begin_next_page(login)
            .map(FetchRequest::Repositories)
    }

    /// Drops the cached listing for `login` and reloads it when the panel is
    /// expanded.
    ///
    /// Ignored while a page for `login` is in flight, so a user never has
    /// more than one listing request running.
    pub fn refresh_panel(&mut self, login: &UserLogin) -> Option<FetchRequest> {
        if self
            .store
            .repositories(login)
            .is_some_and(PagedQueryState::is_fetching)
        {
            tracing::debug!(owner = %login, "refresh ignored while a page is in flight");
            return None;
        }
        if self.store.invalidate_repositories(login) {
            tracing::debug!(owner = %login, "invalidated repository listing");
        }
        self.sentinels.forget(login);
        if !self.panels.is_expanded(login) {
            return None;
        }
        self.store
            .begin_first_page(login)
            .map(FetchRequest::Repositories)
    }

    /// Feeds the owners whose sentinel rows are inside the viewport and
    /// returns the page requests triggered by sentinels that just appeared.
    pub fn sentinels_visible<I>(&mut self, visible: I) -> Vec<FetchRequest>
    where
        I: IntoIterator<Item = UserLogin>,
    {
        self.sentinels
            .observe(visible)
            .iter()
            .filter_map(|owner| self.load_more(owner))
            .collect()
    }

    /// Stores a completed request and returns true when it changed state.
    ///
    /// A successful search for the active keyword prunes the repository
    /// listings of users it no longer returns and the settled results of
    /// other keywords.
    pub fn apply(&mut self, outcome: FetchOutcome) -> bool {
        match outcome {
            FetchOutcome::Users { fetch, result } => {
                let listed: Option<HashSet<String>> = result.as_ref().ok().map(|found| {
                    found
                        .items
                        .iter()
                        .map(|user| user.login.clone())
                        .collect()
                });
                let resolution = self.store.resolve_user_search(&fetch, result);
                let is_active = self.search.active() == Some(fetch.keyword());
                if let (Resolution::Applied, true, Some(logins)) = (resolution, is_active, listed)
                {
                    self.store
                        .retain_repositories(|owner| logins.contains(owner.as_str()));
                    self.store.prune_user_searches(fetch.keyword());
                }
                resolution == Resolution::Applied
            }
            FetchOutcome::Repositories { fetch, result } => {
                self.store.resolve_repositories(&fetch, result) == Resolution::Applied
            }
        }
    }
}
