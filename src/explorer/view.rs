//! Pure layout of the explorer state as display rows.
//!
//! The terminal UI renders these rows verbatim; keeping the layout free of
//! terminal concerns lets tests assert on what a user would see.

use crate::github::identity::UserLogin;
use crate::github::models::Repository;
use crate::query::{PagedQueryState, QueryStatus};

use super::Explorer;

/// Shown while a user search is in flight.
pub const USERS_LOADING_TEXT: &str = "Loading users...";
/// Replaces the result list when the user search fails.
pub const USERS_FAILED_TEXT: &str = "Failed to load users.";
/// Shown when a search succeeds with no matches.
pub const NO_USERS_TEXT: &str = "No users found.";
/// Shown inside a panel while its first page loads.
pub const REPOSITORIES_LOADING_TEXT: &str = "Loading repositories...";
/// Shown inside a panel when a page request fails.
pub const REPOSITORIES_FAILED_TEXT: &str = "Failed to load repositories.";
/// Shown inside a panel when the user owns no public repositories.
pub const NO_REPOSITORIES_TEXT: &str = "No repositories.";
/// Shown below the listing while a further page is in flight.
pub const LOADING_MORE_TEXT: &str = "Loading more...";

/// Display text for one repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryLines {
    /// Repository name.
    pub name: String,
    /// Description, or empty text when GitHub has none.
    pub description: String,
    /// Star and fork counts, e.g. `★ 10 • Forks: 5`.
    pub summary: String,
}

impl From<&Repository> for RepositoryLines {
    fn from(repository: &Repository) -> Self {
        Self {
            name: repository.name.clone(),
            description: repository.description.clone().unwrap_or_default(),
            summary: format!(
                "★ {} • Forks: {}",
                repository.stargazers_count, repository.forks_count
            ),
        }
    }
}

/// One row of the result area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewRow {
    /// The user search is in flight.
    UsersLoading,
    /// The user search failed.
    UsersFailed,
    /// The user search returned no accounts.
    NoUsers,
    /// Collapsible header of a user panel.
    UserHeader {
        /// Account shown by the panel.
        login: UserLogin,
        /// Whether the panel is expanded.
        expanded: bool,
    },
    /// The first repository page is in flight.
    RepositoriesLoading {
        /// Panel owner.
        owner: UserLogin,
    },
    /// A repository page failed.
    RepositoriesFailed {
        /// Panel owner.
        owner: UserLogin,
    },
    /// The listing loaded and is empty.
    NoRepositories {
        /// Panel owner.
        owner: UserLogin,
    },
    /// A loaded repository.
    Repository {
        /// Panel owner.
        owner: UserLogin,
        /// Rendered text.
        lines: RepositoryLines,
    },
    /// A further page is in flight.
    LoadingMore {
        /// Panel owner.
        owner: UserLogin,
    },
    /// Marker after the last item of a listing that has another page.
    Sentinel {
        /// Panel owner.
        owner: UserLogin,
    },
}

impl ViewRow {
    /// Terminal lines the row occupies.
    #[must_use]
    pub const fn height(&self) -> usize {
        match self {
            Self::Repository { .. } => 3,
            _ => 1,
        }
    }

    /// Owner of the panel the row belongs to.
    #[must_use]
    pub const fn owner(&self) -> Option<&UserLogin> {
        match self {
            Self::UsersLoading | Self::UsersFailed | Self::NoUsers => None,
            Self::UserHeader { login: owner, .. }
            | Self::RepositoriesLoading { owner }
            | Self::RepositoriesFailed { owner }
            | Self::NoRepositories { owner }
            | Self::Repository { owner, .. }
            | Self::LoadingMore { owner }
            | Self::Sentinel { owner } => Some(owner),
        }
    }
}

impl Explorer {
    /// Lays out the result area for the current state.
    ///
    /// Nothing is shown before the first valid submission.
    #[must_use]
    pub fn rows(&self) -> Vec<ViewRow> {
        let mut rows = Vec::new();
        match self.search_status() {
            QueryStatus::Idle => {}
            QueryStatus::Loading => rows.push(ViewRow::UsersLoading),
            QueryStatus::Error => rows.push(ViewRow::UsersFailed),
            QueryStatus::Success => self.push_user_rows(&mut rows),
        }
        rows
    }

    fn push_user_rows(&self, rows: &mut Vec<ViewRow>) {
        let users = self.users();
        if users.is_empty() {
            rows.push(ViewRow::NoUsers);
            return;
        }

        for user in users {
            let Ok(login) = UserLogin::new(&user.login) else {
                tracing::warn!(login = %user.login, "skipping user with unusable login");
                continue;
            };
            let expanded = self.is_expanded(&login);
            rows.push(ViewRow::UserHeader {
                login: login.clone(),
                expanded,
            });
            if expanded {
                push_panel_rows(rows, &login, self.store.repositories(&login));
            }
        }
    }
}

fn push_panel_rows(
    rows: &mut Vec<ViewRow>,
    owner: &UserLogin,
    listing: Option<&PagedQueryState<Repository>>,
) {
    let Some(listing) = listing else {
        rows.push(ViewRow::RepositoriesLoading {
            owner: owner.clone(),
        });
        return;
    };

    match listing.status() {
        QueryStatus::Idle | QueryStatus::Loading => {
            rows.push(ViewRow::RepositoriesLoading {
                owner: owner.clone(),
            });
            return;
        }
        QueryStatus::Error => {
            rows.push(ViewRow::RepositoriesFailed {
                owner: owner.clone(),
            });
            return;
        }
        QueryStatus::Success => {}
    }

    rows.extend(listing.items().map(|repository| ViewRow::Repository {
        owner: owner.clone(),
        lines: RepositoryLines::from(repository),
    }));

    let trailer = if listing.is_fetching_next_page() {
        Some(ViewRow::LoadingMore {
            owner: owner.clone(),
        })
    } else if listing.error().is_some() {
        Some(ViewRow::RepositoriesFailed {
            owner: owner.clone(),
        })
    } else if listing.has_next_page() {
        Some(ViewRow::Sentinel {
            owner: owner.clone(),
        })
    } else if listing.item_count() == 0 {
        Some(ViewRow::NoRepositories {
            owner: owner.clone(),
        })
    } else {
        None
    };
    rows.extend(trailer);
}
