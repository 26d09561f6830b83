//! Test helpers for constructing user and repository fixtures.
//!
//! # Examples
//!
//! ```
//! use reposcope::github::models::test_support::{repositories, user};
//!
//! let octocat = user(1, "octocat");
//! assert_eq!(octocat.login, "octocat");
//!
//! let page = repositories("repo", 3);
//! assert_eq!(page.len(), 3);
//! ```

use super::{Repository, User, UserSearchResult};

/// Constructs a user with an empty avatar URL.
#[must_use]
pub fn user(id: u64, login: &str) -> User {
    User {
        id,
        login: login.to_owned(),
        avatar_url: String::new(),
    }
}

/// Wraps the given logins in a search result with sequential IDs from 1.
///
/// # Examples
///
/// ```
/// use reposcope::github::models::test_support::search_result;
///
/// let result = search_result(&["octocat", "hubot"]);
/// assert_eq!(result.items.len(), 2);
/// assert_eq!(result.items[1].id, 2);
/// ```
#[must_use]
pub fn search_result(logins: &[&str]) -> UserSearchResult {
    UserSearchResult {
        items: logins
            .iter()
            .zip(1_u64..)
            .map(|(login, id)| user(id, login))
            .collect(),
    }
}

/// Constructs a repository with the given counts and description.
#[must_use]
pub fn repository(name: &str, description: Option<&str>, stars: u32, forks: u32) -> Repository {
    Repository {
        id: 0,
        name: name.to_owned(),
        description: description.map(ToOwned::to_owned),
        stargazers_count: stars,
        forks_count: forks,
    }
}

/// Creates `count` repositories named `{prefix}-{n}` with sequential IDs
/// starting from 1.
#[must_use]
pub fn repositories(prefix: &str, count: usize) -> Vec<Repository> {
    (1_u64..)
        .take(count)
        .map(|id| Repository {
            id,
            ..repository(&format!("{prefix}-{id}"), None, 0, 0)
        })
        .collect()
}
