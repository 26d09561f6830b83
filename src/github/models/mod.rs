//! Data models for GitHub users and repositories.
//!
//! Types prefixed with `Api` are internal deserialisation targets that convert
//! into the public domain types. GitHub omits fields on some paths, so every
//! optional field tolerates absence and `null`.

use serde::Deserialize;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

/// A GitHub account returned by user search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct User {
    /// Account identifier.
    pub id: u64,
    /// Unique display handle.
    pub login: String,
    /// Avatar image URL, empty when GitHub did not send one.
    pub avatar_url: String,
}

/// Result of a user search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserSearchResult {
    /// Matching users in the order GitHub ranked them.
    pub items: Vec<User>,
}

/// A repository owned by a user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Repository {
    /// Repository identifier, zero when the response omitted it.
    pub id: u64,
    /// Repository name.
    pub name: String,
    /// Free-text description.
    pub description: Option<String>,
    /// Star count.
    pub stargazers_count: u32,
    /// Fork count.
    pub forks_count: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiUserSearchResponse {
    #[serde(default)]
    pub(crate) items: Vec<ApiUser>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiUser {
    #[serde(default)]
    pub(crate) id: u64,
    pub(crate) login: String,
    #[serde(default)]
    pub(crate) avatar_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiRepository {
    #[serde(default)]
    pub(crate) id: Option<u64>,
    pub(crate) name: String,
    #[serde(default)]
    pub(crate) description: Option<String>,
    #[serde(default)]
    pub(crate) stargazers_count: Option<u32>,
    #[serde(default)]
    pub(crate) forks_count: Option<u32>,
}

impl From<ApiUser> for User {
    fn from(value: ApiUser) -> Self {
        Self {
            id: value.id,
            login: value.login,
            avatar_url: value.avatar_url.unwrap_or_default(),
        }
    }
}

impl From<ApiUserSearchResponse> for UserSearchResult {
    fn from(value: ApiUserSearchResponse) -> Self {
        Self {
            items: value.items.into_iter().map(User::from).collect(),
        }
    }
}

impl From<ApiRepository> for Repository {
    fn from(value: ApiRepository) -> Self {
        Self {
            id: value.id.unwrap_or_default(),
            name: value.name,
            description: value.description,
            stargazers_count: value.stargazers_count.unwrap_or_default(),
            forks_count: value.forks_count.unwrap_or_default(),
        }
    }
}
