//! Public parameter types for gateway operations.

use crate::github::error::ExplorerError;
use crate::github::identity::PersonalAccessToken;
use crate::github::pagination::{FIRST_PAGE, MAX_PER_PAGE};

/// Public GitHub REST API endpoint.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Parameters for listing a user's repositories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListRepositoriesParams {
    /// Page number to fetch (1-based).
    pub page: u32,
    /// Items per page (1..=100).
    pub per_page: u8,
}

impl ListRepositoriesParams {
    /// Checks the parameters against GitHub's pagination limits.
    ///
    /// # Errors
    ///
    /// Returns [`ExplorerError::InvalidPagination`] when `page` is below the
    /// first page or `per_page` is outside `1..=100`.
    pub fn validate(&self) -> Result<(), ExplorerError> {
        if self.page < FIRST_PAGE {
            return Err(ExplorerError::InvalidPagination {
                message: format!("page must be at least {FIRST_PAGE}"),
            });
        }
        validate_per_page(self.per_page)
    }
}

impl Default for ListRepositoriesParams {
    fn default() -> Self {
        Self {
            page: FIRST_PAGE,
            per_page: MAX_PER_PAGE,
        }
    }
}

pub(crate) fn validate_per_page(per_page: u8) -> Result<(), ExplorerError> {
    if per_page == 0 {
        return Err(ExplorerError::InvalidPagination {
            message: "per_page must be at least 1".to_owned(),
        });
    }

    if per_page > MAX_PER_PAGE {
        return Err(ExplorerError::InvalidPagination {
            message: format!("per_page must not exceed {MAX_PER_PAGE}"),
        });
    }

    Ok(())
}

/// Connection settings for the Octocrab gateway.
#[derive(Debug, Clone)]
pub struct GatewaySettings {
    /// REST API base URL.
    pub api_base: String,
    /// Optional bearer credential attached to every request.
    pub token: Option<PersonalAccessToken>,
}

impl Default for GatewaySettings {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_owned(),
            token: None,
        }
    }
}
