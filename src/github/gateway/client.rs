//! Octocrab client construction for the explorer gateway.

use http::Uri;
use octocrab::Octocrab;

use crate::github::error::ExplorerError;

use super::error_mapping::map_octocrab_error;
use super::types::GatewaySettings;

/// Builds an Octocrab client for the configured API base.
///
/// The personal token is optional: without one the client sends anonymous
/// requests and GitHub applies its unauthenticated limits.
///
/// # Errors
///
/// Returns `ExplorerError::InvalidUrl` when the base URI cannot be parsed or
/// `ExplorerError::Api` when Octocrab fails to construct a client.
pub(super) fn build_octocrab_client(settings: &GatewaySettings) -> Result<Octocrab, ExplorerError> {
    let base_uri: Uri = settings
        .api_base
        .parse::<Uri>()
        .map_err(|error| ExplorerError::InvalidUrl(error.to_string()))?;

    let mut builder = Octocrab::builder();
    if let Some(token) = &settings.token {
        builder = builder.personal_token(token.value().to_owned());
    }

    builder
        .base_uri(base_uri)
        .map_err(|error| ExplorerError::Api {
            message: format!("build client failed: {error}"),
        })?
        .build()
        .map_err(|error| map_octocrab_error("build client", &error))
}
