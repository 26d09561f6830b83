//! Tests for configuration validation.

use rstest::rstest;

use crate::ExplorerConfig;
use crate::github::error::ExplorerError;

#[rstest]
fn default_configuration_is_valid() {
    let config = ExplorerConfig::default();

    assert!(config.validate().is_ok(), "defaults should validate");
}

#[rstest]
#[case::not_a_url("not a url")]
#[case::relative("/api/v3")]
#[case::wrong_scheme("ftp://example.com")]
fn rejects_unusable_api_base(#[case] api_base: &str) {
    let config = ExplorerConfig {
        api_base: api_base.to_owned(),
        ..Default::default()
    };

    let result = config.validate();

    assert!(
        matches!(result, Err(ExplorerError::Configuration { .. })),
        "expected configuration error for {api_base:?}, got {result:?}"
    );
}

#[rstest]
#[case::users_zero(0, 100)]
#[case::users_too_large(101, 100)]
#[case::repos_zero(5, 0)]
#[case::repos_too_large(5, 200)]
fn rejects_page_sizes_out_of_range(#[case] users_per_page: u8, #[case] repos_page_size: u8) {
    let config = ExplorerConfig {
        users_per_page,
        repos_page_size,
        ..Default::default()
    };

    let result = config.query_settings();

    assert!(
        matches!(result, Err(ExplorerError::Configuration { .. })),
        "expected configuration error, got {result:?}"
    );
}

#[rstest]
#[case::minimum(1, 1)]
#[case::maximum(100, 100)]
fn accepts_page_sizes_at_bounds(#[case] users_per_page: u8, #[case] repos_page_size: u8) {
    let config = ExplorerConfig {
        users_per_page,
        repos_page_size,
        ..Default::default()
    };

    let settings = config
        .query_settings()
        .expect("bounds should be accepted");

    assert_eq!(settings.users_per_page, users_per_page);
    assert_eq!(settings.repos_page_size, repos_page_size);
}
