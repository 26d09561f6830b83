//! Unit tests for configuration loading and precedence.
//!
//! Tests are organised into modules by functional area:
//! - `helpers`: Shared test utilities
//! - `precedence`: Layer precedence tests
//! - `field_resolution`: Token and initial query resolution tests
//! - `validation`: API base and page size validation tests

mod helpers;
mod validation;
