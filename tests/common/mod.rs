//! Shared fixtures for integration tests.

use std::path::PathBuf;

use segment_router::config::{parse_config, RouteConfig, RouterConfig};
use segment_router::Router;

/// The sample certificate-manager route table shipped with the crate.
pub const CERT_ROUTES: &str = include_str!("../../config/routes.toml");

pub fn cert_config() -> RouterConfig {
    parse_config(CERT_ROUTES).expect("sample route table must be valid")
}

pub fn cert_router() -> Router<RouteConfig> {
    Router::from_config(cert_config().routes)
}

/// A per-test file path under the system temp directory.
#[allow(dead_code)]
pub fn temp_config_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("segment-router-{}-{}.toml", name, std::process::id()))
}
