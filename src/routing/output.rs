//! Line-oriented output for lookups and route listings.
//!
//! One JSON object per resolved path:
//! `{"path": .., "route": {..} | null, "params": {..}}`

use std::io::{self, Write};
use std::path::Path;

use serde::Serialize;

use crate::config::RouteConfig;
use crate::routing::tree::{Params, RouteMatch};

/// Lookup result as printed by `match` and `watch`.
#[derive(Debug, Serialize)]
pub struct MatchOutput<'a> {
    pub path: &'a str,
    pub route: Option<&'a RouteConfig>,
    pub params: Params,
}

impl<'a> MatchOutput<'a> {
    pub fn new(path: &'a str, result: Option<RouteMatch<'a, RouteConfig>>) -> Self {
        match result {
            Some(m) => Self {
                path,
                route: Some(m.value),
                params: m.params,
            },
            None => Self {
                path,
                route: None,
                params: Params::new(),
            },
        }
    }

    /// Write as a single JSON line.
    pub fn write_line<W: Write>(&self, out: &mut W) -> io::Result<()> {
        serde_json::to_writer(&mut *out, self)?;
        writeln!(out)
    }
}

/// `routes` listing line.
pub fn route_line(pattern: &str, route: &RouteConfig) -> String {
    match &route.name {
        Some(name) => format!("{} -> {} ({})", pattern, route.handler, name),
        None => format!("{} -> {}", pattern, route.handler),
    }
}

/// `check` summary line.
pub fn check_summary(config_path: &Path, routes: usize) -> String {
    format!("{}: {} routes OK", config_path.display(), routes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::Router;
    use serde_json::json;

    fn route(pattern: &str, handler: &str, name: Option<&str>) -> RouteConfig {
        RouteConfig {
            pattern: pattern.to_string(),
            handler: handler.to_string(),
            name: name.map(str::to_string),
        }
    }

    #[test]
    fn test_hit_with_params() {
        let router = Router::from_config(vec![route("/cert/:root/child/:id", "cert_child", None)]);
        let output = MatchOutput::new("/cert/1/child/9", router.resolve("/cert/1/child/9"));

        assert_eq!(
            serde_json::to_value(&output).unwrap(),
            json!({
                "path": "/cert/1/child/9",
                "route": { "pattern": "/cert/:root/child/:id", "handler": "cert_child" },
                "params": { "id": "9", "root": "1" }
            })
        );
    }

    #[test]
    fn test_miss_serializes_null_route() {
        let router = Router::from_config(vec![route("/certs", "cert_list", None)]);
        let mut out = Vec::new();
        MatchOutput::new("/nope", router.resolve("/nope"))
            .write_line(&mut out)
            .unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "{\"path\":\"/nope\",\"route\":null,\"params\":{}}\n"
        );
    }

    #[test]
    fn test_params_are_written_in_name_order() {
        let router = Router::from_config(vec![route("/:z/:a/:m", "h", None)]);
        let mut out = Vec::new();
        MatchOutput::new("/1/2/3", router.resolve("/1/2/3"))
            .write_line(&mut out)
            .unwrap();

        let line = String::from_utf8(out).unwrap();
        assert!(line.ends_with("\"params\":{\"a\":\"2\",\"m\":\"3\",\"z\":\"1\"}}\n"));
    }

    #[test]
    fn test_route_line() {
        assert_eq!(
            route_line("/cert/:id", &route("/cert/:id", "cert_detail", Some("Certificate"))),
            "/cert/:id -> cert_detail (Certificate)"
        );
        assert_eq!(route_line("/search", &route("/search", "cert_search", None)), "/search -> cert_search");
    }

    #[test]
    fn test_check_summary() {
        assert_eq!(
            check_summary(Path::new("config/routes.toml"), 10),
            "config/routes.toml: 10 routes OK"
        );
    }
}
