//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Reject a table with no routes (an empty or truncated file)
//! - Reject entries the router could never dispatch (empty handler, `:` without a name)
//! - Detect competing parameter segments at the same position
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Duplicate shapes are legal (last one wins) and only logged
//! - Runs before config is accepted into the system

use std::collections::{HashMap, HashSet};

use thiserror::Error;

use crate::config::schema::RouterConfig;
use crate::routing::path::{self, PathTokens};
use crate::routing::{ParamConflict, SegmentTree};

/// A semantic error in the route table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Nothing to route; usually a file caught mid-write.
    #[error("route table has no routes")]
    NoRoutes,

    #[error("route `{pattern}` has an empty handler")]
    EmptyHandler { pattern: String },

    #[error("route `{pattern}` has a parameter segment without a name")]
    EmptyParamName { pattern: String },

    /// Only the first parameter in key order would ever match.
    #[error("conflicting routes: {0}")]
    ConflictingParams(ParamConflict),
}

/// Validate a parsed configuration.
pub fn validate_config(config: &RouterConfig) -> Result<(), Vec<ValidationError>> {
    if config.routes.is_empty() {
        return Err(vec![ValidationError::NoRoutes]);
    }

    let mut errors = Vec::new();
    let mut shapes: HashMap<Option<Vec<String>>, &str> = HashMap::new();

    for route in &config.routes {
        if route.handler.trim().is_empty() {
            errors.push(ValidationError::EmptyHandler {
                pattern: route.pattern.clone(),
            });
        }

        let tokens = PathTokens::parse(&route.pattern);
        let segments = tokens.as_ref().map(|t| t.segments()).unwrap_or(&[]);

        if segments.iter().any(|s| path::param_name(s) == Some("")) {
            errors.push(ValidationError::EmptyParamName {
                pattern: route.pattern.clone(),
            });
        }
        warn_repeated_params(&route.pattern, segments);

        if let Some(earlier) = shapes.insert(tokens.as_ref().map(PathTokens::to_shape), &route.pattern) {
            tracing::warn!(
                pattern = %route.pattern,
                shadowed = %earlier,
                "Route overrides an earlier pattern of the same shape"
            );
        }
    }

    let tree = SegmentTree::build(config.routes.iter().map(|r| (r.pattern.as_str(), ())));
    errors.extend(
        tree.param_conflicts()
            .into_iter()
            .map(ValidationError::ConflictingParams),
    );

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn warn_repeated_params(pattern: &str, segments: &[&str]) {
    let mut seen = HashSet::new();
    for name in segments.iter().filter_map(|s| path::param_name(s)) {
        if !name.is_empty() && !seen.insert(name) {
            tracing::warn!(pattern, param = name, "Parameter name repeats; the last occurrence wins");
        }
    }
}
