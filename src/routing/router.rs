//! Route table and lookup.
//!
//! # Responsibilities
//! - Own the segment tree for one route table
//! - Remember registered patterns for listing
//! - Look up the matching route for a path, logging and counting outcomes
//!
//! # Design Decisions
//! - Immutable once handed to `SharedRouter` (thread-safe without locks)
//! - O(depth) lookup, independent of the number of routes
//! - Explicit NoMatch (`None`) rather than a silent default

use crate::config::RouteConfig;
use crate::observability::metrics;
use crate::routing::path::PathTokens;
use crate::routing::tree::{RouteMatch, SegmentTree};

/// Shape key of a pattern; `None` is the zero-length path.
fn shape(pattern: &str) -> Option<Vec<String>> {
    PathTokens::parse(pattern).map(|tokens| tokens.to_shape())
}

/// A route table mapping patterns to values.
#[derive(Debug, Clone)]
pub struct Router<V> {
    tree: SegmentTree<V>,
    /// Registered patterns, one per shape, in registration order.
    patterns: Vec<String>,
}

impl<V> Default for Router<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Router<V> {
    pub fn new() -> Self {
        Self {
            tree: SegmentTree::new(),
            patterns: Vec::new(),
        }
    }

    /// Build a table from `(pattern, value)` pairs; later pairs overwrite
    /// earlier ones with the same shape.
    pub fn from_routes<I, P>(routes: I) -> Self
    where
        I: IntoIterator<Item = (P, V)>,
        P: Into<String>,
    {
        let mut router = Self::new();
        for (pattern, value) in routes {
            router.add_route(pattern, value);
        }
        router
    }

    /// Register a pattern, returning the value it replaced, if any.
    pub fn add_route(&mut self, pattern: impl Into<String>, value: V) -> Option<V> {
        let pattern = pattern.into();
        let previous = self.tree.add_route(&pattern, value);

        if previous.is_some() {
            let key = shape(&pattern);
            self.patterns.retain(|existing| shape(existing) != key);
            tracing::debug!(pattern = %pattern, "Route replaced an existing pattern of the same shape");
        }
        self.patterns.push(pattern);
        previous
    }

    /// Resolve a concrete path to its route value and parameters.
    pub fn resolve(&self, path: &str) -> Option<RouteMatch<'_, V>> {
        let result = self.tree.find(path);
        metrics::record_lookup(result.is_some());

        match &result {
            Some(m) => tracing::debug!(path, params = ?m.params, "Route matched"),
            None => tracing::debug!(path, "No route matched"),
        }
        result
    }

    /// Registered patterns with their values, in registration order.
    pub fn routes(&self) -> impl Iterator<Item = (&str, &V)> + '_ {
        // A pattern resolves to itself: its `:name` segments match literally.
        self.patterns
            .iter()
            .filter_map(|pattern| self.tree.find(pattern).map(|m| (pattern.as_str(), m.value)))
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl Router<RouteConfig> {
    /// Build the route table from configuration entries.
    pub fn from_config(routes: Vec<RouteConfig>) -> Self {
        let router = Self::from_routes(routes.into_iter().map(|route| (route.pattern.clone(), route)));

        metrics::record_route_count(router.len());
        tracing::info!(routes = router.len(), "Route table built");
        router
    }
}
