//! Segment tree (a trie keyed by path segment).
//!
//! # Responsibilities
//! - Store route values under `[segment_count, segment_0, ..]` token paths
//! - Resolve a concrete path to a value plus its parameter bindings
//! - Report positions where several parameter children compete
//!
//! # Design Decisions
//! - Keyed by path length first, so `/a` and `/a/b` live in disjoint subtrees
//! - Literal children win over parameter children at the same level
//! - Greedy descent: once a child is chosen there is no backtracking
//! - Parameter children are recognized by the `:` prefix of their key only
//! - Children kept in a `BTreeMap` so the parameter-child scan is deterministic
//! - No internal locking; see `routing::shared` for concurrent use

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::routing::path::{self, PathTokens};

/// Parameter bindings captured during a lookup (name -> raw segment text).
///
/// Ordered by name so serialized matches are stable.
pub type Params = BTreeMap<String, String>;

/// Successful lookup result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteMatch<'a, V> {
    /// Value registered for the matched pattern.
    pub value: &'a V,
    /// Parameters declared along the matched path.
    pub params: Params,
}

/// Two or more differently named parameter children under one node.
///
/// Lookup still works on such a tree, but only the first parameter child in
/// key order is ever reachable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamConflict {
    /// Number of segments of the patterns involved.
    pub segment_count: usize,
    /// Segments leading to the conflicting position.
    pub prefix: Vec<String>,
    /// Competing parameter names, without the `:`.
    pub params: Vec<String>,
}

impl fmt::Display for ParamConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let params: Vec<String> = self.params.iter().map(|p| format!(":{}", p)).collect();
        write!(
            f,
            "parameters {} compete after /{} in {}-segment patterns",
            params.join(", "),
            self.prefix.join("/"),
            self.segment_count
        )
    }
}

#[derive(Debug, Clone)]
struct Node<V> {
    children: BTreeMap<String, Node<V>>,
    value: Option<V>,
}

impl<V> Default for Node<V> {
    fn default() -> Self {
        Self {
            children: BTreeMap::new(),
            value: None,
        }
    }
}

impl<V> Node<V> {
    fn insert<S: AsRef<str>>(&mut self, tokens: &[S], value: V) -> Option<V> {
        match tokens.split_first() {
            None => self.value.replace(value),
            Some((head, rest)) => self
                .children
                .entry(head.as_ref().to_owned())
                .or_default()
                .insert(rest, value),
        }
    }

    fn find<'a>(&'a self, tokens: &[&str]) -> Option<(&'a V, Params)> {
        let Some((token, rest)) = tokens.split_first() else {
            return self.value.as_ref().map(|value| (value, Params::new()));
        };

        if let Some(child) = self.children.get(*token) {
            return child.find(rest);
        }

        let (name, child) = self.param_child()?;
        let (value, mut params) = child.find(rest)?;
        // Deeper captures were merged first and take precedence.
        params
            .entry(name.to_owned())
            .or_insert_with(|| (*token).to_owned());
        Some((value, params))
    }

    /// First child keyed by a parameter segment, with its bound name.
    fn param_child(&self) -> Option<(&str, &Node<V>)> {
        self.children
            .iter()
            .find_map(|(key, child)| path::param_name(key).map(|name| (name, child)))
    }

    fn count(&self) -> usize {
        usize::from(self.value.is_some()) + self.children.values().map(Node::count).sum::<usize>()
    }

    fn collect_conflicts(&self, trail: &mut Vec<String>, out: &mut Vec<ParamConflict>) {
        let params: Vec<String> = self
            .children
            .keys()
            .filter_map(|key| path::param_name(key))
            .map(str::to_owned)
            .collect();

        if params.len() > 1 {
            out.push(ParamConflict {
                segment_count: trail.first().and_then(|c| c.parse().ok()).unwrap_or(0),
                prefix: trail.iter().skip(1).cloned().collect(),
                params,
            });
        }

        for (key, child) in &self.children {
            trail.push(key.clone());
            child.collect_conflicts(trail, out);
            trail.pop();
        }
    }
}

/// Route patterns mapped to values, matched segment by segment.
#[derive(Debug, Clone)]
pub struct SegmentTree<V> {
    root: Node<V>,
}

impl<V> Default for SegmentTree<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> SegmentTree<V> {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self {
            root: Node::default(),
        }
    }

    /// Build a tree from `(pattern, value)` pairs.
    ///
    /// Patterns with the same shape overwrite each other; the last pair wins.
    pub fn build<I, P>(routes: I) -> Self
    where
        I: IntoIterator<Item = (P, V)>,
        P: AsRef<str>,
    {
        let mut tree = Self::new();
        for (pattern, value) in routes {
            tree.add_route(pattern.as_ref(), value);
        }
        tree
    }

    /// Store `value` at the node reached by `tokens`, creating nodes as needed.
    ///
    /// Returns the value previously stored there, if any.
    pub fn insert<S: AsRef<str>>(&mut self, tokens: &[S], value: V) -> Option<V> {
        self.root.insert(tokens, value)
    }

    /// Register a route pattern such as `/cert/:id`.
    ///
    /// `""` and `"/"` store the value on the root. Returns the value
    /// previously registered for the same shape, if any.
    pub fn add_route(&mut self, pattern: &str, value: V) -> Option<V> {
        match PathTokens::parse(pattern) {
            Some(tokens) => self.insert(&tokens.tokens(), value),
            None => self.root.value.replace(value),
        }
    }

    /// Resolve a concrete path.
    ///
    /// Returns `None` when no registered shape accounts for the path, or when
    /// the node it leads to holds no value.
    pub fn find(&self, path: &str) -> Option<RouteMatch<'_, V>> {
        let (value, params) = match PathTokens::parse(path) {
            Some(tokens) => self.root.find(&tokens.tokens())?,
            None => (self.root.value.as_ref()?, Params::new()),
        };
        Some(RouteMatch { value, params })
    }

    /// Positions holding more than one parameter child.
    pub fn param_conflicts(&self) -> Vec<ParamConflict> {
        let mut out = Vec::new();
        self.root.collect_conflicts(&mut Vec::new(), &mut out);
        out
    }

    /// Number of stored values.
    pub fn len(&self) -> usize {
        self.root.count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<P: AsRef<str>, V> FromIterator<(P, V)> for SegmentTree<V> {
    fn from_iter<I: IntoIterator<Item = (P, V)>>(iter: I) -> Self {
        Self::build(iter)
    }
}
