//! Route table shared between readers and a reloading writer.

use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::routing::router::Router;
use crate::routing::tree::RouteMatch;

/// Atomically swappable route table.
///
/// Readers never block: each lookup works on the snapshot that was current
/// when it started. A reload publishes a complete new table in one step.
pub struct SharedRouter<V> {
    current: ArcSwap<Router<V>>,
}

impl<V> SharedRouter<V> {
    pub fn new(router: Router<V>) -> Self {
        Self {
            current: ArcSwap::from_pointee(router),
        }
    }

    /// Snapshot of the current table.
    pub fn load(&self) -> Arc<Router<V>> {
        self.current.load_full()
    }

    /// Publish a new table, returning the one it replaced.
    pub fn replace(&self, router: Router<V>) -> Arc<Router<V>> {
        let previous = self.current.swap(Arc::new(router));
        tracing::info!(
            previous_routes = previous.len(),
            routes = self.current.load().len(),
            "Route table swapped"
        );
        previous
    }

    /// Resolve `path` against the current table and hand the result to `f`.
    pub fn resolve_with<R>(&self, path: &str, f: impl FnOnce(Option<RouteMatch<'_, V>>) -> R) -> R {
        let router = self.current.load();
        f(router.resolve(path))
    }
}
