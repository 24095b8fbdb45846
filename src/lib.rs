//! Segment-tree path router.
//!
//! Resolves request paths such as `/cert/42` against a table of route
//! patterns such as `/cert/:id`, returning the registered value and the
//! captured parameters.

pub mod config;
pub mod lifecycle;
pub mod observability;
pub mod routing;

pub use config::schema::RouterConfig;
pub use routing::{Router, RouteMatch, SegmentTree, SharedRouter};
