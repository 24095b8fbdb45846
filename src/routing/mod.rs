//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Route Compilation (at startup / reload):
//!     RouteConfig[]
//!     → path.rs (strip leading '/', split, prepend segment count)
//!     → tree.rs (insert tokens, last write wins per shape)
//!     → router.rs (route table with pattern listing)
//!     → shared.rs (atomic publish to readers)
//!
//! Output:
//!     RouteMatch → output.rs (one JSON line per path)
//!
//! Lookup:
//!     concrete path
//!     → path.rs (same tokenization)
//!     → tree.rs (greedy descent: literal child, else parameter child)
//!     → Return: RouteMatch { value, params } or NoMatch
//! ```
//!
//! # Design Decisions
//! - Tables are built whole and swapped atomically, never mutated in place
//! - Static segments win over parameters at the same position
//! - Deterministic: same input always matches same route

pub mod output;
pub mod path;
pub mod router;
pub mod shared;
pub mod tree;

pub use router::Router;
pub use shared::SharedRouter;
pub use tree::{ParamConflict, Params, RouteMatch, SegmentTree};
