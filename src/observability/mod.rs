//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Route table build / lookup / reload:
//!     → logging.rs (structured log events)
//!     → metrics.rs (lookup counters, table size gauge)
//! ```
//!
//! # Design Decisions
//! - Structured logging via `tracing`, JSON when configured
//! - Metrics are cheap (atomic increments behind the `metrics` facade)

pub mod logging;
pub mod metrics;
