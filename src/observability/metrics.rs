//! Metrics collection.
//!
//! # Metrics
//! - `router_lookups_total` (counter): lookups by outcome (`match`, `no_match`)
//! - `router_routes` (gauge): values stored in the active route table
//!
//! # Design Decisions
//! - Recorded through the `metrics` facade; without an installed recorder
//!   every call is a no-op
//! - The embedding application chooses and installs the exporter

/// Record the outcome of a single lookup.
pub fn record_lookup(matched: bool) {
    let outcome = if matched { "match" } else { "no_match" };
    ::metrics::counter!("router_lookups_total", "outcome" => outcome).increment(1);
}

/// Record the size of the active route table.
pub fn record_route_count(count: usize) {
    ::metrics::gauge!("router_routes").set(count as f64);
}
