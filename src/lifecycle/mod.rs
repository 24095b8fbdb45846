//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Load config → Validate → Initialize logging → Build route table
//!
//! Watch session (session.rs):
//!     stdin lines ──▶ resolve ──▶ JSON lines
//!     config updates ──▶ swap route table
//!     shutdown future ──▶ stop
//!
//! Signals (signals.rs):
//!     SIGINT → resolve the shutdown future
//! ```

pub mod session;
pub mod signals;
pub mod startup;
