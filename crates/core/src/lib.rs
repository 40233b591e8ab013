//! Core types for sobject-counts
//!
//! Holds the record-count value types and the reconciliation that turns a
//! sparse `limits/recordCount` response into a complete result.

pub mod constants;
pub mod env_config;
mod reconcile;
mod record_count;
mod requested;

pub use reconcile::*;
pub use record_count::*;
pub use requested::*;
