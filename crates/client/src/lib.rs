//! REST client for the `limits/recordCount` resource.

mod api_types;
mod client;
mod error;
mod record_counts;

pub use client::{truncate, OrgClient, ERROR_BODY_PREVIEW_LEN};
pub use error::ClientError;
