//! Pure reconciliation of a sparse record-count response.
//!
//! The `limits/recordCount` resource only lists objects that have at least
//! one record. Everything requested but not returned is filled in with zero.

use std::collections::HashSet;

use super::{RecordCount, RequestedObjectSet};

/// Merges the server's sparse counts with the requested names.
///
/// Entries from `sparse` keep their server order and are passed through
/// unchanged, including names that were never requested. Requested names the
/// server omitted follow as zero counts, in the set's iteration order.
///
/// No I/O; total over empty input.
#[must_use]
pub fn reconcile(requested: &RequestedObjectSet, sparse: Vec<RecordCount>) -> Vec<RecordCount> {
    let zero_counts: Vec<RecordCount> = {
        let returned: HashSet<&str> = sparse.iter().map(|rc| rc.name.as_str()).collect();
        requested.iter().filter(|name| !returned.contains(name)).map(RecordCount::zero).collect()
    };

    if !zero_counts.is_empty() {
        tracing::debug!(
            returned = sparse.len(),
            zero_filled = zero_counts.len(),
            "zero-filled objects missing from record count response"
        );
    }

    let mut result = sparse;
    result.extend(zero_counts);
    result
}
