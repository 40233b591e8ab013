use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of records stored for one object type.
///
/// The server returns these only for objects with at least one record, so the
/// same shape is used for the sparse response and for the reconciled result.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordCount {
    pub name: String,
    pub count: u64,
}

impl RecordCount {
    #[must_use]
    pub fn new(name: impl Into<String>, count: u64) -> Self {
        Self { name: name.into(), count }
    }

    /// An entry for an object the server reported nothing for.
    #[must_use]
    pub fn zero(name: impl Into<String>) -> Self {
        Self::new(name, 0)
    }
}

impl fmt::Display for RecordCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.count)
    }
}
