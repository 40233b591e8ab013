//! Shared constants for sobject-counts.

/// REST API version used when neither flag nor environment overrides it.
pub const DEFAULT_API_VERSION: &str = "58.0";

/// HTTP request timeout in seconds.
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 60;

/// Path of the record count resource, relative to the versioned base URL.
pub const RECORD_COUNT_PATH: &str = "limits/recordCount";

/// Query parameter carrying the comma-joined object names.
pub const SOBJECTS_QUERY_PARAM: &str = "sObjects";

/// Table header for the object name column.
pub const NAME_COLUMN_LABEL: &str = "sObject";

/// Table header for the count column.
pub const COUNT_COLUMN_LABEL: &str = "Record Count";
