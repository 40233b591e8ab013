use serde::Deserialize;
use sobject_counts_core::RecordCount;

/// Body of a successful `limits/recordCount` response.
#[derive(Deserialize)]
pub(crate) struct RecordCountResponse {
    #[serde(rename = "sObjects")]
    pub sobjects: Vec<RecordCount>,
}

/// One entry of the platform's error envelope, returned as a JSON array on
/// non-2xx responses.
#[derive(Deserialize)]
pub(crate) struct ApiErrorEntry {
    #[serde(rename = "errorCode")]
    pub error_code: String,
    pub message: String,
}
