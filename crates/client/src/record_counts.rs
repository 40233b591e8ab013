use sobject_counts_core::constants::{RECORD_COUNT_PATH, SOBJECTS_QUERY_PARAM};
use sobject_counts_core::{reconcile, RecordCount, RequestedObjectSet};

use crate::api_types::RecordCountResponse;
use crate::client::{truncate, OrgClient, ERROR_BODY_PREVIEW_LEN};
use crate::error::ClientError;

impl OrgClient {
    /// Fetches the server's counts for `requested`.
    ///
    /// The response is sparse: objects with no records are absent. Use
    /// [`OrgClient::record_counts`] for a complete result.
    ///
    /// # Errors
    /// Returns [`ClientError::EmptyRequest`] without touching the network if
    /// `requested` is empty, otherwise any request, status or decoding error.
    pub async fn sparse_record_counts(
        &self,
        requested: &RequestedObjectSet,
    ) -> Result<Vec<RecordCount>, ClientError> {
        if requested.is_empty() {
            return Err(ClientError::EmptyRequest);
        }

        let url = format!("{}/{RECORD_COUNT_PATH}", self.base_url());
        let names = requested.to_query_value();
        let body = self.get_text(&url, &[(SOBJECTS_QUERY_PARAM, names.as_str())]).await?;

        let response: RecordCountResponse =
            serde_json::from_str(&body).map_err(|e| ClientError::JsonParse {
                context: format!(
                    "record count response (body: {})",
                    truncate(&body, ERROR_BODY_PREVIEW_LEN)
                ),
                source: e,
            })?;

        tracing::debug!(
            requested = requested.len(),
            returned = response.sobjects.len(),
            "decoded record counts"
        );
        Ok(response.sobjects)
    }

    /// Fetches counts for `requested` and zero-fills objects the server omitted.
    ///
    /// # Errors
    /// Same as [`OrgClient::sparse_record_counts`]; reconciliation itself
    /// cannot fail.
    pub async fn record_counts(
        &self,
        requested: &RequestedObjectSet,
    ) -> Result<Vec<RecordCount>, ClientError> {
        let sparse = self.sparse_record_counts(requested).await?;
        Ok(reconcile(requested, sparse))
    }
}
