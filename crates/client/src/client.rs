use std::time::Duration;

use sobject_counts_core::constants::DEFAULT_API_VERSION;

use crate::error::ClientError;

/// How much of an unexpected response body is kept in error messages.
pub const ERROR_BODY_PREVIEW_LEN: usize = 500;

/// Authenticated client for one org's REST API.
pub struct OrgClient {
    pub(crate) client: reqwest::Client,
    pub(crate) instance_url: String,
    pub(crate) access_token: String,
    pub(crate) api_version: String,
}

impl std::fmt::Debug for OrgClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrgClient")
            .field("client", &self.client)
            .field("instance_url", &self.instance_url)
            .field("access_token", &"***")
            .field("api_version", &self.api_version)
            .finish()
    }
}

impl OrgClient {
    /// Creates a client for the org at `instance_url`, authenticating every
    /// request with `access_token`.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built (TLS backend failure).
    pub fn new(
        instance_url: String,
        access_token: String,
        timeout: Duration,
    ) -> Result<Self, ClientError> {
        let instance_url = instance_url.trim_end_matches('/').to_owned();
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ClientError::ClientInit(e.to_string()))?;
        Ok(Self { client, instance_url, access_token, api_version: DEFAULT_API_VERSION.to_owned() })
    }

    /// Sets the REST API version, with or without a leading `v`.
    #[must_use]
    pub fn with_api_version(mut self, api_version: &str) -> Self {
        self.api_version = api_version.trim().trim_start_matches('v').to_owned();
        self
    }

    /// Versioned REST base, e.g. `https://na1.my.salesforce.com/services/data/v58.0`.
    #[must_use]
    pub fn base_url(&self) -> String {
        format!("{}/services/data/v{}", self.instance_url, self.api_version)
    }

    #[must_use]
    pub fn instance_url(&self) -> &str {
        &self.instance_url
    }

    #[must_use]
    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    /// Sends an authenticated GET and returns the body of a 2xx response.
    ///
    /// # Errors
    /// Returns an error if the request cannot be sent or the response status
    /// is not a success. Platform error envelopes become [`ClientError::Api`].
    pub(crate) async fn get_text(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<String, ClientError> {
        tracing::debug!(url, ?query, "sending GET");
        let response = self
            .client
            .get(url)
            .query(query)
            .header("Authorization", format!("Bearer {}", self.access_token))
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if status.is_success() {
            tracing::debug!(status = status.as_u16(), bytes = body.len(), "received response");
            return Ok(body);
        }

        Err(error_from_status(status.as_u16(), &body))
    }
}

/// Maps a non-success response to the most specific error available.
pub(crate) fn error_from_status(code: u16, body: &str) -> ClientError {
    let entries: Vec<crate::api_types::ApiErrorEntry> =
        serde_json::from_str(body).unwrap_or_default();
    match entries.into_iter().next() {
        Some(entry) => {
            ClientError::Api { code, error_code: entry.error_code, message: entry.message }
        },
        None => ClientError::HttpStatus {
            code,
            body: truncate(body, ERROR_BODY_PREVIEW_LEN).to_owned(),
        },
    }
}

/// Truncates a string to the given maximum length at a char boundary.
#[must_use]
pub fn truncate(s: &str, max_len: usize) -> &str {
    if s.len() <= max_len {
        s
    } else {
        let mut end = max_len;
        while end > 0 && !s.is_char_boundary(end) {
            end = end.saturating_sub(1);
        }
        s.get(..end).unwrap_or("")
    }
}
