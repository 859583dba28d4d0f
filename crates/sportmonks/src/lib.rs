//! HTTP client for the Sportmonks v3 football API.
//!
//! One GET per [`Operation`], API token passed as a query parameter.
//! The client surfaces the raw response body; parsing belongs to the
//! ingest layer.  No retries -- a failed fetch is reported as-is.

use futsync_core::Operation;

/// Errors from the Sportmonks transport layer.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API returned a non-2xx status code.
    #[error("Sportmonks API error ({status}): {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Raw response body for diagnosis.
        body: String,
    },

    /// The API returned 2xx with an empty body.
    #[error("Sportmonks returned an empty response body")]
    EmptyBody,
}

/// HTTP client bound to one API base URL and token.
pub struct SportmonksClient {
    client: reqwest::Client,
    base_url: String,
    api_token: String,
}

impl SportmonksClient {
    /// Create a client for the given base URL and API token.
    ///
    /// * `base_url` - e.g. `https://api.sportmonks.com/v3/football`.
    pub fn new(base_url: impl Into<String>, api_token: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            api_token: api_token.into(),
        }
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(
        client: reqwest::Client,
        base_url: impl Into<String>,
        api_token: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            api_token: api_token.into(),
        }
    }

    /// Perform the GET for one operation and return the raw body text.
    pub async fn fetch(&self, operation: &Operation) -> Result<String, ClientError> {
        let url = format!("{}{}", self.base_url, operation.path());
        let response = self
            .client
            .get(&url)
            .query(&[("api_token", self.api_token.as_str())])
            .send()
            .await?;

        let response = Self::ensure_success(response).await?;
        let body = response.text().await?;
        if body.is_empty() {
            return Err(ClientError::EmptyBody);
        }
        Ok(body)
    }

    /// Ensure the response has a success status code. Returns the
    /// response unchanged on success, or a [`ClientError::Status`]
    /// containing the status and body text on failure.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_displays_code_and_body() {
        let err = ClientError::Status {
            status: 403,
            body: "invalid token".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Sportmonks API error (403): invalid token"
        );
    }

    #[test]
    fn empty_body_error_is_descriptive() {
        assert_eq!(
            ClientError::EmptyBody.to_string(),
            "Sportmonks returned an empty response body"
        );
    }
}
