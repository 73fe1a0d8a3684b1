//! HTTP client for the hosted table API.

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, instrument, trace};

use kindred_core::error::{Error, ProtocolError, TransportError};
use kindred_core::types::ApiUrl;

/// Error body returned by the table API.
#[derive(Debug, serde::Deserialize)]
struct ApiErrorResponse {
    code: Option<String>,
    message: Option<String>,
}

fn map_transport(err: reqwest::Error) -> Error {
    let transport = if err.is_timeout() {
        TransportError::Timeout
    } else if err.is_connect() {
        TransportError::Connection {
            message: err.to_string(),
        }
    } else {
        TransportError::Http {
            message: err.to_string(),
        }
    };
    Error::Transport(transport)
}

/// HTTP client for row reads and writes against the hosted source.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base: ApiUrl,
    key: String,
}

impl ApiClient {
    /// Create a new client for the given API base URL and key.
    pub fn new(base: ApiUrl, key: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(concat!("kindred/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("failed to build HTTP client");

        Self {
            client,
            base,
            key: key.into(),
        }
    }

    /// Returns the API base URL this client is configured for.
    pub fn base(&self) -> &ApiUrl {
        &self.base
    }

    /// Read rows from a table (GET request).
    #[instrument(skip(self), fields(base = %self.base))]
    pub async fn rows(&self, table: &str, params: &[(&str, &str)]) -> Result<Vec<serde_json::Value>, Error> {
        let url = self.base.table_url(table);
        debug!(table, "table query");
        trace!(?params, "query parameters");

        let response = self
            .client
            .get(&url)
            .query(params)
            .headers(self.auth_headers())
            .send()
            .await
            .map_err(map_transport)?;

        self.handle_response(response).await
    }

    /// Insert a row into a table (POST request).
    #[instrument(skip(self, body), fields(base = %self.base))]
    pub async fn insert<B>(&self, table: &str, body: &B) -> Result<(), Error>
    where
        B: Serialize,
    {
        let url = self.base.table_url(table);
        debug!(table, "table insert");

        let response = self
            .client
            .post(&url)
            .json(body)
            .headers(self.auth_headers())
            .header("Prefer", "return=minimal")
            .send()
            .await
            .map_err(map_transport)?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let error = self.parse_error_response(response).await;
            Err(Error::Protocol(error))
        }
    }

    /// Delete rows matching an id (DELETE request).
    #[instrument(skip(self), fields(base = %self.base))]
    pub async fn delete(&self, table: &str, id: &str) -> Result<(), Error> {
        let url = self.base.table_url(table);
        debug!(table, id, "table delete");

        let filter = format!("eq.{}", id);
        let response = self
            .client
            .delete(&url)
            .query(&[("id", filter.as_str())])
            .headers(self.auth_headers())
            .send()
            .await
            .map_err(map_transport)?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let error = self.parse_error_response(response).await;
            Err(Error::Protocol(error))
        }
    }

    /// Create authorization headers for API requests.
    fn auth_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            "apikey",
            HeaderValue::from_str(&self.key).expect("invalid API key characters"),
        );
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", self.key))
                .expect("invalid API key characters"),
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers
    }

    /// Handle an API response, parsing the body or error.
    async fn handle_response<R: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<R, Error> {
        let status = response.status();
        trace!(status = %status, "API response");

        if status.is_success() {
            let body = response.json::<R>().await.map_err(map_transport)?;
            Ok(body)
        } else {
            let error = self.parse_error_response(response).await;
            Err(Error::Protocol(error))
        }
    }

    /// Parse an API error response.
    async fn parse_error_response(&self, response: reqwest::Response) -> ProtocolError {
        let status = response.status().as_u16();

        match response.json::<ApiErrorResponse>().await {
            Ok(error_body) => ProtocolError::new(status, error_body.code, error_body.message),
            Err(_) => ProtocolError::new(status, None, None),
        }
    }
}
