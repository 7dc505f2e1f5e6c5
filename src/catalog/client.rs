use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{debug, warn};

use super::{VolumeLookup, VolumesResponse};
use crate::error::LookupError;
use crate::isbn;

/// Public Google Books volume search endpoint
pub const DEFAULT_CATALOG_URL: &str = "https://www.googleapis.com/books/v1/volumes";

/// Settings for [`CatalogClient`]
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Volume search endpoint; `q=isbn:...` is appended as a query
    pub base_url: String,
    /// Optional API key sent as `key=...`
    pub api_key: Option<String>,
    /// Per-request timeout
    pub timeout: Duration,
    /// Attempts made before giving up on timeouts and connection errors
    pub max_retry: u32,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_CATALOG_URL.to_string(),
            api_key: None,
            timeout: Duration::from_secs(30),
            max_retry: 3,
        }
    }
}

/// HTTP client for the bibliographic catalog
pub struct CatalogClient {
    client: Client,
    config: CatalogConfig,
}

impl CatalogClient {
    pub fn new(config: CatalogConfig) -> Result<Self, LookupError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    /// Search the catalog for volumes carrying `isbn`.
    ///
    /// The ISBN is validated first; an invalid one fails with
    /// [`LookupError::InvalidIsbn`] without touching the network.
    pub async fn get_by_isbn(&self, isbn: &str) -> Result<VolumesResponse, LookupError> {
        if !isbn::validate(isbn) {
            return Err(LookupError::InvalidIsbn(isbn.to_string()));
        }

        let mut query = vec![("q", format!("isbn:{isbn}"))];
        if let Some(key) = &self.config.api_key {
            query.push(("key", key.clone()));
        }

        let mut retry_count = 0;
        let resp = loop {
            let result = self
                .client
                .get(&self.config.base_url)
                .query(&query)
                .send()
                .await;

            match result {
                Ok(resp) => break resp,
                Err(e) if e.is_timeout() || e.is_connect() => {
                    retry_count += 1;
                    if retry_count >= self.config.max_retry {
                        return Err(LookupError::RetriesExhausted(retry_count));
                    }
                    warn!(
                        retry = retry_count,
                        max_retry = self.config.max_retry,
                        error = %e,
                        "catalog connection error, retrying"
                    );
                    tokio::time::sleep(Duration::from_millis(500 * retry_count as u64)).await;
                }
                Err(e) => return Err(e.into()),
            }
        };

        let status = resp.status();
        let body = resp.bytes().await?;
        debug!(isbn, %status, bytes = body.len(), "catalog responded");

        if status != StatusCode::OK {
            return Err(LookupError::Status {
                status,
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl VolumeLookup for CatalogClient {
    async fn lookup_isbn(&self, isbn: &str) -> Result<VolumesResponse, LookupError> {
        self.get_by_isbn(isbn).await
    }
}
