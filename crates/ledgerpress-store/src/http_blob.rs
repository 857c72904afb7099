//! HTTP blob service adapter
//!
//! Writes go to a publisher (`PUT {publisher}/v1/blobs`), reads to an
//! aggregator (`GET {aggregator}/v1/blobs/{id}`).

use std::time::Duration;

use async_trait::async_trait;
use ledgerpress_core::BlobStore;
use ledgerpress_core_types::Sensitive;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::errors::{decode_error, from_reqwest, http_status, Result};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
pub struct BlobStoreConfig {
    pub publisher_url: String,
    pub aggregator_url: String,
    /// Bearer token for publishers that require one
    pub api_token: Option<Sensitive<String>>,
    /// Storage duration in epochs; the publisher's default when absent
    pub epochs: Option<u32>,
    pub timeout: Duration,
}

impl BlobStoreConfig {
    pub fn new(publisher_url: impl Into<String>, aggregator_url: impl Into<String>) -> Self {
        Self {
            publisher_url: publisher_url.into(),
            aggregator_url: aggregator_url.into(),
            api_token: None,
            epochs: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(Sensitive::new(token.into()));
        self
    }

    pub fn with_epochs(mut self, epochs: u32) -> Self {
        self.epochs = Some(epochs);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Publisher reply: either a fresh blob or one the service already certified
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
enum StoreResponse {
    NewlyCreated {
        #[serde(rename = "blobObject")]
        blob_object: BlobObject,
    },
    AlreadyCertified {
        #[serde(rename = "blobId")]
        blob_id: String,
    },
}

#[derive(Debug, Deserialize)]
struct BlobObject {
    #[serde(rename = "blobId")]
    blob_id: String,
}

impl StoreResponse {
    fn into_blob_id(self) -> String {
        match self {
            StoreResponse::NewlyCreated { blob_object } => blob_object.blob_id,
            StoreResponse::AlreadyCertified { blob_id } => blob_id,
        }
    }
}

pub struct HttpBlobStore {
    client: Client,
    config: BlobStoreConfig,
}

impl HttpBlobStore {
    /// # Errors
    /// `ExternalService` when the HTTP client cannot be built.
    pub fn new(config: BlobStoreConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| from_reqwest("blob_client", e))?;
        Ok(Self { client, config })
    }

    fn blobs_url(base: &str) -> String {
        format!("{}/v1/blobs", base.trim_end_matches('/'))
    }
}

#[async_trait]
impl BlobStore for HttpBlobStore {
    async fn put(&self, bytes: Vec<u8>) -> Result<String> {
        let mut request = self
            .client
            .put(Self::blobs_url(&self.config.publisher_url))
            .body(bytes);
        if let Some(epochs) = self.config.epochs {
            request = request.query(&[("epochs", epochs)]);
        }
        if let Some(token) = &self.config.api_token {
            request = request.bearer_auth(token.expose());
        }

        let response = request
            .send()
            .await
            .map_err(|e| from_reqwest("blob_put", e))?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(http_status("blob_put", status.as_u16(), &body));
        }

        let parsed: StoreResponse = response
            .json()
            .await
            .map_err(|e| decode_error("blob_put", e.to_string()))?;
        let blob_id = parsed.into_blob_id();
        tracing::debug!(content_id = %blob_id, "blob published");
        Ok(blob_id)
    }

    async fn get(&self, content_id: &str) -> Result<Option<Vec<u8>>> {
        let url = format!(
            "{}/{}",
            Self::blobs_url(&self.config.aggregator_url),
            content_id
        );
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| from_reqwest("blob_get", e))?;

        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => {
                let bytes = response
                    .bytes()
                    .await
                    .map_err(|e| from_reqwest("blob_get", e))?;
                Ok(Some(bytes.to_vec()))
            }
            status => {
                let body = response.text().await.unwrap_or_default();
                Err(http_status("blob_get", status.as_u16(), &body))
            }
        }
    }
}
