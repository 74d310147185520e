//! Data Designer client implementation using reqwest.

use reqwest::blocking::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::{AppError, DataDesignerConfig, GeneratedRecord};
use crate::ports::{ClientCredentials, DataDesignerClient, DataDesignerClientFactory, PreviewResult};

const PREVIEW_PATH: &str = "preview";

/// HTTP client for the hosted Data Designer service.
#[derive(Clone)]
pub struct HttpDataDesignerClient {
    api_key: String,
    preview_url: Url,
    client: Client,
}

impl std::fmt::Debug for HttpDataDesignerClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpDataDesignerClient")
            .field("preview_url", &self.preview_url)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl HttpDataDesignerClient {
    /// Create a client. Transport settings are reqwest's defaults.
    pub fn new(credentials: ClientCredentials) -> Result<Self, AppError> {
        let client = Client::builder()
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            api_key: credentials.api_key,
            preview_url: preview_url(&credentials.base_url)?,
            client,
        })
    }
}

fn preview_url(base_url: &Url) -> Result<Url, AppError> {
    let mut url = base_url.clone();
    url.path_segments_mut()
        .map_err(|_| AppError::Configuration(format!("Invalid base URL: {}", base_url)))?
        .pop_if_empty()
        .push(PREVIEW_PATH);
    Ok(url)
}

#[derive(Debug, Serialize)]
struct PreviewRequest<'a> {
    config: &'a DataDesignerConfig,
    num_records: usize,
}

#[derive(Debug, Deserialize)]
struct PreviewResponse {
    #[serde(default)]
    dataset: Option<Vec<GeneratedRecord>>,
}

impl DataDesignerClient for HttpDataDesignerClient {
    fn preview(
        &self,
        config: &DataDesignerConfig,
        num_records: usize,
    ) -> Result<PreviewResult, AppError> {
        tracing::debug!(
            url = %self.preview_url,
            columns = config.len(),
            num_records,
            "Requesting Data Designer preview"
        );

        let response = self
            .client
            .post(self.preview_url.clone())
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .header(CONTENT_TYPE, "application/json")
            .json(&PreviewRequest { config, num_records })
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::Api { status: status.as_u16(), body });
        }

        let payload: PreviewResponse = response.json()?;
        let records = payload.dataset.unwrap_or_default();
        tracing::debug!(records = records.len(), "Received Data Designer preview");

        Ok(PreviewResult { records })
    }
}

/// Factory producing [`HttpDataDesignerClient`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpDataDesignerClientFactory;

impl DataDesignerClientFactory for HttpDataDesignerClientFactory {
    fn create(
        &self,
        credentials: ClientCredentials,
    ) -> Result<Box<dyn DataDesignerClient>, AppError> {
        Ok(Box::new(HttpDataDesignerClient::new(credentials)?))
    }
}
