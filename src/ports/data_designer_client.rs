//! Data Designer client port definition.

use url::Url;

use crate::domain::{AppError, DataDesignerConfig, GeneratedRecord};

/// Rows produced by a preview request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreviewResult {
    pub records: Vec<GeneratedRecord>,
}

impl PreviewResult {
    pub fn into_first(self) -> Option<GeneratedRecord> {
        self.records.into_iter().next()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Where and as whom to reach the service.
#[derive(Clone)]
pub struct ClientCredentials {
    pub base_url: Url,
    pub api_key: String,
}

impl std::fmt::Debug for ClientCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientCredentials")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

/// Port for Data Designer generation.
pub trait DataDesignerClient {
    /// Generate `num_records` rows for `config`.
    fn preview(
        &self,
        config: &DataDesignerConfig,
        num_records: usize,
    ) -> Result<PreviewResult, AppError>;
}

/// Builds clients once credentials are known.
pub trait DataDesignerClientFactory {
    fn create(
        &self,
        credentials: ClientCredentials,
    ) -> Result<Box<dyn DataDesignerClient>, AppError>;
}
