use std::sync::{Arc, Mutex};

use crate::domain::{AppError, DataDesignerConfig, GeneratedRecord};
use crate::ports::{ClientCredentials, DataDesignerClient, DataDesignerClientFactory, PreviewResult};

/// What the fake service answers with.
#[derive(Debug, Clone)]
pub enum FakeResponse {
    Records(Vec<GeneratedRecord>),
    Status(u16),
}

#[derive(Debug, Clone)]
pub struct PreviewCall {
    pub config: DataDesignerConfig,
    pub num_records: usize,
}

#[derive(Clone)]
pub struct FakeDataDesignerClient {
    pub calls: Arc<Mutex<Vec<PreviewCall>>>,
    pub response: FakeResponse,
}

impl FakeDataDesignerClient {
    pub fn returning(records: Vec<GeneratedRecord>) -> Self {
        Self { calls: Arc::new(Mutex::new(vec![])), response: FakeResponse::Records(records) }
    }

    pub fn failing_with_status(status: u16) -> Self {
        Self { calls: Arc::new(Mutex::new(vec![])), response: FakeResponse::Status(status) }
    }

    pub fn get_calls(&self) -> Vec<PreviewCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl DataDesignerClient for FakeDataDesignerClient {
    fn preview(
        &self,
        config: &DataDesignerConfig,
        num_records: usize,
    ) -> Result<PreviewResult, AppError> {
        self.calls.lock().unwrap().push(PreviewCall { config: config.clone(), num_records });
        match &self.response {
            FakeResponse::Records(records) => Ok(PreviewResult { records: records.clone() }),
            FakeResponse::Status(status) => {
                Err(AppError::Api { status: *status, body: "fake failure".to_string() })
            }
        }
    }
}

pub struct FakeDataDesignerClientFactory {
    pub client: FakeDataDesignerClient,
    pub credentials: Arc<Mutex<Vec<ClientCredentials>>>,
}

impl FakeDataDesignerClientFactory {
    pub fn new(client: FakeDataDesignerClient) -> Self {
        Self { client, credentials: Arc::new(Mutex::new(vec![])) }
    }

    pub fn get_credentials(&self) -> Vec<ClientCredentials> {
        self.credentials.lock().unwrap().clone()
    }
}

impl DataDesignerClientFactory for FakeDataDesignerClientFactory {
    fn create(
        &self,
        credentials: ClientCredentials,
    ) -> Result<Box<dyn DataDesignerClient>, AppError> {
        self.credentials.lock().unwrap().push(credentials);
        Ok(Box::new(self.client.clone()))
    }
}
