use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::PrincipleStore;

#[derive(Clone, Default)]
pub struct MemoryPrincipleStore {
    pub documents: Arc<Mutex<BTreeMap<String, String>>>,
}

impl MemoryPrincipleStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, file_name: &str) -> Option<String> {
        self.documents.lock().unwrap().get(file_name).cloned()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.lock().unwrap().is_empty()
    }
}

impl PrincipleStore for MemoryPrincipleStore {
    fn write_document(&self, file_name: &str, contents: &str) -> Result<PathBuf, AppError> {
        self.documents.lock().unwrap().insert(file_name.to_string(), contents.to_string());
        Ok(PathBuf::from("memory").join(file_name))
    }
}
