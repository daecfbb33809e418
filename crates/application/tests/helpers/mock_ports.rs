#![allow(dead_code)]
#![allow(unused_imports)]

use async_trait::async_trait;
use oui_data_application::ports::{DatasetLoader, DatasetWriter, OuiFeed};
use oui_data_domain::{DomainError, OuiMapping};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub fn mapping(pairs: &[(&str, &str)]) -> OuiMapping {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[derive(Clone)]
pub struct MockDatasetLoader {
    result: Result<Vec<u8>, DomainError>,
    calls: Arc<AtomicUsize>,
}

impl MockDatasetLoader {
    pub fn with_bytes(bytes: &[u8]) -> Self {
        Self {
            result: Ok(bytes.to_vec()),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn with_json(json: &str) -> Self {
        Self::with_bytes(json.as_bytes())
    }

    pub fn failing(error: DomainError) -> Self {
        Self {
            result: Err(error),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DatasetLoader for MockDatasetLoader {
    async fn load_raw_data(&self) -> Result<Vec<u8>, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct MockOuiFeed {
    result: Result<OuiMapping, DomainError>,
}

impl MockOuiFeed {
    pub fn with_entries(pairs: &[(&str, &str)]) -> Self {
        Self {
            result: Ok(mapping(pairs)),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            result: Err(DomainError::FeedError(message.to_string())),
        }
    }
}

#[async_trait]
impl OuiFeed for MockOuiFeed {
    async fn fetch(&self) -> Result<OuiMapping, DomainError> {
        self.result.clone()
    }

    fn describe(&self) -> String {
        "mock feed".to_string()
    }
}

#[derive(Clone, Default)]
pub struct MockDatasetWriter {
    written: Arc<Mutex<Vec<OuiMapping>>>,
    fail: bool,
}

impl MockDatasetWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            written: Arc::new(Mutex::new(Vec::new())),
            fail: true,
        }
    }

    pub fn writes(&self) -> Vec<OuiMapping> {
        self.written.lock().unwrap().clone()
    }
}

#[async_trait]
impl DatasetWriter for MockDatasetWriter {
    async fn write(&self, mapping: &OuiMapping) -> Result<String, DomainError> {
        if self.fail {
            return Err(DomainError::WriteError("disk full".to_string()));
        }
        self.written.lock().unwrap().push(mapping.clone());
        Ok("mock://oui.json".to_string())
    }
}
