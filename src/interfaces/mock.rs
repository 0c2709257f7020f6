use std::collections::HashMap;
use std::sync::Mutex;

use super::{ClientError, RemoteClient};

/// In-memory service recording every request it receives
#[derive(Default)]
pub struct MockClient {
    documents: HashMap<String, Vec<u8>>,
    statuses: HashMap<String, u16>,
    patch_statuses: HashMap<String, u16>,
    gets: Mutex<Vec<String>>,
    patches: Mutex<Vec<(String, serde_json::Value)>>,
}

impl MockClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(mut self, uri: &str, body: impl AsRef<[u8]>) -> Self {
        self.documents.insert(uri.to_string(), body.as_ref().to_vec());
        self
    }

    pub fn with_status(mut self, uri: &str, status: u16) -> Self {
        self.statuses.insert(uri.to_string(), status);
        self
    }

    pub fn with_patch_status(mut self, uri: &str, status: u16) -> Self {
        self.patch_statuses.insert(uri.to_string(), status);
        self
    }

    pub fn gets(&self) -> Vec<String> {
        self.gets.lock().unwrap().clone()
    }

    pub fn patches(&self) -> Vec<(String, serde_json::Value)> {
        self.patches.lock().unwrap().clone()
    }
}

impl RemoteClient for MockClient {
    fn get(&self, uri: &str) -> Result<Vec<u8>, ClientError> {
        self.gets.lock().unwrap().push(uri.to_string());
        if let Some(status) = self.statuses.get(uri) {
            return Err(ClientError::Status {
                uri: uri.to_string(),
                status: *status,
            });
        }
        self.documents
            .get(uri)
            .cloned()
            .ok_or_else(|| ClientError::Status {
                uri: uri.to_string(),
                status: 404,
            })
    }

    fn patch(&self, uri: &str, payload: &[u8]) -> Result<(), ClientError> {
        let body = serde_json::from_slice(payload).unwrap();
        self.patches.lock().unwrap().push((uri.to_string(), body));
        match self.patch_statuses.get(uri) {
            Some(status) => Err(ClientError::Status {
                uri: uri.to_string(),
                status: *status,
            }),
            None => Ok(()),
        }
    }
}
