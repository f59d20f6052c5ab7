//! Fake search backend for tool tests

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use super::{CredentialSource, ToolContext};
use crate::gateway::{GatewayError, SearchBackend, SearchParams};

/// Records every parameter map and answers with a canned outcome
pub struct RecordingBackend {
    reply: Result<Value, GatewayError>,
    calls: Mutex<Vec<SearchParams>>,
}

impl RecordingBackend {
    pub fn replying(body: Value) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(body),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(err: GatewayError) -> Arc<Self> {
        Arc::new(Self {
            reply: Err(err),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<SearchParams> {
        self.calls.lock().unwrap().clone()
    }

    pub fn last_call(&self) -> SearchParams {
        self.calls().pop().expect("backend was never called")
    }
}

#[async_trait]
impl SearchBackend for RecordingBackend {
    async fn search(&self, params: &SearchParams) -> Result<Value, GatewayError> {
        self.calls.lock().unwrap().push(params.clone());
        self.reply.clone()
    }
}

pub fn context_with(backend: Arc<RecordingBackend>) -> ToolContext {
    ToolContext::new(backend, CredentialSource::Fixed("test-key".to_string()))
}

pub fn context_without_key(backend: Arc<RecordingBackend>) -> ToolContext {
    ToolContext::new(backend, CredentialSource::Missing)
}
