// gateway/src/testing.rs
//
// In-memory transport for exercising clients and pages without a network.
// Stubs are keyed by "<METHOD> <path>"; every call is recorded so tests can
// assert on the traffic.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;

use crate::errors::{GatewayError, GatewayResult};
use crate::transport::ApiTransport;

#[derive(Default)]
pub struct StubTransport {
    responses: Mutex<HashMap<String, GatewayResult<Value>>>,
    calls: Mutex<Vec<String>>,
}

impl StubTransport {
    pub fn new() -> Self {
        StubTransport::default()
    }

    pub fn stub(&self, method: &str, path: &str, response: GatewayResult<Value>) {
        self.responses
            .lock()
            .expect("stub lock")
            .insert(format!("{method} {path}"), response);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("calls lock").clone()
    }

    fn lookup(&self, key: &str) -> GatewayResult<Value> {
        self.calls.lock().expect("calls lock").push(key.to_string());
        self.responses
            .lock()
            .expect("stub lock")
            .get(key)
            .cloned()
            .unwrap_or_else(|| Err(GatewayError::Transport(format!("no stub for {key}"))))
    }
}

#[async_trait]
impl ApiTransport for StubTransport {
    async fn get(&self, path: &str) -> GatewayResult<Value> {
        self.lookup(&format!("GET {path}"))
    }

    async fn send(&self, method: Method, path: &str, _body: Option<Value>) -> GatewayResult<Value> {
        self.lookup(&format!("{method} {path}"))
    }
}
