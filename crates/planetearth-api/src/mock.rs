//! In-memory API double for unit testing without a network.
//!
//! Enabled with the `test-support` feature:
//!
//! ```toml
//! [dev-dependencies]
//! planetearth-api = { path = "...", features = ["test-support"] }
//! ```

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use planetearth_types::{ApiRequest, ApiResult, Endpoint, ErrorCode};

use crate::client::PlanetEarthApi;

/// Replays scripted results per endpoint and records every request.
///
/// Results are consumed in FIFO order; an endpoint with nothing scripted
/// answers `TransportFailure`.
#[derive(Clone, Default)]
pub struct MockApi {
    responses: Arc<Mutex<HashMap<Endpoint, VecDeque<ApiResult>>>>,
    calls: Arc<Mutex<Vec<ApiRequest>>>,
}

impl MockApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a result for the next call to `endpoint`.
    pub fn respond(&self, endpoint: Endpoint, result: ApiResult) -> &Self {
        self.responses
            .lock()
            .unwrap()
            .entry(endpoint)
            .or_default()
            .push_back(result);
        self
    }

    /// Queue a success whose record is the given JSON object.
    pub fn respond_record(&self, endpoint: Endpoint, record: serde_json::Value) -> &Self {
        let serde_json::Value::Object(record) = record else {
            panic!("MockApi::respond_record expects a JSON object");
        };
        self.respond(endpoint, ApiResult::Success { record })
    }

    pub fn respond_error(&self, endpoint: Endpoint, code: ErrorCode) -> &Self {
        self.respond(endpoint, ApiResult::domain_error(code))
    }

    /// Every request received, in call order.
    pub fn calls(&self) -> Vec<ApiRequest> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn calls_to(&self, endpoint: Endpoint) -> Vec<ApiRequest> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.endpoint() == endpoint)
            .cloned()
            .collect()
    }
}

impl PlanetEarthApi for MockApi {
    async fn call(&self, request: &ApiRequest) -> ApiResult {
        self.calls.lock().unwrap().push(request.clone());
        self.responses
            .lock()
            .unwrap()
            .get_mut(&request.endpoint())
            .and_then(VecDeque::pop_front)
            .unwrap_or(ApiResult::TransportFailure)
    }
}
