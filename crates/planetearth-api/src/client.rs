//! PlanetEarth API client
//!
//! One GET per call, no retry. Every transport problem is logged here and
//! returned as [`ApiResult::TransportFailure`]; callers always get a value.

use std::future::Future;

use planetearth_types::{ApiRequest, ApiResult};
use reqwest::Client;
use tracing::{debug, warn};

use crate::classify::{classify, Envelope};
use crate::config::ApiConfig;
use crate::error::{Error, Result};

const USER_AGENT: &str = concat!("planetearth-bot/", env!("CARGO_PKG_VERSION"));

/// Issue one API request and classify the response.
///
/// Implement this to replace the network in tests.
pub trait PlanetEarthApi: Send + Sync {
    fn call(&self, request: &ApiRequest) -> impl Future<Output = ApiResult> + Send;
}

/// reqwest-backed gateway
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Result<Self> {
        if config.base_url.trim().is_empty() {
            return Err(Error::Config("base_url is empty".to_string()));
        }

        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            config,
        })
    }

    async fn fetch(&self, request: &ApiRequest) -> Result<ApiResult> {
        let url = self.config.endpoint_url(request.endpoint());
        let request = match (&self.config.api_key, request.api_key()) {
            (Some(key), None) => request.clone().with_api_key(key),
            _ => request.clone(),
        };

        debug!("GET {} params={:?}", url, request.params());

        // Strip the URL from errors so the API key never reaches the logs.
        let response = self
            .http
            .get(&url)
            .query(&request.query_pairs())
            .send()
            .await
            .map_err(|e| Error::Http(e.without_url()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| Error::Http(e.without_url()))?;
        let envelope: Envelope = serde_json::from_slice(&body)?;
        let result = classify(envelope);

        debug!(
            "{} responded: {}",
            request.endpoint(),
            match &result {
                ApiResult::Success { .. } => "success",
                ApiResult::DomainError { .. } => "domain error",
                ApiResult::TransportFailure => "empty record",
            }
        );

        Ok(result)
    }
}

impl PlanetEarthApi for ApiClient {
    async fn call(&self, request: &ApiRequest) -> ApiResult {
        match self.fetch(request).await {
            Ok(result) => result,
            Err(e) => {
                warn!("PlanetEarth API call to '{}' failed: {}", request.endpoint(), e);
                ApiResult::TransportFailure
            }
        }
    }
}
