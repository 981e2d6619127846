//! Outbound API requests

use serde::{Deserialize, Serialize};

/// Named PlanetEarth API endpoint
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Endpoint {
    /// Discord account → linked game account
    Discord,
    Resident,
    Town,
    Nation,
}

impl Endpoint {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Discord => "discord",
            Self::Resident => "resident",
            Self::Town => "town",
            Self::Nation => "nation",
        }
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single GET against one endpoint.
///
/// Built with the consuming `param` / `with_api_key` methods; read-only once
/// handed to a gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    endpoint: Endpoint,
    params: Vec<(String, String)>,
    api_key: Option<String>,
}

impl ApiRequest {
    pub fn new(endpoint: Endpoint) -> Self {
        Self {
            endpoint,
            params: Vec::new(),
            api_key: None,
        }
    }

    /// `discord?discord=<member id>`
    pub fn linked_account(member_id: u64) -> Self {
        Self::new(Endpoint::Discord).param("discord", member_id.to_string())
    }

    /// `<endpoint>?name=<name>`
    pub fn by_name(endpoint: Endpoint, name: impl Into<String>) -> Self {
        Self::new(endpoint).param("name", name)
    }

    /// Append a query parameter; order is preserved on the wire.
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn endpoint(&self) -> Endpoint {
        self.endpoint
    }

    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    /// Query string pairs as sent: `key` first (when present), then params.
    pub fn query_pairs(&self) -> Vec<(&str, &str)> {
        let mut pairs = Vec::with_capacity(self.params.len() + 1);
        if let Some(key) = &self.api_key {
            pairs.push(("key", key.as_str()));
        }
        pairs.extend(self.params.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_names() {
        assert_eq!(Endpoint::Discord.as_str(), "discord");
        assert_eq!(Endpoint::Resident.as_str(), "resident");
        assert_eq!(Endpoint::Town.to_string(), "town");
        assert_eq!(Endpoint::Nation.to_string(), "nation");
    }

    #[test]
    fn test_linked_account_request() {
        let req = ApiRequest::linked_account(123456789);
        assert_eq!(req.endpoint(), Endpoint::Discord);
        assert_eq!(
            req.params(),
            &[("discord".to_string(), "123456789".to_string())]
        );
        assert!(req.api_key().is_none());
    }

    #[test]
    fn test_query_pairs_key_first_then_params_in_order() {
        let req = ApiRequest::new(Endpoint::Town)
            .param("name", "Riverside")
            .param("extra", "1")
            .with_api_key("secret");
        assert_eq!(
            req.query_pairs(),
            vec![("key", "secret"), ("name", "Riverside"), ("extra", "1")]
        );
    }

    #[test]
    fn test_query_pairs_without_key() {
        let req = ApiRequest::by_name(Endpoint::Nation, "Eastland");
        assert_eq!(req.query_pairs(), vec![("name", "Eastland")]);
    }
}
