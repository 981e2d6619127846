//! Response envelope classification
//!
//! Every PlanetEarth endpoint answers with the same envelope:
//!
//! ```json
//! { "status": "OK" | "FAILED", "data": [ { ... } ], "error": { "code": "...", "message": "..." } }
//! ```
//!
//! [`classify`] turns a decoded envelope into an [`ApiResult`] without side
//! effects.

use planetearth_types::{ApiResult, ErrorCode};
use serde::Deserialize;
use serde_json::Value;

const STATUS_FAILED: &str = "FAILED";

#[derive(Debug, Clone, Deserialize)]
pub struct Envelope {
    pub status: String,
    #[serde(default)]
    pub data: Option<Vec<Value>>,
    #[serde(default)]
    pub error: Option<ErrorBody>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    /// Usually a string; anything else classifies as `UNKNOWN`
    #[serde(default)]
    pub code: Option<Value>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Classify one envelope.
///
/// A non-`FAILED` status with no first record (or a first element that is not
/// an object) is a transport failure, not a success.
pub fn classify(envelope: Envelope) -> ApiResult {
    if envelope.status == STATUS_FAILED {
        let error = envelope.error.unwrap_or_default();
        return ApiResult::DomainError {
            code: error
                .code
                .as_ref()
                .and_then(Value::as_str)
                .map_or(ErrorCode::Unknown, ErrorCode::from_wire),
            message: error.message,
        };
    }

    match envelope.data.and_then(|data| data.into_iter().next()) {
        Some(Value::Object(record)) => ApiResult::Success { record },
        _ => ApiResult::TransportFailure,
    }
}
