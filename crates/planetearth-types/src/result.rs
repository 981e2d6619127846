//! Classified API outcomes

use serde::{Deserialize, Serialize};

/// One decoded record: the first element of an envelope's `data` array.
pub type Record = serde_json::Map<String, serde_json::Value>;

/// Business-level failure codes signalled in the envelope's `error.code`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    NoDataFound,
    RateLimit,
    /// Any code not listed above.
    #[serde(other)]
    Unknown,
}

impl ErrorCode {
    /// Map a wire code; unrecognised codes collapse to [`ErrorCode::Unknown`].
    pub fn from_wire(code: &str) -> Self {
        match code {
            "NO_DATA_FOUND" => Self::NoDataFound,
            "RATE_LIMIT" => Self::RateLimit,
            _ => Self::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NoDataFound => "NO_DATA_FOUND",
            Self::RateLimit => "RATE_LIMIT",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one API call. Exactly one variant; a record only exists on
/// `Success`.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResult {
    Success { record: Record },
    DomainError {
        code: ErrorCode,
        message: Option<String>,
    },
    /// Connection error, non-2xx status, or a body that is not a usable envelope.
    TransportFailure,
}

impl ApiResult {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn domain_error(code: ErrorCode) -> Self {
        Self::DomainError {
            code,
            message: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_wire_known_codes() {
        assert_eq!(ErrorCode::from_wire("NO_DATA_FOUND"), ErrorCode::NoDataFound);
        assert_eq!(ErrorCode::from_wire("RATE_LIMIT"), ErrorCode::RateLimit);
        assert_eq!(ErrorCode::from_wire("UNKNOWN"), ErrorCode::Unknown);
    }

    #[test]
    fn test_from_wire_unrecognised_collapses_to_unknown() {
        assert_eq!(ErrorCode::from_wire("INVALID_KEY"), ErrorCode::Unknown);
        assert_eq!(ErrorCode::from_wire(""), ErrorCode::Unknown);
        assert_eq!(ErrorCode::from_wire("no_data_found"), ErrorCode::Unknown);
    }

    #[test]
    fn test_error_code_serde() {
        for (v, expected) in [
            (ErrorCode::NoDataFound, "\"NO_DATA_FOUND\""),
            (ErrorCode::RateLimit, "\"RATE_LIMIT\""),
            (ErrorCode::Unknown, "\"UNKNOWN\""),
        ] {
            assert_eq!(serde_json::to_string(&v).unwrap(), expected);
        }
        let other: ErrorCode = serde_json::from_str("\"SERVER_ERROR\"").unwrap();
        assert_eq!(other, ErrorCode::Unknown);
    }

    #[test]
    fn test_is_success() {
        assert!(ApiResult::Success {
            record: Record::new()
        }
        .is_success());
        assert!(!ApiResult::domain_error(ErrorCode::RateLimit).is_success());
        assert!(!ApiResult::TransportFailure.is_success());
    }
}
