//! Typed views over API records

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::lenient;
use crate::result::Record;

/// Decode a classified record into one of the typed views below.
///
/// A record that decodes is guaranteed to carry every required field; callers
/// treat a decode error the same way as a malformed response body.
pub fn decode_record<T: DeserializeOwned>(record: &Record) -> serde_json::Result<T> {
    serde_json::from_value(serde_json::Value::Object(record.clone()))
}

/// Result of the `discord` endpoint: the game account linked to a Discord user.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LinkedAccount {
    pub name: String,
}

/// A player.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ResidentRecord {
    pub name: String,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub town: Option<String>,
    #[serde(rename = "registered", deserialize_with = "lenient::epoch_ms")]
    pub registered_at_ms: i64,
    #[serde(rename = "lastOnline", deserialize_with = "lenient::epoch_ms")]
    pub last_online_ms: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TownRecord {
    pub name: String,
    #[serde(rename = "townBoard", default, deserialize_with = "lenient::text")]
    pub board: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub mayor: String,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub nation: Option<String>,
    #[serde(rename = "memberCount", default, deserialize_with = "lenient::count")]
    pub member_count: u64,
    #[serde(rename = "claimSize", default, deserialize_with = "lenient::count")]
    pub claim_size: u64,
    #[serde(rename = "registered", deserialize_with = "lenient::epoch_ms")]
    pub registered_at_ms: i64,
}

/// Only the nation of a town; every other key is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TownNation {
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub nation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NationRecord {
    pub name: String,
    #[serde(rename = "nationBoard", default, deserialize_with = "lenient::text")]
    pub board: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub leader: String,
    #[serde(rename = "memberCount", default, deserialize_with = "lenient::count")]
    pub member_count: u64,
    #[serde(rename = "towns", default, deserialize_with = "lenient::text")]
    pub towns_display: String,
    #[serde(rename = "allies", default, deserialize_with = "lenient::optional_text")]
    pub allies_display: Option<String>,
    #[serde(rename = "enemies", default, deserialize_with = "lenient::optional_text")]
    pub enemies_display: Option<String>,
    #[serde(rename = "registered", deserialize_with = "lenient::epoch_ms")]
    pub registered_at_ms: i64,
}
