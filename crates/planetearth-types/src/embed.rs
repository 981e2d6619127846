//! Platform-neutral rich reply content

use serde::{Deserialize, Serialize};

/// Colour used for every record embed.
pub const EMBED_GREEN: u32 = 0x2ECC71;

/// Embed field
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

/// Message embed: a title plus ordered labelled fields
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Embed {
    pub title: String,
    pub color: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub fields: Vec<EmbedField>,
}

impl Embed {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            color: EMBED_GREEN,
            thumbnail: None,
            fields: Vec::new(),
        }
    }

    pub fn thumbnail(mut self, url: impl Into<String>) -> Self {
        self.thumbnail = Some(url.into());
        self
    }

    /// Append a non-inline field.
    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push(EmbedField {
            name: name.into(),
            value: value.into(),
            inline: false,
        });
        self
    }

    /// Value of the first field with this label.
    pub fn field_value(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_keep_insertion_order() {
        let embed = Embed::new("Alice").field("a", "1").field("b", "2");
        let names: Vec<_> = embed.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);
        assert!(embed.fields.iter().all(|f| !f.inline));
        assert_eq!(embed.color, EMBED_GREEN);
    }

    #[test]
    fn test_field_value_lookup() {
        let embed = Embed::new("t").field("town", "Riverside");
        assert_eq!(embed.field_value("town"), Some("Riverside"));
        assert_eq!(embed.field_value("nation"), None);
    }

    #[test]
    fn test_thumbnail_skipped_when_absent() {
        let json = serde_json::to_value(Embed::new("t")).unwrap();
        assert!(json.get("thumbnail").is_none());
    }
}
