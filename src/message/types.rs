use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A message posted to the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: Uuid,
    #[serde(rename = "usuario")]
    pub author: String,
    #[serde(rename = "conteudo")]
    pub content: String,
    #[serde(rename = "dataCriacao", with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "gostei", default)]
    pub like_count: u32,
}

impl Message {
    /// Builds a brand-new message with a generated id and the current time.
    ///
    /// Timestamps keep microsecond precision so they survive a round-trip
    /// through storage and JSON unchanged.
    pub fn new(author: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            author: author.into(),
            content: content.into(),
            created_at: Utc::now().trunc_subsecs(6),
            like_count: 0,
        }
    }
}

/// Inbound payload for create and update calls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(rename = "usuario", default)]
    pub author: Option<String>,
    #[serde(rename = "conteudo", default)]
    pub content: Option<String>,
}

impl MessageRequest {
    pub fn new(author: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: None,
            author: Some(author.into()),
            content: Some(content.into()),
        }
    }

    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = Some(id);
        self
    }
}

impl From<&Message> for MessageRequest {
    fn from(message: &Message) -> Self {
        Self {
            id: Some(message.id),
            author: Some(message.author.clone()),
            content: Some(message.content.clone()),
        }
    }
}

/// `dataCriacao` wire format: `YYYY-MM-DD HH:MM:SS.ffffff`.
pub mod timestamp {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&value.format(FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, FORMAT)
            .map(|naive| naive.and_utc())
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_new_message_defaults() {
        let before = Utc::now().trunc_subsecs(6);
        let message = Message::new("joe", "xpto test");
        let after = Utc::now();

        assert_eq!(message.author, "joe");
        assert_eq!(message.content, "xpto test");
        assert_eq!(message.like_count, 0);
        assert!(!message.id.is_nil());
        assert!(message.created_at >= before && message.created_at <= after);
    }

    #[test]
    fn test_new_messages_get_distinct_ids() {
        let first = Message::new("joe", "one");
        let second = Message::new("joe", "two");
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_message_json_shape() {
        let id = Uuid::parse_str("5f0c6f5e-8d4b-4a55-9a4e-2b9f3c1d7e10").unwrap();
        let message = Message {
            id,
            author: "joe".to_string(),
            content: "xpto".to_string(),
            created_at: Utc
                .with_ymd_and_hms(2024, 3, 5, 14, 7, 9)
                .unwrap()
                .with_nanosecond(123_456_000)
                .unwrap(),
            like_count: 3,
        };

        let value = serde_json::to_value(&message).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "5f0c6f5e-8d4b-4a55-9a4e-2b9f3c1d7e10",
                "usuario": "joe",
                "conteudo": "xpto",
                "dataCriacao": "2024-03-05 14:07:09.123456",
                "gostei": 3
            })
        );

        let parsed: Message = serde_json::from_value(value).unwrap();
        assert_eq!(parsed, message);
    }

    #[test]
    fn test_invalid_timestamp_is_rejected() {
        let result = serde_json::from_value::<Message>(json!({
            "id": Uuid::new_v4(),
            "usuario": "joe",
            "conteudo": "xpto",
            "dataCriacao": "yesterday",
            "gostei": 0
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_request_ignores_unknown_fields() {
        let request: MessageRequest = serde_json::from_value(json!({
            "usuario": "joe",
            "conteudo": "xpto",
            "dataCriacao": "2024-03-05 14:07:09.123456",
            "gostei": 7
        }))
        .unwrap();

        assert_eq!(request, MessageRequest::new("joe", "xpto"));
    }

    #[test]
    fn test_request_missing_fields_are_none() {
        let request: MessageRequest = serde_json::from_value(json!({})).unwrap();
        assert_eq!(request, MessageRequest::default());
    }

    #[test]
    fn test_request_from_message_copies_identity() {
        let message = Message::new("joe", "xpto");
        let request = MessageRequest::from(&message);
        assert_eq!(request.id, Some(message.id));
        assert_eq!(request.author.as_deref(), Some("joe"));
        assert_eq!(request.content.as_deref(), Some("xpto"));
    }
}
