use thiserror::Error;
use uuid::Uuid;

pub const INVALID_ID: &str = "UUID inválido";

/// A path segment that is not a well-formed UUID.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{}", INVALID_ID)]
pub struct InvalidMessageId {
    pub raw: String,
}

/// Parses a raw path identifier into a message id.
pub fn parse_message_id(raw: &str) -> Result<Uuid, InvalidMessageId> {
    Uuid::parse_str(raw).map_err(|_| InvalidMessageId {
        raw: raw.to_string(),
    })
}
