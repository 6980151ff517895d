use crate::message::DEFAULT_PAGE_SIZE;
use serde::{Deserialize, Serialize};

pub const MESSAGE_REMOVED: &str = "mensagem removida";

#[derive(Debug, Deserialize)]
pub struct PageParams {
    #[serde(default)]
    pub page: u32,
    #[serde(default = "default_size")]
    pub size: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
    pub errors: Vec<String>,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>, errors: Vec<String>) -> Self {
        Self {
            message: message.into(),
            errors,
        }
    }
}

fn default_size() -> u32 {
    DEFAULT_PAGE_SIZE.get()
}
