use super::MessageRequest;
use serde::Serialize;

pub const AUTHOR_EMPTY: &str = "usuário não pode estar vazio";
pub const CONTENT_EMPTY: &str = "conteúdo não pode estar vazio";

/// A single failed field constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

impl FieldError {
    const fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

impl MessageRequest {
    /// Checks the declared field constraints.
    ///
    /// Errors are returned in field declaration order; an empty vector means
    /// the payload may be handed to the service.
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        if is_blank(self.author.as_deref()) {
            errors.push(FieldError::new("usuario", AUTHOR_EMPTY));
        }
        if is_blank(self.content.as_deref()) {
            errors.push(FieldError::new("conteudo", CONTENT_EMPTY));
        }
        errors
    }
}

// Emptiness only: whitespace-only values are accepted.
fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(str::is_empty)
}
