use thiserror::Error;

pub const NOT_FOUND: &str = "mensagem não encontrada";
pub const ID_MISMATCH: &str = "mensagem não apresenta o ID correto";

/// Failures raised by [`super::MessageService`].
///
/// Missing messages and id mismatches share the `NotFound` kind; only the
/// message text tells them apart.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("{0}")]
    NotFound(String),

    #[error("mensagem atingiu o limite de gostei")]
    LikeLimit,

    #[error(transparent)]
    Storage(#[from] crate::Error),
}

impl ServiceError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }
}
