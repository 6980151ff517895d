//! Persistence boundary for messages.

mod memory;
mod sqlite;

pub use memory::InMemoryMessageRepository;
pub use sqlite::SqliteMessageRepository;

use crate::{
    Result,
    message::{Message, Page, PageRequest},
};
use async_trait::async_trait;
use uuid::Uuid;

/// Message persistence contract.
///
/// Each call is atomic on its own; callers that read and then write get no
/// isolation between the two steps.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Returns `None` when no message has the given id.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Message>>;

    /// Inserts the message, or replaces the stored one with the same id.
    async fn save(&self, message: Message) -> Result<Message>;

    /// Removes the message. Deleting an unknown id is a no-op.
    async fn delete_by_id(&self, id: Uuid) -> Result<()>;

    /// Returns one page of messages, oldest first.
    async fn find_page(&self, request: PageRequest) -> Result<Page<Message>>;
}
