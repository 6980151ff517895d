use super::MessageRepository;
use crate::{
    Error, Result,
    message::{Message, Page, PageRequest},
};
use async_trait::async_trait;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::debug;
use uuid::Uuid;

/// Process-local message store, kept in insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMessageRepository {
    messages: Arc<Mutex<Vec<Message>>>,
}

impl InMemoryMessageRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<Message>>> {
        self.messages
            .lock()
            .map_err(|e| Error::internal(format!("Mutex lock failed: {e}")))
    }
}

#[async_trait]
impl MessageRepository for InMemoryMessageRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Message>> {
        let messages = self.lock()?;
        Ok(messages.iter().find(|m| m.id == id).cloned())
    }

    async fn save(&self, message: Message) -> Result<Message> {
        let mut messages = self.lock()?;
        match messages.iter_mut().find(|m| m.id == message.id) {
            Some(stored) => *stored = message.clone(),
            None => messages.push(message.clone()),
        }
        debug!("Message saved to memory: {}", message.id);
        Ok(message)
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<()> {
        let mut messages = self.lock()?;
        messages.retain(|m| m.id != id);
        Ok(())
    }

    async fn find_page(&self, request: PageRequest) -> Result<Page<Message>> {
        let messages = self.lock()?;
        let offset = usize::try_from(request.offset()).unwrap_or(usize::MAX);
        let limit = usize::try_from(request.limit()).unwrap_or(usize::MAX);
        let content: Vec<Message> = messages.iter().skip(offset).take(limit).cloned().collect();
        debug!(
            "Retrieved {} messages from memory for page {}",
            content.len(),
            request.page
        );
        Ok(Page::new(content, request, messages.len() as u64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::num::NonZeroU32;

    fn page(page: u32, size: u32) -> PageRequest {
        PageRequest::new(page, NonZeroU32::new(size).unwrap())
    }

    #[tokio::test]
    async fn test_save_and_find() {
        let repository = InMemoryMessageRepository::new();
        let message = Message::new("joe", "xpto test");

        let saved = repository.save(message.clone()).await.unwrap();
        assert_eq!(saved, message);

        let found = repository.find_by_id(message.id).await.unwrap();
        assert_eq!(found, Some(message));
    }

    #[tokio::test]
    async fn test_find_unknown_id() {
        let repository = InMemoryMessageRepository::new();
        assert_eq!(repository.find_by_id(Uuid::new_v4()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_save_replaces_existing() {
        let repository = InMemoryMessageRepository::new();
        let mut message = repository.save(Message::new("joe", "old")).await.unwrap();
        message.content = "new".to_string();
        repository.save(message.clone()).await.unwrap();

        let listed = repository.find_page(PageRequest::default()).await.unwrap();
        assert_eq!(listed.total_elements, 1);
        assert_eq!(listed.content[0].content, "new");
    }

    #[tokio::test]
    async fn test_delete() {
        let repository = InMemoryMessageRepository::new();
        let message = repository.save(Message::new("joe", "xpto")).await.unwrap();

        repository.delete_by_id(message.id).await.unwrap();
        assert_eq!(repository.find_by_id(message.id).await.unwrap(), None);

        // unknown ids are ignored
        repository.delete_by_id(Uuid::new_v4()).await.unwrap();
    }

    #[tokio::test]
    async fn test_pagination_keeps_insertion_order() {
        let repository = InMemoryMessageRepository::new();
        for i in 0..5 {
            repository
                .save(Message::new("joe", format!("message {i}")))
                .await
                .unwrap();
        }

        let second = repository.find_page(page(1, 2)).await.unwrap();
        assert_eq!(second.total_elements, 5);
        assert_eq!(second.total_pages, 3);
        let contents: Vec<&str> = second.content.iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, vec!["message 2", "message 3"]);

        let beyond = repository.find_page(page(9, 2)).await.unwrap();
        assert!(beyond.content.is_empty());
        assert_eq!(beyond.total_elements, 5);
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let repository = InMemoryMessageRepository::new();
        let clone = repository.clone();
        let message = clone.save(Message::new("joe", "shared")).await.unwrap();
        assert!(repository.find_by_id(message.id).await.unwrap().is_some());
    }
}
