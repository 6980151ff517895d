//! Domain rules for messages.
//!
//! The service owns no data: every call goes through the injected
//! [`MessageRepository`]. `update` and `increment_like` work on a message the
//! caller already fetched, so a concurrent writer between the read and the
//! write can have its change overwritten.

mod error;

pub use error::{ID_MISMATCH, NOT_FOUND, ServiceError};

use crate::{
    message::{Message, MessageRequest, Page, PageRequest},
    repository::MessageRepository,
};
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;

#[derive(Clone)]
pub struct MessageService {
    repository: Arc<dyn MessageRepository>,
}

impl MessageService {
    pub fn new(repository: Arc<dyn MessageRepository>) -> Self {
        Self { repository }
    }

    /// Stores a new message. Any id carried by the request is ignored.
    pub async fn create(&self, request: MessageRequest) -> ServiceResult<Message> {
        let message = Message::new(
            request.author.unwrap_or_default(),
            request.content.unwrap_or_default(),
        );
        let created = self.repository.save(message).await?;
        info!("Message created: {}", created.id);
        Ok(created)
    }

    pub async fn find(&self, id: Uuid) -> ServiceResult<Message> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found(NOT_FOUND))
    }

    /// Replaces the content of `existing` with the one from `incoming`.
    ///
    /// Author, id, timestamp and likes are kept from `existing`.
    pub async fn update(
        &self,
        mut existing: Message,
        incoming: MessageRequest,
    ) -> ServiceResult<Message> {
        if incoming.id != Some(existing.id) {
            debug!(
                "Rejected update of {}: body id {:?} does not match",
                existing.id, incoming.id
            );
            return Err(ServiceError::not_found(ID_MISMATCH));
        }

        existing.content = incoming.content.unwrap_or_default();
        let updated = self.repository.save(existing).await?;
        info!("Message updated: {}", updated.id);
        Ok(updated)
    }

    pub async fn delete(&self, id: Uuid) -> ServiceResult<()> {
        self.find(id).await?;
        self.repository.delete_by_id(id).await?;
        info!("Message deleted: {}", id);
        Ok(())
    }

    pub async fn increment_like(&self, mut message: Message) -> ServiceResult<Message> {
        message.like_count = message
            .like_count
            .checked_add(1)
            .ok_or(ServiceError::LikeLimit)?;
        let liked = self.repository.save(message).await?;
        debug!("Message {} now has {} likes", liked.id, liked.like_count);
        Ok(liked)
    }

    pub async fn list(&self, request: PageRequest) -> ServiceResult<Page<Message>> {
        Ok(self.repository.find_page(request).await?)
    }
}
