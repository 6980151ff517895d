use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, Response},
};
use message_board::{
    message::{Message, MessageRequest},
    repository::{InMemoryMessageRepository, MessageRepository, SqliteMessageRepository},
    server::{handlers::AppState, router},
    service::MessageService,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use tempfile::TempDir;

/// Service over a fresh in-memory repository. The repository handle is
/// returned so tests can inspect the store directly.
pub fn create_memory_service() -> (MessageService, Arc<InMemoryMessageRepository>) {
    let repository = Arc::new(InMemoryMessageRepository::new());
    let service = MessageService::new(repository.clone());
    (service, repository)
}

/// Service over a file-backed libSQL database in a temporary directory.
pub async fn create_sqlite_service() -> (MessageService, TempDir) {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
    let db_path = temp_dir.path().join("test.db");
    let repository = SqliteMessageRepository::new(&db_path.to_string_lossy())
        .await
        .expect("Failed to open test database");
    (MessageService::new(Arc::new(repository)), temp_dir)
}

/// Router wired to an in-memory store.
pub fn create_test_app() -> (Router, Arc<InMemoryMessageRepository>) {
    let (service, repository) = create_memory_service();
    (router(AppState { service }), repository)
}

/// Router wired to a file-backed libSQL store.
pub async fn create_sqlite_app() -> (Router, TempDir) {
    let (service, temp_dir) = create_sqlite_service().await;
    (router(AppState { service }), temp_dir)
}

/// Sample message as a client would submit it.
pub fn sample_request() -> MessageRequest {
    MessageRequest::new("joe", "xpto test")
}

/// Stores a sample message directly through the repository.
pub async fn register_message(repository: &dyn MessageRepository) -> Message {
    repository
        .save(Message::new("joe", "xpto test"))
        .await
        .expect("Failed to store message")
}

pub fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json<T: DeserializeOwned>(response: Response<Body>) -> T {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
