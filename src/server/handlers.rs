use super::{
    error::ApiError,
    types::{MESSAGE_REMOVED, PageParams},
};
use crate::{
    message::{Message, MessageRequest, Page, PageRequest, parse_message_id},
    service::MessageService,
};
use axum::{
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    response::Json,
};
use std::num::NonZeroU32;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub service: MessageService,
}

// Body rejections and field validation both run before any service call.
fn json_body(
    payload: Result<Json<MessageRequest>, JsonRejection>,
) -> Result<MessageRequest, ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::MalformedRequest(e.body_text()))?;
    let errors = request.validate();
    if errors.is_empty() {
        Ok(request)
    } else {
        Err(ApiError::Validation(errors))
    }
}

pub async fn create_message(
    State(state): State<AppState>,
    payload: Result<Json<MessageRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Message>), ApiError> {
    info!("Received request to create message");
    let request = json_body(payload)?;
    let created = state.service.create(request).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn find_message(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Message>, ApiError> {
    info!("Received request to find message: {}", id);
    let id = parse_message_id(&id)?;
    let message = state.service.find(id).await?;
    Ok(Json(message))
}

pub async fn list_messages(
    State(state): State<AppState>,
    params: Result<Query<PageParams>, QueryRejection>,
) -> Result<Json<Page<Message>>, ApiError> {
    let Query(params) = params.map_err(|e| ApiError::MalformedRequest(e.body_text()))?;
    info!(
        "Received request to list messages: page={}, size={}",
        params.page, params.size
    );
    let size = NonZeroU32::new(params.size).ok_or(ApiError::InvalidPageSize)?;
    let page = state
        .service
        .list(PageRequest::new(params.page, size))
        .await?;
    Ok(Json(page))
}

pub async fn update_message(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<MessageRequest>, JsonRejection>,
) -> Result<Json<Message>, ApiError> {
    info!("Received request to update message: {}", id);
    let request = json_body(payload)?;
    let id = parse_message_id(&id)?;
    let existing = state.service.find(id).await?;
    let updated = state.service.update(existing, request).await?;
    Ok(Json(updated))
}

pub async fn like_message(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Message>, ApiError> {
    info!("Received request to like message: {}", id);
    let id = parse_message_id(&id)?;
    let message = state.service.find(id).await?;
    let liked = state.service.increment_like(message).await?;
    Ok(Json(liked))
}

pub async fn delete_message(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<&'static str, ApiError> {
    info!("Received request to delete message: {}", id);
    let id = parse_message_id(&id)?;
    state.service.find(id).await?;
    state.service.delete(id).await?;
    Ok(MESSAGE_REMOVED)
}
