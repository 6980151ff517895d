pub mod error;
pub mod handlers;
pub mod types;

pub use error::ApiError;

use crate::{
    Result,
    config::Config,
    repository::{InMemoryMessageRepository, MessageRepository, SqliteMessageRepository},
    service::MessageService,
};
use axum::{
    Router,
    routing::{get, put},
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Builds the `/mensagens` routes on top of the given state.
pub fn router(state: handlers::AppState) -> Router {
    Router::new()
        .route(
            "/mensagens",
            get(handlers::list_messages).post(handlers::create_message),
        )
        .route(
            "/mensagens/:id",
            get(handlers::find_message)
                .put(handlers::update_message)
                .delete(handlers::delete_message),
        )
        .route("/mensagens/:id/gostei", put(handlers::like_message))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Opens the configured database, falling back to process memory when it
/// cannot be opened.
pub async fn open_repository(db_path: &str) -> Arc<dyn MessageRepository> {
    match SqliteMessageRepository::new(db_path).await {
        Ok(repository) => Arc::new(repository),
        Err(e) => {
            warn!(
                "Database initialization failed, using in-memory fallback: {}",
                e
            );
            Arc::new(InMemoryMessageRepository::new())
        }
    }
}

pub async fn run(config: Config) -> Result<()> {
    let db_path =
        std::env::var("DATABASE_PATH").unwrap_or_else(|_| config.server.database_path.clone());
    let repository = open_repository(&db_path).await;

    let app_state = handlers::AppState {
        service: MessageService::new(repository),
    };
    let app = router(app_state);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
