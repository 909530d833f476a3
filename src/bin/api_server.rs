use restaurant_reviews::infra::config::{Config, StoreBackend};
use restaurant_reviews::infra::logging::init_logging;
use restaurant_reviews::transport;
use restaurant_reviews::{InMemoryStore, PgStore};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let config = Config::from_env()?;
    init_logging(&config.log_level, config.log_format);

    // --- Store Initialization ---
    let app_state = match config.store_backend {
        StoreBackend::Postgres => {
            let url = config.database_url.as_deref().unwrap_or_default();
            let store = PgStore::connect(url, config.db_max_connections).await?;
            tracing::info!(max_connections = config.db_max_connections, "connected to PostgreSQL");
            transport::http::AppState::with_store(Arc::new(store))
        }
        StoreBackend::Memory => {
            tracing::warn!("using in-memory store; data is lost on shutdown");
            transport::http::AppState::with_store(Arc::new(InMemoryStore::new()))
        }
    };

    // --- API Server Initialization ---
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);
    let app = transport::http::create_router(app_state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", transport::http::ApiDoc::openapi()))
        .layer(cors);
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "API server listening");
    tracing::info!("Swagger UI available at /swagger-ui");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "failed to listen for shutdown signal");
            }
            tracing::info!("shutdown signal received");
        })
        .await?;

    tracing::info!("graceful shutdown complete");
    Ok(())
}
