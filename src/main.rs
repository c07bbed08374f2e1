use std::{path::PathBuf, sync::Arc};

use anyhow::Context;
use product_api::{
    app::{build_app, product::ProductRepository, AppState},
    infrastructure::{
        config::load_config,
        database::DatabaseManager,
        logger::init_logging,
        repository::{InMemoryProductRepository, PgProductRepository},
    },
};
use tokio::{net::TcpListener, signal};
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = load_config(config_path.as_deref()).context("failed to load configuration")?;

    let _guard = init_logging(&config.logging)?;

    info!("Starting product API server...");

    let products: Arc<dyn ProductRepository> = match &config.database.url {
        Some(url) => {
            let db = DatabaseManager::new(url, &config.database).await.map_err(|e| {
                error!("Failed to initialize database: {}", e);
                e
            })?;
            db.ensure_schema().await?;
            Arc::new(PgProductRepository::new(db.get_pool().clone()))
        }
        None => {
            warn!("No database url configured, products are kept in memory");
            Arc::new(InMemoryProductRepository::new())
        }
    };

    let app = build_app(AppState::new(products), &config.http);

    let listener = TcpListener::bind((config.http.bind_address.as_str(), config.http.port)).await?;
    let addr = listener.local_addr()?;

    info!("🚀 Product API running on http://{}", addr);
    info!("   GET    /products        - List products");
    info!("   POST   /products        - Create product");
    info!("   GET    /products/:id    - Get product by ID");
    info!("   PUT    /products/:id    - Replace product");
    info!("   DELETE /products/:id    - Delete product");
    info!("   GET    /health          - Health check");
    info!("   GET    /api-docs/openapi.json - OpenAPI document");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for ctrl-c: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => error!("Failed to install SIGTERM handler: {}", e),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
