use std::sync::Arc;

use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use gigbook_server::config::Config;
use gigbook_server::db::{self, Directory, MemoryDirectory, PgDirectory};
use gigbook_server::routes::create_routes;
use gigbook_server::AppState;

const DEFAULT_LOG_FILTER: &str = "gigbook_server=info,tower_http=info";

#[tokio::main]
async fn main() {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let config = Config::from_env().expect("Invalid configuration");

    let directory: Arc<dyn Directory> = match &config.database_url {
        Some(database_url) => {
            let pool = db::connect(database_url, config.max_connections)
                .await
                .expect("Failed to connect to database");
            tracing::info!("Successfully connected to database");

            db::run_migrations(&pool)
                .await
                .expect("Failed to run migrations");
            tracing::info!("Migrations run successfully");

            Arc::new(PgDirectory::new(pool))
        }
        None => {
            tracing::warn!("DATABASE_URL not set; listings are kept in memory and lost on exit");
            Arc::new(MemoryDirectory::new())
        }
    };

    let app = create_routes(AppState::new(directory));

    tracing::info!("🚀 Server running at http://{}", config.bind_addr);

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app).await.expect("Server failed");
}
