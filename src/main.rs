use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use excelia::config::{AppConfig, DataBackend};
use excelia::repository::{DashboardRepository, Dataset, InMemoryRepository, PgRepository};
use excelia::AppState;
use mimalloc::MiMalloc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// M-MIMALLOC-APP: Use mimalloc as global allocator for improved performance.
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "excelia=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    let config = AppConfig::from_env().context("Failed to load configuration")?;

    let repo = build_repository(&config).await?;
    let state = AppState::new(repo, config.clone());
    let app = excelia::routes::router(state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .with_context(|| format!("Invalid bind address {}:{}", config.host, config.port))?;
    tracing::info!(host = %addr, backend = ?config.data_backend, "Starting Excelia API server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn build_repository(config: &AppConfig) -> anyhow::Result<Arc<dyn DashboardRepository>> {
    match config.data_backend {
        DataBackend::Postgres => {
            let url = config
                .database_url
                .as_deref()
                .context("DATABASE_URL must be set for the postgres backend")?;
            let pool = excelia::db::create_pool(url, config.database_max_connections).await?;
            if config.run_migrations {
                excelia::db::run_migrations(&pool).await?;
                tracing::info!("Database migrations applied");
            }
            Ok(Arc::new(PgRepository::new(pool)))
        }
        DataBackend::Memory => {
            let data = match &config.mock_data_path {
                Some(path) => Dataset::from_path(path)?,
                None => Dataset::demo()?,
            };
            tracing::info!(
                projects = data.projects.len(),
                employees = data.employees.len(),
                "Serving in-memory dataset"
            );
            Ok(Arc::new(InMemoryRepository::new(data)))
        }
    }
}
