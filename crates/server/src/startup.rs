use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use configs::{AppConfig, PaginationConfig};
use sea_orm::DatabaseConnection;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::routes;

/// Shared per-request state: the connection pool and page-size limits.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DatabaseConnection>,
    pub pagination: PaginationConfig,
}

impl AppState {
    pub fn new(db: DatabaseConnection, pagination: PaginationConfig) -> Self {
        Self { db: Arc::new(db), pagination }
    }
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

pub fn bind_addr(cfg: &AppConfig) -> anyhow::Result<SocketAddr> {
    Ok(format!("{}:{}", cfg.server.host, cfg.server.port).parse()?)
}

/// Resolves on Ctrl+C.
pub async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!(event = "shutdown_signal", "received Ctrl+C, draining connections");
    }
}

/// Connect, build the router and serve until `shutdown` resolves.
/// In-flight requests finish before this returns.
pub async fn serve<F>(cfg: AppConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let db = models::db::connect_with_config(&cfg.database).await?;
    models::db::ping(&db).await?;

    let state = AppState::new(db, cfg.pagination.clone());
    let app: Router = routes::build_router(build_cors(), state);

    let addr = bind_addr(&cfg)?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, event = "listening", max_page_size = cfg.pagination.max_page_size, "edu server accepting requests");
    axum::serve(listener, app).with_graceful_shutdown(shutdown).await?;
    info!(event = "drained", "edu server stopped accepting requests");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[test]
    fn bind_addr_from_config() {
        let mut cfg = AppConfig::default();
        cfg.server.host = "0.0.0.0".into();
        cfg.server.port = 9100;
        assert_eq!(bind_addr(&cfg).unwrap().to_string(), "0.0.0.0:9100");
    }

    #[test]
    fn bad_host_is_an_error() {
        let mut cfg = AppConfig::default();
        cfg.server.host = "not a host".into();
        assert!(bind_addr(&cfg).is_err());
    }

    #[test]
    fn state_clones_share_one_pool_with_mock_backend() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let state = AppState::new(db, PaginationConfig::default());
        let copy = state.clone();
        assert!(Arc::ptr_eq(&state.db, &copy.db));
        assert_eq!(copy.pagination.max_page_size, state.pagination.max_page_size);
    }
}
