use std::net::SocketAddr;
use std::sync::Arc;

use axum::{Router, middleware, routing::get};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use locus_db_memory::InMemoryStore;
use locus_storage::DynStore;

use crate::{
    cache::LocationCache,
    config::AppConfig,
    handlers::{self, AppState},
    middleware::{AuthState, api_key_middleware},
    repository::LocationRepository,
};

pub struct LocusServer {
    addr: SocketAddr,
    app: Router,
}

/// Builds the application router over the default in-memory store.
pub fn build_app(cfg: &AppConfig) -> Router {
    build_app_with_store(cfg, Arc::new(InMemoryStore::new()))
}

/// Builds the application router over an injected store, so tests and
/// alternative backends reuse the exact same wiring.
pub fn build_app_with_store(cfg: &AppConfig, store: DynStore) -> Router {
    let cache = LocationCache::with_ttl(cfg.cache.ttl());
    let repository = Arc::new(LocationRepository::new(store, cache));
    let state = AppState { repository };
    let auth = AuthState::new(cfg.auth.api_key.as_str());

    // The key check wraps only the location routes; health endpoints stay public.
    let locations = Router::new()
        .route(
            "/locations",
            get(handlers::list_locations)
                .post(handlers::create_location)
                .put(handlers::update_location),
        )
        .route(
            "/locations/{id}",
            get(handlers::get_location)
                .head(handlers::head_location)
                .delete(handlers::delete_location),
        )
        .layer(middleware::from_fn_with_state(auth, api_key_middleware))
        .with_state(state);

    Router::new()
        .route("/", get(handlers::root))
        .route("/healthz", get(handlers::healthz))
        .route("/readyz", get(handlers::readyz))
        .nest("/api", locations)
        .layer(CorsLayer::permissive())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|req: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http.request",
                        http.method = %req.method(),
                        http.target = %req.uri(),
                    )
                })
                .on_response(
                    |res: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     _span: &tracing::Span| {
                        tracing::info!(
                            http.status = %res.status().as_u16(),
                            elapsed_ms = %latency.as_millis(),
                            "request handled"
                        );
                    },
                ),
        )
        .layer(axum::extract::DefaultBodyLimit::max(cfg.server.body_limit_bytes))
}

pub struct ServerBuilder {
    addr: SocketAddr,
    config: AppConfig,
}

impl ServerBuilder {
    pub fn new() -> Self {
        let cfg = AppConfig::default();
        Self {
            addr: cfg.addr(),
            config: cfg,
        }
    }

    pub fn with_addr(mut self, addr: SocketAddr) -> Self {
        self.addr = addr;
        self
    }

    pub fn with_config(mut self, cfg: AppConfig) -> Self {
        self.addr = cfg.addr();
        self.config = cfg;
        self
    }

    pub fn build(self) -> LocusServer {
        let app = build_app(&self.config);

        LocusServer {
            addr: self.addr,
            app,
        }
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LocusServer {
    pub async fn run(self) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.addr).await?;
        tracing::info!("listening on {}", self.addr);
        axum::serve(listener, self.app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
