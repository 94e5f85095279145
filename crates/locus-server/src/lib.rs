pub mod cache;
pub mod config;
pub mod handlers;
pub mod middleware;
pub mod observability;
pub mod repository;
pub mod server;

pub use cache::{DEFAULT_TTL, LocationCache};
pub use config::{AppConfig, AuthConfig, CacheConfig, LoggingConfig, ServerConfig};
pub use middleware::API_KEY_HEADER;
pub use observability::init_tracing;
pub use repository::LocationRepository;
pub use server::{LocusServer, ServerBuilder, build_app, build_app_with_store};
