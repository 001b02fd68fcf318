pub mod config;
pub mod error;
pub mod message;
pub mod routes;
pub mod services;
pub mod state;

/// Installs the fmt subscriber used by both binaries, filtered by `RUST_LOG`.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("chat_relay=info,tower_http=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
