use tracing_subscriber::{EnvFilter, fmt};

/// Installs a fmt subscriber filtered by `RUST_LOG`, `info` when unset.
/// A second call leaves the first subscriber in place.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if fmt().with_env_filter(filter).try_init().is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
