//! Install a [`tracing`] subscriber for native or browser targets with one call.
//!
//! ```rust, no_run
//! use tracing::Level;
//!
//! domount_logger::init(Level::DEBUG).expect("failed to init logger");
//! tracing::info!("ready to mount");
//! ```

use tracing::Level;

/// The environment variable read by [`initialize_default`] to choose a level.
pub const LOG_ENV: &str = "DOMOUNT_LOG";

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    #[error("A global tracing subscriber has already been set")]
    AlreadyInitialized,
}

/// Initialize the logger with the level from [`LOG_ENV`], falling back to `INFO`.
///
/// Unlike [`init`], this never fails. If a subscriber is already installed it is left in place.
pub fn initialize_default() {
    let level = std::env::var(LOG_ENV)
        .ok()
        .and_then(|level| level.parse().ok())
        .unwrap_or(Level::INFO);

    if init(level).is_err() {
        tracing::debug!("A tracing subscriber was already installed, keeping it");
    }
}

/// Install the platform's subscriber, showing events at `level` and above.
///
/// On native targets `RUST_LOG` takes precedence over `level` when it is set.
#[cfg(not(target_arch = "wasm32"))]
pub fn init(level: Level) -> Result<(), LoggerError> {
    use tracing_subscriber::{filter::LevelFilter, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(LevelFilter::from_level(level).into()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .try_init()
        .map_err(|_| LoggerError::AlreadyInitialized)
}

/// Install the platform's subscriber, showing events at `level` and above.
///
/// In the browser events are written to the developer console.
#[cfg(target_arch = "wasm32")]
pub fn init(level: Level) -> Result<(), LoggerError> {
    use tracing_subscriber::layer::SubscriberExt;

    let config = tracing_wasm::WASMLayerConfigBuilder::default()
        .set_max_level(level)
        .build();
    let subscriber = tracing_subscriber::registry().with(tracing_wasm::WASMLayer::new(config));

    tracing::subscriber::set_global_default(subscriber).map_err(|_| LoggerError::AlreadyInitialized)
}
