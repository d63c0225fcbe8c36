//! Core utilities, configuration, errors, and the HTTP server

pub mod config;
pub mod error;
pub mod logging;
pub mod web_server;

// Re-exports for convenience
pub use config::Config;
pub use error::{BotError, BotResult};
pub use logging::{init_logger, install_panic_logger};
pub use web_server::{router, start_web_server, AppState};
