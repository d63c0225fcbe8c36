use thiserror::Error;

/// Centralized error types for the application
///
/// Everything that can fail outside the image request itself is converted to
/// this enum. Generation failures have their own type
/// ([`GenerationError`](crate::generation::GenerationError)) because they are
/// an expected outcome, not a fault.
///
/// # Example
///
/// ```no_run
/// use pictora::core::error::BotError;
///
/// fn handle_error(err: BotError) {
///     eprintln!("Error: {}", err);
/// }
/// ```
#[derive(Error, Debug)]
pub enum BotError {
    /// Telegram API errors
    #[error("Telegram error: {0}")]
    Telegram(#[from] teloxide::RequestError),

    /// HTTP client errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// URL parsing errors
    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    /// Missing or invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Logger could not be installed
    #[error("Logger error: {0}")]
    Logger(#[from] log::SetLoggerError),
}

/// Type alias for Result with BotError
pub type BotResult<T> = Result<T, BotError>;
