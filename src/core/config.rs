use secrecy::SecretString;
use std::env;
use std::time::Duration;

use crate::core::error::{BotError, BotResult};

/// Runtime configuration read from the environment
///
/// Recognized variables:
/// - `BOT_TOKEN` (or `TELOXIDE_TOKEN`) - Telegram bot token, required
/// - `WEBHOOK_URL` - externally reachable base URL, `/webhook` is appended
/// - `HUGGING_FACE_API_KEY` - Inference API token, required
/// - `LOG_FILE_PATH` - optional log file next to the console output
pub struct Config {
    pub bot_token: SecretString,
    pub webhook_url: Option<String>,
    pub inference_api_key: SecretString,
    pub log_file_path: Option<String>,
}

impl Config {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> BotResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// Empty values are treated the same as missing ones.
    pub fn from_lookup<F>(lookup: F) -> BotResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let bot_token = get("BOT_TOKEN")
            .or_else(|| get("TELOXIDE_TOKEN"))
            .ok_or_else(|| BotError::Config("BOT_TOKEN environment variable not set".to_string()))?;

        let inference_api_key = get("HUGGING_FACE_API_KEY")
            .ok_or_else(|| BotError::Config("HUGGING_FACE_API_KEY environment variable not set".to_string()))?;

        Ok(Self {
            bot_token: SecretString::from(bot_token),
            webhook_url: get("WEBHOOK_URL").map(|url| url.trim_end_matches('/').to_string()),
            inference_api_key: SecretString::from(inference_api_key),
            log_file_path: get("LOG_FILE_PATH"),
        })
    }
}

/// HTTP listener configuration
pub mod server {
    use std::net::SocketAddr;

    /// Port the webhook server listens on
    pub const PORT: u16 = 5000;

    /// Listen on all interfaces
    pub fn bind_addr() -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], PORT))
    }
}

/// Network configuration for Telegram Bot API calls
pub mod network {
    use super::Duration;

    /// Request timeout for Bot API requests (in seconds)
    pub const REQUEST_TIMEOUT_SECS: u64 = 60;

    /// Request timeout duration
    pub fn timeout() -> Duration {
        Duration::from_secs(REQUEST_TIMEOUT_SECS)
    }
}

/// Image generation endpoint and its fixed parameters
pub mod inference {
    use super::Duration;

    /// Hugging Face Inference API model endpoint
    pub const API_URL: &str = "https://api-inference.huggingface.co/models/runwayml/stable-diffusion-v1-5";

    pub const NUM_INFERENCE_STEPS: u32 = 30;
    pub const GUIDANCE_SCALE: f32 = 7.5;
    pub const WIDTH: u32 = 512;
    pub const HEIGHT: u32 = 512;

    /// Upper bound for a single generation call (in seconds)
    /// Cold models on the free tier can take well over a minute to load
    pub const REQUEST_TIMEOUT_SECS: u64 = 120;

    /// Generation request timeout duration
    pub fn timeout() -> Duration {
        Duration::from_secs(REQUEST_TIMEOUT_SECS)
    }
}
