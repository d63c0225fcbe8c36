//! Text-to-image generation

pub mod client;
pub mod request;

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

pub use client::InferenceClient;
pub use request::{GenerationParameters, ImageRequest};

/// Why a generation attempt produced no image
#[derive(Debug, Error)]
pub enum GenerationError {
    /// Endpoint answered with anything other than 200
    #[error("inference API returned {status}: {body}")]
    Status { status: reqwest::StatusCode, body: String },

    /// Timeout, DNS failure, connection reset, truncated body
    #[error("inference request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Raw image bytes on success. The encoding is whatever the model returns.
pub type ImageResult = Result<Bytes, GenerationError>;

/// Turns a prompt into an image
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> ImageResult;
}
