//! Hugging Face Inference API client

use async_trait::async_trait;
use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;
use url::Url;

use super::request::ImageRequest;
use super::{GenerationError, ImageGenerator, ImageResult};
use crate::core::config::inference;
use crate::core::error::BotResult;

/// Sends prompts to a single text-to-image model endpoint
pub struct InferenceClient {
    http: reqwest::Client,
    endpoint: Url,
    api_key: SecretString,
}

impl InferenceClient {
    /// Creates a client for `endpoint` with a bounded request timeout.
    pub fn new(endpoint: Url, api_key: SecretString, timeout: Duration) -> BotResult<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { http, endpoint, api_key })
    }

    /// Client for the default Stable Diffusion endpoint
    pub fn stable_diffusion(api_key: SecretString) -> BotResult<Self> {
        let endpoint = Url::parse(inference::API_URL)?;
        Self::new(endpoint, api_key, inference::timeout())
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl ImageGenerator for InferenceClient {
    async fn generate(&self, prompt: &str) -> ImageResult {
        let response = self
            .http
            .post(self.endpoint.clone())
            .bearer_auth(self.api_key.expose_secret())
            .json(&ImageRequest::new(prompt))
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            log::error!("API Error: {} - {}", status.as_u16(), body);
            return Err(GenerationError::Status { status, body });
        }

        Ok(response.bytes().await?)
    }
}
