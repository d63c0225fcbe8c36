//! Pictora - Telegram bot that turns text prompts into images
//!
//! Telegram delivers updates to a webhook; plain text is sent as a prompt to
//! a Stable Diffusion endpoint on the Hugging Face Inference API and the
//! resulting image is posted back to the chat.
//!
//! # Module Structure
//!
//! - `core`: configuration, errors, logging, and the webhook HTTP server
//! - `generation`: inference request shape and client
//! - `telegram`: update decoding, command routing, and chat replies

pub mod core;
pub mod generation;
pub mod telegram;

// Re-export commonly used types for convenience
pub use core::{BotError, BotResult, Config};
pub use generation::{GenerationError, ImageGenerator, ImageResult, InferenceClient};
pub use telegram::{ChatClient, Dispatcher, InboundUpdate, ReplyAction, TelegramChat};
