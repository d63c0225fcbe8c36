//! In-process fakes for the chat and image generation seams
//!
//! Record every call so tests can assert on what the bot would have sent
//! without any network.

#![allow(dead_code)]

use async_trait::async_trait;
use bytes::Bytes;
use std::sync::Mutex;
use teloxide::types::{ChatId, MessageId};
use url::Url;

use pictora::core::BotError;
use pictora::generation::{GenerationError, ImageGenerator, ImageResult};
use pictora::telegram::{ChatClient, TextFormat};
use pictora::BotResult;

/// One outbound chat operation
#[derive(Debug, Clone, PartialEq)]
pub enum ChatCall {
    Text { chat_id: ChatId, text: String, format: TextFormat },
    Photo { chat_id: ChatId, image: Bytes, caption: String },
    Edit { chat_id: ChatId, message_id: MessageId, text: String },
    Delete { chat_id: ChatId, message_id: MessageId },
    SetWebhook(Url),
}

/// Chat client that records calls and hands out sequential message ids
#[derive(Default)]
pub struct RecordingChat {
    calls: Mutex<Vec<ChatCall>>,
    fail_webhook: bool,
}

impl RecordingChat {
    pub fn new() -> Self {
        Self::default()
    }

    /// Chat client whose webhook registration is rejected
    pub fn rejecting_webhook() -> Self {
        Self {
            fail_webhook: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<ChatCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: ChatCall) -> MessageId {
        let mut calls = self.calls.lock().unwrap();
        calls.push(call);
        MessageId(calls.len() as i32)
    }
}

#[async_trait]
impl ChatClient for RecordingChat {
    async fn send_text(&self, chat_id: ChatId, text: &str, format: TextFormat) -> BotResult<MessageId> {
        Ok(self.record(ChatCall::Text {
            chat_id,
            text: text.to_string(),
            format,
        }))
    }

    async fn send_photo(&self, chat_id: ChatId, image: Bytes, caption: &str) -> BotResult<MessageId> {
        Ok(self.record(ChatCall::Photo {
            chat_id,
            image,
            caption: caption.to_string(),
        }))
    }

    async fn edit_text(&self, chat_id: ChatId, message_id: MessageId, text: &str) -> BotResult<()> {
        self.record(ChatCall::Edit {
            chat_id,
            message_id,
            text: text.to_string(),
        });
        Ok(())
    }

    async fn delete_message(&self, chat_id: ChatId, message_id: MessageId) -> BotResult<()> {
        self.record(ChatCall::Delete { chat_id, message_id });
        Ok(())
    }

    async fn set_webhook(&self, url: Url) -> BotResult<()> {
        if self.fail_webhook {
            return Err(BotError::Config("Bad Request: bad webhook: HTTPS url must be provided".to_string()));
        }
        self.record(ChatCall::SetWebhook(url));
        Ok(())
    }
}

/// What a `StubGenerator` does when asked for an image
pub enum StubOutcome {
    Image(Bytes),
    Status(u16, &'static str),
    Panic,
}

/// Image generator with a canned outcome
pub struct StubGenerator {
    outcome: StubOutcome,
    prompts: Mutex<Vec<String>>,
}

impl StubGenerator {
    pub fn new(outcome: StubOutcome) -> Self {
        Self {
            outcome,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn image(bytes: &'static [u8]) -> Self {
        Self::new(StubOutcome::Image(Bytes::from_static(bytes)))
    }

    /// Prompts received, in order
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageGenerator for StubGenerator {
    async fn generate(&self, prompt: &str) -> ImageResult {
        self.prompts.lock().unwrap().push(prompt.to_string());
        match &self.outcome {
            StubOutcome::Image(bytes) => Ok(bytes.clone()),
            StubOutcome::Status(code, body) => Err(GenerationError::Status {
                status: reqwest::StatusCode::from_u16(*code).unwrap(),
                body: body.to_string(),
            }),
            StubOutcome::Panic => panic!("generator blew up"),
        }
    }
}
