//! Routes inbound updates to command replies or image generation

use bytes::Bytes;
use futures_util::FutureExt;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use teloxide::types::{ChatId, MessageId, UserId};

use super::bot::{classify_text, Command, TextKind};
use super::chat::{ChatClient, TextFormat};
use super::messages;
use super::update::InboundUpdate;
use crate::core::error::BotResult;
use crate::generation::ImageGenerator;

/// The final reply produced for one update
#[derive(Debug, Clone, PartialEq)]
pub enum ReplyAction {
    /// Nothing was sent
    Ignored,
    /// Static command reply
    Text(&'static str),
    /// Generated image with its caption
    Photo { image: Bytes, caption: String },
    /// Fixed apology shown instead of an image
    Apology(&'static str),
}

/// Stateless update handler with injected clients
pub struct Dispatcher {
    chat: Arc<dyn ChatClient>,
    generator: Arc<dyn ImageGenerator>,
    bot_username: Option<String>,
}

impl Dispatcher {
    pub fn new(chat: Arc<dyn ChatClient>, generator: Arc<dyn ImageGenerator>, bot_username: Option<String>) -> Self {
        Self {
            chat,
            generator,
            bot_username,
        }
    }

    /// Handles one update to completion.
    ///
    /// Never fails: delivery problems are logged, and generation faults
    /// (panics included) are turned into an apology reply.
    pub async fn dispatch(&self, update: InboundUpdate) -> ReplyAction {
        let (Some(chat_id), Some(text)) = (update.chat_id, update.text.as_deref()) else {
            log::debug!("Update {} has no text, skipping", update.update_id);
            return ReplyAction::Ignored;
        };

        match classify_text(text, self.bot_username.as_deref()) {
            TextKind::Command(command) => self.reply_command(chat_id, command).await,
            TextKind::OtherCommand => {
                log::debug!("Ignoring unhandled command in update {}: {}", update.update_id, text);
                ReplyAction::Ignored
            }
            TextKind::Prompt(prompt) => self.generate_and_reply(chat_id, update.sender_id, prompt).await,
        }
    }

    async fn reply_command(&self, chat_id: ChatId, command: Command) -> ReplyAction {
        let template = match command {
            Command::Start => messages::WELCOME,
            Command::Help => messages::HELP,
        };

        if let Err(e) = self.chat.send_text(chat_id, template, TextFormat::MarkdownV2).await {
            log::error!("Failed to send {:?} reply to chat {}: {}", command, chat_id, e);
        }

        ReplyAction::Text(template)
    }

    async fn generate_and_reply(&self, chat_id: ChatId, sender_id: Option<UserId>, prompt: &str) -> ReplyAction {
        let interim = match self.chat.send_text(chat_id, messages::WORKING, TextFormat::Plain).await {
            Ok(message_id) => message_id,
            Err(e) => {
                log::error!("Failed to send progress message to chat {}: {}", chat_id, e);
                if let Err(e) = self
                    .chat
                    .send_text(chat_id, messages::UNEXPECTED_ERROR, TextFormat::Plain)
                    .await
                {
                    log::error!("Failed to send error message to chat {}: {}", chat_id, e);
                }
                return ReplyAction::Apology(messages::UNEXPECTED_ERROR);
            }
        };

        let outcome = AssertUnwindSafe(self.finish_generation(chat_id, interim, sender_id, prompt))
            .catch_unwind()
            .await;

        match outcome {
            Ok(Ok(action)) => return action,
            Ok(Err(e)) => log::error!("Failed to deliver generated image to chat {}: {}", chat_id, e),
            Err(_) => log::error!("Image generation panicked for chat {}", chat_id),
        }

        if let Err(e) = self.chat.edit_text(chat_id, interim, messages::UNEXPECTED_ERROR).await {
            log::error!("Failed to report error to chat {}: {}", chat_id, e);
        }
        ReplyAction::Apology(messages::UNEXPECTED_ERROR)
    }

    async fn finish_generation(
        &self,
        chat_id: ChatId,
        interim: MessageId,
        sender_id: Option<UserId>,
        prompt: &str,
    ) -> BotResult<ReplyAction> {
        match self.generator.generate(prompt).await {
            Ok(image) => {
                let caption = messages::image_caption(prompt);
                self.chat.send_photo(chat_id, image.clone(), &caption).await?;

                if let Err(e) = self.chat.delete_message(chat_id, interim).await {
                    log::warn!("Failed to delete progress message in chat {}: {}", chat_id, e);
                }

                match sender_id {
                    Some(user_id) => log::info!("Image generated for user {}: {}", user_id, prompt),
                    None => log::info!("Image generated for chat {}: {}", chat_id, prompt),
                }

                Ok(ReplyAction::Photo { image, caption })
            }
            Err(e) => {
                log::error!("Error generating image: {}", e);
                self.chat.edit_text(chat_id, interim, messages::GENERATION_FAILED).await?;
                Ok(ReplyAction::Apology(messages::GENERATION_FAILED))
            }
        }
    }
}
