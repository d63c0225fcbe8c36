//! Outbound chat operations
//!
//! `ChatClient` is the seam between the dispatcher and Telegram; the
//! production implementation wraps a teloxide `Bot`.

use async_trait::async_trait;
use bytes::Bytes;
use teloxide::payloads::{SendMessageSetters, SendPhotoSetters};
use teloxide::prelude::*;
use teloxide::types::{InputFile, MessageId, ParseMode};
use url::Url;

use crate::core::error::BotResult;

/// Formatting applied to outgoing text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextFormat {
    Plain,
    MarkdownV2,
}

/// Replies and webhook registration on the chat platform
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Sends a text message and returns its id
    async fn send_text(&self, chat_id: ChatId, text: &str, format: TextFormat) -> BotResult<MessageId>;

    /// Sends a photo with a MarkdownV2 caption
    async fn send_photo(&self, chat_id: ChatId, image: Bytes, caption: &str) -> BotResult<MessageId>;

    /// Replaces the text of a previously sent plain message
    async fn edit_text(&self, chat_id: ChatId, message_id: MessageId, text: &str) -> BotResult<()>;

    async fn delete_message(&self, chat_id: ChatId, message_id: MessageId) -> BotResult<()>;

    /// Points the platform's update delivery at `url`
    async fn set_webhook(&self, url: Url) -> BotResult<()>;
}

/// `ChatClient` backed by the Telegram Bot API
#[derive(Clone)]
pub struct TelegramChat {
    bot: Bot,
}

impl TelegramChat {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl ChatClient for TelegramChat {
    async fn send_text(&self, chat_id: ChatId, text: &str, format: TextFormat) -> BotResult<MessageId> {
        let request = self.bot.send_message(chat_id, text);
        let sent = match format {
            TextFormat::Plain => request.await?,
            TextFormat::MarkdownV2 => request.parse_mode(ParseMode::MarkdownV2).await?,
        };
        Ok(sent.id)
    }

    async fn send_photo(&self, chat_id: ChatId, image: Bytes, caption: &str) -> BotResult<MessageId> {
        let photo = InputFile::memory(image.to_vec()).file_name("generated.png");
        let sent = self
            .bot
            .send_photo(chat_id, photo)
            .caption(caption)
            .parse_mode(ParseMode::MarkdownV2)
            .await?;
        Ok(sent.id)
    }

    async fn edit_text(&self, chat_id: ChatId, message_id: MessageId, text: &str) -> BotResult<()> {
        self.bot.edit_message_text(chat_id, message_id, text).await?;
        Ok(())
    }

    async fn delete_message(&self, chat_id: ChatId, message_id: MessageId) -> BotResult<()> {
        self.bot.delete_message(chat_id, message_id).await?;
        Ok(())
    }

    async fn set_webhook(&self, url: Url) -> BotResult<()> {
        self.bot.set_webhook(url).await?;
        Ok(())
    }
}
