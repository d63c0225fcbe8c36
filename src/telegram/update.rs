//! Webhook payload decoding

use teloxide::types::{ChatId, Update, UpdateKind, UserId};

/// One inbound chat event, reduced to what the dispatcher needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundUpdate {
    pub update_id: u32,
    pub chat_id: Option<ChatId>,
    /// Only used for logging
    pub sender_id: Option<UserId>,
    /// `None` for non-text messages and non-message updates
    pub text: Option<String>,
}

impl InboundUpdate {
    /// Decodes a Telegram `Update` JSON body.
    pub fn from_json(body: &[u8]) -> Result<Self, serde_json::Error> {
        let update: Update = serde_json::from_slice(body)?;
        Ok(update.into())
    }
}

impl From<Update> for InboundUpdate {
    fn from(update: Update) -> Self {
        let update_id = update.id.0;

        match update.kind {
            UpdateKind::Message(msg) => Self {
                update_id,
                chat_id: Some(msg.chat.id),
                sender_id: msg.from.as_ref().map(|user| user.id),
                text: msg.text().map(str::to_owned),
            },
            _ => Self {
                update_id,
                chat_id: None,
                sender_id: None,
                text: None,
            },
        }
    }
}
