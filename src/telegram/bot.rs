//! Bot initialization and command recognition
//!
//! This module contains:
//! - Command enum definition
//! - Bot instance creation
//! - Classification of incoming text (command vs. prompt)

use reqwest::ClientBuilder;
use secrecy::ExposeSecret;
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;

use crate::core::config::{self, Config};
use crate::core::error::BotResult;

/// Bot commands enum with descriptions
#[derive(BotCommands, Clone, Copy, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "Commands:")]
pub enum Command {
    #[command(description = "welcome message")]
    Start,
    #[command(description = "help and prompt examples")]
    Help,
}

impl Command {
    /// Looks a command up by name, ignoring case
    fn from_name(name: &str) -> Option<Self> {
        Self::bot_commands()
            .into_iter()
            .map(|command| command.command.trim_start_matches('/').to_string())
            .find(|command| command.eq_ignore_ascii_case(name))
            .and_then(|command| Self::parse(&format!("/{}", command), "").ok())
    }
}

/// How a text message should be handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextKind<'a> {
    /// A recognized command addressed to this bot
    Command(Command),
    /// Any other `/command`, or one addressed to another bot
    OtherCommand,
    /// Free text, used verbatim as a prompt
    Prompt(&'a str),
}

/// Classifies message text.
///
/// Only the first token decides: `/start`, `/start@this_bot` and
/// `/start anything` are all the start command. When `bot_username` is unknown
/// any `@mention` suffix is accepted. A leading `/` not followed by a command
/// name (`/ a cat`, `/`) is an ordinary prompt.
pub fn classify_text<'a>(text: &'a str, bot_username: Option<&str>) -> TextKind<'a> {
    let Some(rest) = text.strip_prefix('/') else {
        return TextKind::Prompt(text);
    };

    let token = rest.split_whitespace().next().unwrap_or_default();
    let (name, mention) = match token.split_once('@') {
        Some((name, mention)) => (name, Some(mention)),
        None => (token, None),
    };

    if !is_command_name(name) {
        return TextKind::Prompt(text);
    }

    if let (Some(mention), Some(username)) = (mention, bot_username) {
        if !mention.eq_ignore_ascii_case(username) {
            return TextKind::OtherCommand;
        }
    }

    match Command::from_name(name) {
        Some(command) => TextKind::Command(command),
        None => TextKind::OtherCommand,
    }
}

fn is_command_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Creates a Bot instance from the configured token
///
/// # Returns
/// * `Ok(Bot)` - Successfully created bot instance
/// * `Err(BotError)` - HTTP client could not be built
pub fn create_bot(config: &Config) -> BotResult<Bot> {
    let client = ClientBuilder::new().timeout(config::network::timeout()).build()?;
    Ok(Bot::with_client(config.bot_token.expose_secret(), client))
}

/// Sets up bot commands in Telegram UI
pub async fn setup_bot_commands(bot: &Bot) -> Result<(), teloxide::RequestError> {
    bot.set_my_commands(Command::bot_commands()).await?;
    Ok(())
}

/// Looks up the bot's own username, used to match `/command@username`
pub async fn fetch_bot_username(bot: &Bot) -> Option<String> {
    match bot.get_me().await {
        Ok(me) => me.user.username.clone(),
        Err(e) => {
            log::warn!("Failed to fetch bot info: {}", e);
            None
        }
    }
}
