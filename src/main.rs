use anyhow::Result;
use dotenvy::dotenv;
use std::sync::Arc;

use pictora::core::{config, init_logger, install_panic_logger, start_web_server, AppState, Config};
use pictora::generation::InferenceClient;
use pictora::telegram::{create_bot, fetch_bot_username, setup_bot_commands, ChatClient, Dispatcher, TelegramChat};

/// Main entry point for the image bot
///
/// Reads configuration, wires the Telegram and inference clients into the
/// dispatcher, and serves the webhook on port 5000.
///
/// # Errors
/// Returns an error if initialization fails (logging, configuration, bot creation)
/// or the listener cannot be bound.
#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env if present
    let _ = dotenv();

    let config = Config::from_env()?;

    init_logger(config.log_file_path.as_deref())?;
    install_panic_logger();

    let bot = create_bot(&config)?;

    let bot_username = fetch_bot_username(&bot).await;
    match &bot_username {
        Some(username) => log::info!("Bot username: @{}", username),
        None => log::warn!("Bot username unknown, accepting commands addressed to any bot"),
    }

    if let Err(e) = setup_bot_commands(&bot).await {
        log::warn!("Failed to set bot commands: {}", e);
    }

    let Config {
        webhook_url,
        inference_api_key,
        ..
    } = config;

    let chat: Arc<dyn ChatClient> = Arc::new(TelegramChat::new(bot));
    let generator = Arc::new(InferenceClient::stable_diffusion(inference_api_key)?);
    log::info!("Image generation endpoint: {}", generator.endpoint());

    let dispatcher = Arc::new(Dispatcher::new(Arc::clone(&chat), generator, bot_username));

    if webhook_url.is_none() {
        log::warn!("WEBHOOK_URL not set, /set_webhook will fail until it is configured");
    }

    let state = AppState::new(dispatcher, chat, webhook_url);
    start_web_server(config::server::bind_addr(), state).await?;

    Ok(())
}
