//! Common test utilities
//!
//! This module is shared across all integration tests

pub mod telegram_api;

#[allow(unused_imports)]
pub use fixtures::{message_update, text_update_json, TEST_CHAT_ID, TEST_USER_ID};
#[allow(unused_imports)]
pub use telegram_api::TelegramApiMock;
