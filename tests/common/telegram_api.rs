//! Wiremock stand-in for the Telegram Bot API

#![allow(dead_code)]

use serde_json::json;
use teloxide::Bot;
use wiremock::matchers::{method, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::fixtures::TEST_CHAT_ID;

/// Mock Bot API server plus a `Bot` pointed at it
pub struct TelegramApiMock {
    pub server: MockServer,
}

impl TelegramApiMock {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// teloxide Bot that talks to the mock server
    pub fn bot(&self) -> Bot {
        Bot::new("test_token_12345:ABCDEF").set_api_url(self.server.uri().parse().unwrap())
    }

    fn method_path(api_method: &str) -> String {
        format!("(?i)/bot[^/]+/{}$", api_method)
    }

    /// Answers `api_method` with a sent-message result
    pub async fn mock_message_result(&self, api_method: &str, message_id: i32) {
        let response = json!({
            "ok": true,
            "result": {
                "message_id": message_id,
                "from": {
                    "id": 987654321,
                    "is_bot": true,
                    "first_name": "TestBot",
                    "username": "test_bot"
                },
                "chat": {
                    "id": TEST_CHAT_ID,
                    "first_name": "Test",
                    "username": "testuser",
                    "type": "private"
                },
                "date": 1735992000,
                "text": "ok"
            }
        });

        Mock::given(method("POST"))
            .and(path_regex(Self::method_path(api_method)))
            .respond_with(ResponseTemplate::new(200).set_body_json(response))
            .mount(&self.server)
            .await;
    }

    /// Answers `api_method` with `true`
    pub async fn mock_true_result(&self, api_method: &str) {
        Mock::given(method("POST"))
            .and(path_regex(Self::method_path(api_method)))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true, "result": true })))
            .mount(&self.server)
            .await;
    }

    /// Answers `api_method` with a Bot API error
    pub async fn mock_error(&self, api_method: &str, description: &str) {
        Mock::given(method("POST"))
            .and(path_regex(Self::method_path(api_method)))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "ok": false,
                "error_code": 400,
                "description": description
            })))
            .mount(&self.server)
            .await;
    }

    /// Mocks everything the prompt flow touches
    pub async fn mock_prompt_flow(&self) {
        self.mock_message_result("sendMessage", 42).await;
        self.mock_message_result("sendPhoto", 43).await;
        self.mock_message_result("editMessageText", 42).await;
        self.mock_true_result("deleteMessage").await;
    }

    /// Bot API methods called so far, lowercased, in order
    pub async fn called_methods(&self) -> Vec<String> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter_map(|request| request.url.path().rsplit('/').next().map(str::to_lowercase))
            .collect()
    }

    /// Raw body of the first request to `api_method`
    pub async fn request_body(&self, api_method: &str) -> Option<Vec<u8>> {
        let wanted = api_method.to_lowercase();
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .into_iter()
            .find(|request| request.url.path().to_lowercase().ends_with(&wanted))
            .map(|request| request.body)
    }
}

/// True when `needle` occurs anywhere in `haystack`
pub fn contains_bytes(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|window| window == needle)
}
