//! Common test utilities for integration tests.
//!
//! ```ignore
//! let fx = ChatFixture::new();
//! let feed = fx.live_stream();
//! fx.chat.submit("Hi");
//! ```

#![allow(dead_code)]

pub mod mocks;

#[allow(unused_imports)]
pub use mocks::*;

use std::sync::Arc;
use std::time::Duration;

use streamchat::app::ChatController;
use streamchat::config::Config;
use streamchat::conversation::SessionId;
use streamchat::stream::{StreamUpdate, UpdateOutcome};

pub const TEST_BASE_URL: &str = "http://mock.test";
pub const TEST_SESSION_ID: &str = "test-session-1";

/// Upper bound for any single wait on a stream update.
pub const UPDATE_TIMEOUT: Duration = Duration::from_secs(2);

pub fn test_config() -> Config {
    Config::new()
        .with_base_url(TEST_BASE_URL)
        .without_data_dir()
}

pub fn stream_url_prefix() -> String {
    format!("{}/stream", TEST_BASE_URL)
}

pub fn clear_url_prefix() -> String {
    format!("{}/clear", TEST_BASE_URL)
}

/// Poll `done` until it holds, failing the test after [`UPDATE_TIMEOUT`].
pub async fn wait_until(mut done: impl FnMut() -> bool) {
    tokio::time::timeout(UPDATE_TIMEOUT, async {
        while !done() {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    })
    .await
    .expect("condition not reached in time");
}

/// A controller wired to a [`MockHttpClient`] the test can configure.
pub struct ChatFixture {
    pub client: MockHttpClient,
    pub chat: ChatController,
}

impl ChatFixture {
    pub fn new() -> Self {
        let client = MockHttpClient::new();
        let chat = ChatController::new(
            Arc::new(client.clone()),
            Arc::new(test_config()),
            SessionId::new(TEST_SESSION_ID),
        );
        Self { client, chat }
    }

    /// Queue a live stream for the next stream request and return its feed.
    pub fn live_stream(&self) -> LiveFeed {
        let (feed, live) = live_stream();
        self.client
            .push_response(&stream_url_prefix(), MockResponse::Live(live));
        feed
    }

    /// Pull and apply one update, failing the test if none arrives in time.
    pub async fn step(&mut self) -> (StreamUpdate, UpdateOutcome) {
        let update = tokio::time::timeout(UPDATE_TIMEOUT, self.chat.next_update())
            .await
            .expect("timed out waiting for a stream update")
            .expect("update channel closed");
        let outcome = self.chat.handle_update(update.clone());
        (update, outcome)
    }

    /// Apply updates until the stream ends and return every outcome seen.
    pub async fn drain(&mut self) -> Vec<UpdateOutcome> {
        let mut outcomes = Vec::new();
        while self.chat.is_streaming() {
            let (_, outcome) = self.step().await;
            outcomes.push(outcome);
        }
        outcomes
    }
}

impl Default for ChatFixture {
    fn default() -> Self {
        Self::new()
    }
}
