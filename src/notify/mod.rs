//! Slack webhook notification sender.
//!
//! Builds a two-block Slack message (header + field section) and
//! delivers it with a single blocking POST. Configuration comes from
//! explicit arguments or the process environment; construction fails
//! with a typed error when either value is missing so hook callers can
//! decide to drop the notification instead of crashing.

mod hooks;

pub use hooks::{send_long_operation_hook, send_notification_hook, send_stop_hook};

use reqwest::blocking::Client;
use serde::Serialize;
use std::env;
use std::time::Duration;
use thiserror::Error;

/// Environment variable holding the Slack webhook endpoint.
pub const WEBHOOK_URL_VAR: &str = "SLACK_WEBHOOK_URL";

/// Environment variable holding the Slack member to mention.
pub const MEMBER_ID_VAR: &str = "SLACK_MEMBER_ID";

const HTTP_CONNECT_TIMEOUT_SECS: u64 = 5;
const HTTP_REQUEST_TIMEOUT_SECS: u64 = 15;

/// Why a notification could not be delivered.
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("{0} environment variable not set")]
    MissingConfig(&'static str),

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("webhook request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("webhook returned status {0}")]
    Status(reqwest::StatusCode),
}

/// Sends notifications to a Slack incoming webhook.
#[derive(Debug)]
pub struct SlackNotifier {
    webhook_url: String,
    member_id: String,
    client: Client,
}

impl SlackNotifier {
    /// Build a notifier from explicit values, falling back to the
    /// process environment for anything not supplied.
    pub fn new(
        webhook_url: Option<String>,
        member_id: Option<String>,
    ) -> Result<Self, NotifyError> {
        let webhook_url = webhook_url
            .or_else(|| env::var(WEBHOOK_URL_VAR).ok())
            .filter(|v| !v.is_empty())
            .ok_or(NotifyError::MissingConfig(WEBHOOK_URL_VAR))?;

        let member_id = member_id
            .or_else(|| env::var(MEMBER_ID_VAR).ok())
            .filter(|v| !v.is_empty())
            .ok_or(NotifyError::MissingConfig(MEMBER_ID_VAR))?;

        let client = Client::builder()
            .connect_timeout(Duration::from_secs(HTTP_CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(HTTP_REQUEST_TIMEOUT_SECS))
            .user_agent("herald-hooks")
            .build()
            .map_err(NotifyError::Client)?;

        Ok(Self {
            webhook_url,
            member_id,
            client,
        })
    }

    /// Notifier configured entirely from the environment.
    pub fn from_env() -> Result<Self, NotifyError> {
        Self::new(None, None)
    }

    /// Member ID used for `<@...>` mentions in canned hooks.
    pub fn member_id(&self) -> &str {
        &self.member_id
    }

    /// Send a titled notification with ordered name/value fields.
    pub fn send(&self, title: &str, fields: &[(&str, String)]) -> Result<(), NotifyError> {
        let message = build_message(title, fields);

        let response = self
            .client
            .post(&self.webhook_url)
            .json(&message)
            .send()
            .map_err(NotifyError::Transport)?;

        if !response.status().is_success() {
            return Err(NotifyError::Status(response.status()));
        }

        Ok(())
    }
}

/// Slack block-kit payload: one header block plus one field section.
#[derive(Debug, Serialize)]
struct Message {
    blocks: Vec<Block>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum Block {
    Header { text: TextObject },
    Section { fields: Vec<TextObject> },
}

#[derive(Debug, Serialize)]
struct TextObject {
    #[serde(rename = "type")]
    kind: &'static str,
    text: String,
}

fn build_message(title: &str, fields: &[(&str, String)]) -> Message {
    let field_blocks = fields
        .iter()
        .map(|(name, value)| TextObject {
            kind: "mrkdwn",
            text: format!("*{name}:*\n{value}"),
        })
        .collect();

    Message {
        blocks: vec![
            Block::Header {
                text: TextObject {
                    kind: "plain_text",
                    text: title.to_string(),
                },
            },
            Block::Section {
                fields: field_blocks,
            },
        ],
    }
}
