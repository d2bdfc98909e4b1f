//! Canned hook notifications.
//!
//! Each hook builds its own sender and swallows every failure: these
//! run from developer-tooling hooks where a notification problem must
//! never block the host operation. Dropped notifications surface only
//! at debug level.

use std::env;
use tracing::debug;

use super::{NotifyError, SlackNotifier};

/// Notify that the session is waiting for user input or permission.
pub fn send_notification_hook() {
    if let Err(e) = try_send_notification() {
        debug!("notification hook dropped: {e}");
    }
}

/// Notify that the session or a subagent stopped.
pub fn send_stop_hook() {
    if let Err(e) = try_send_stop() {
        debug!("stop hook dropped: {e}");
    }
}

/// Notify that an operation ran long. `elapsed` is whole seconds.
pub fn send_long_operation_hook(elapsed: i64, operation_type: &str) {
    if let Err(e) = try_send_long_operation(elapsed, operation_type) {
        debug!("long-operation hook dropped: {e}");
    }
}

fn try_send_notification() -> Result<(), NotifyError> {
    let notifier = SlackNotifier::from_env()?;
    let mention = format!("<@{}>", notifier.member_id());

    notifier.send(
        "🔔 Claude Code Notification",
        &[
            ("📁 Project", project_name()),
            ("💬 Status", "Waiting for user input or permission".to_string()),
            ("👤 Dev", mention),
        ],
    )
}

fn try_send_stop() -> Result<(), NotifyError> {
    let notifier = SlackNotifier::from_env()?;
    let mention = format!("<@{}>", notifier.member_id());

    notifier.send(
        "⏹️ Claude Code Stopped",
        &[
            ("📁 Project", project_name()),
            ("🛑 Status", "Operation stopped or subagent stopped".to_string()),
            ("👤 Dev", mention),
        ],
    )
}

fn try_send_long_operation(elapsed: i64, operation_type: &str) -> Result<(), NotifyError> {
    let notifier = SlackNotifier::from_env()?;
    let mention = format!("<@{}>", notifier.member_id());

    let minutes = elapsed / 60;
    let seconds = elapsed % 60;

    notifier.send(
        &format!("⚠️ Long {operation_type} Operation"),
        &[
            ("⏱️ Duration", format!("{minutes}m {seconds}s")),
            ("📁 Project", project_name()),
            ("👤 Dev", mention),
        ],
    )
}

/// Basename of the current working directory, used as the project
/// label in every canned hook.
fn project_name() -> String {
    env::current_dir()
        .ok()
        .and_then(|dir| {
            dir.file_name()
                .map(|name| name.to_string_lossy().into_owned())
        })
        .unwrap_or_else(|| ".".to_string())
}
