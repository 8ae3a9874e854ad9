use std::path::PathBuf;
use std::process::Stdio;

use tokio::process::Command;

use crate::command::CommandSpec;
use crate::config::{NotifyConfig, Urgency};

pub const SUCCESS_SUMMARY: &str = "Success";
pub const FAILURE_SUMMARY: &str = "Error";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure(i32),
}

impl Outcome {
    pub fn from_status(status: i32) -> Self {
        if status == 0 {
            Outcome::Success
        } else {
            Outcome::Failure(status)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub summary: &'static str,
    pub body: String,
    pub urgency: Urgency,
}

impl Notification {
    pub fn for_outcome(spec: &CommandSpec, outcome: Outcome, cfg: &NotifyConfig) -> Self {
        let cmd = truncate(&spec.display(), cfg.max_command_len);
        match outcome {
            Outcome::Success => Self {
                summary: SUCCESS_SUMMARY,
                body: format!("'{cmd}' has finished and returned 0"),
                urgency: cfg.success_urgency,
            },
            Outcome::Failure(code) => Self {
                summary: FAILURE_SUMMARY,
                body: format!("'{cmd}' has returned non-zero value {code}"),
                urgency: cfg.failure_urgency,
            },
        }
    }
}

/// Cut `text` to at most `max` characters, marking the cut with an ellipsis.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{kept}…")
}

/// Client of the external `notify-send` style program.
#[derive(Debug, Clone)]
pub struct Notifier {
    path: PathBuf,
    timeout: u32,
    app_name: Option<String>,
    icon: Option<String>,
}

impl Notifier {
    pub fn new(path: PathBuf, cfg: &NotifyConfig) -> Self {
        Self {
            path,
            timeout: cfg.timeout,
            app_name: cfg.app_name.clone(),
            icon: cfg.icon.clone(),
        }
    }

    /// Build the full notifier argument list.
    pub fn args(&self, notification: &Notification) -> Vec<String> {
        let mut args = vec![
            "-t".to_string(),
            self.timeout.to_string(),
            "-u".to_string(),
            notification.urgency.as_str().to_string(),
        ];
        if let Some(ref app_name) = self.app_name {
            args.push("--app-name".to_string());
            args.push(app_name.clone());
        }
        if let Some(ref icon) = self.icon {
            args.push("--icon".to_string());
            args.push(icon.clone());
        }
        args.push(notification.summary.to_string());
        args.push(notification.body.clone());
        args
    }

    /// Deliver `notification` and wait for the notifier to exit.
    ///
    /// Best-effort: the notifier's own status and any spawn error are
    /// logged and otherwise dropped.
    pub async fn send(&self, notification: &Notification) {
        let status = Command::new(&self.path)
            .args(self.args(notification))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await;

        match status {
            Ok(status) => tracing::debug!(%status, summary = notification.summary, "notifier exited"),
            Err(e) => tracing::debug!(path = %self.path.display(), error = %e, "notifier failed"),
        }
    }
}
