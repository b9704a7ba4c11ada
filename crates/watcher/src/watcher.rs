use std::time::Duration;

use practicum::{StatusClient, check_response, server_timestamp};
use serde_json::Value;
use telegram::Notifier;
use tracing::{debug, error};

use crate::{error::WatchError, verdict::parse_status};

/// Polls the homework status API and forwards review-status changes to a
/// Telegram chat.
///
/// The watcher holds the entire loop state: the poll cursor, the last
/// homework record a notification was sent for, and the code of the last
/// failure reported to the chat. Everything lives in memory and dies with
/// the process.
#[derive(Debug)]
pub struct Watcher {
    practicum: StatusClient,
    telegram: Notifier,
    interval: Duration,
    cursor: u64,
    last_homework: Option<Value>,
    last_error: Option<&'static str>,
}

impl Watcher {
    /// Create a new watcher polling from `from_date` onward.
    pub const fn new(
        practicum: StatusClient,
        telegram: Notifier,
        interval: Duration,
        from_date: u64,
    ) -> Self {
        Self { practicum, telegram, interval, cursor: from_date, last_homework: None, last_error: None }
    }

    /// Current poll cursor (Unix seconds).
    pub const fn cursor(&self) -> u64 {
        self.cursor
    }

    /// Run the watcher until the process is terminated.
    ///
    /// Ticks on a fixed interval; every tick runs exactly one cycle no
    /// matter how the previous one ended.
    pub async fn run(mut self) -> eyre::Result<()> {
        let mut interval = tokio::time::interval(self.interval);
        loop {
            interval.tick().await;
            self.cycle().await;
        }
    }

    /// Run a single poll/validate/notify cycle.
    ///
    /// Failures never escape: a new failure kind is reported to the chat
    /// once, a repeated kind is only logged.
    pub async fn cycle(&mut self) {
        if let Err(err) = self.poll().await {
            let code = err.code();
            if self.last_error == Some(code) {
                debug!(code, "repeated failure suppressed");
                return;
            }
            error!(code, %err, "watch cycle failed");
            self.notify(&format!("Homework watcher failure: {err}")).await;
            self.last_error = Some(code);
        }
    }

    async fn poll(&mut self) -> Result<(), WatchError> {
        let response = self.practicum.homework_statuses(self.cursor).await?;
        let homeworks = check_response(&response)?;
        debug!(count = homeworks.len(), "homework list extracted from response");

        // Only the first record is ever inspected per tick; later entries
        // surface on subsequent polls.
        match homeworks.first() {
            Some(first) if self.last_homework.as_ref() != Some(first) => {
                let message = parse_status(first)?;
                self.notify(&message).await;
                self.last_homework = Some(first.clone());
            }
            _ => debug!("homework status unchanged"),
        }

        if let Some(timestamp) = server_timestamp(&response) {
            self.cursor = timestamp;
        }

        Ok(())
    }

    /// Deliver `text` to the chat. Delivery failures are logged and
    /// swallowed, a lost notification never stops the loop.
    async fn notify(&self, text: &str) {
        match self.telegram.send_message(text).await {
            Ok(()) => debug!(text, "notification delivered"),
            Err(err) => error!(%err, "failed to deliver notification"),
        }
    }
}
