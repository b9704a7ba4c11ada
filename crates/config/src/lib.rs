//! Reviewscope configuration
use clap::Parser;
use url::Url;

/// Default homework statuses endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// Practicum status API configuration options
#[derive(Debug, Clone, Parser)]
pub struct PracticumOpts {
    /// Practicum API OAuth token
    #[clap(long, env = "PRACTICUM_TOKEN")]
    pub practicum_token: String,
    /// Homework statuses endpoint URL
    #[clap(long, env = "PRACTICUM_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: Url,
}

/// Telegram delivery configuration options
#[derive(Debug, Clone, Parser)]
pub struct TelegramOpts {
    /// Telegram bot token
    #[clap(long, env = "TELEGRAM_TOKEN")]
    pub telegram_token: String,
    /// Telegram chat ID the notifications are addressed to
    #[clap(long, env = "TELEGRAM_CHAT_ID")]
    pub chat_id: String,
}

/// CLI options for reviewscope
#[derive(Debug, Clone, Parser)]
pub struct Opts {
    /// Practicum status API configuration
    #[clap(flatten)]
    pub practicum: PracticumOpts,

    /// Telegram delivery configuration
    #[clap(flatten)]
    pub telegram: TelegramOpts,

    /// Poll interval in seconds
    #[clap(long, env = "POLL_INTERVAL_SECS", default_value = "600")]
    pub poll_interval_secs: u64,
}

impl Opts {
    /// Verify that every required credential is non-empty.
    ///
    /// Clap already rejects unset environment variables; this catches the
    /// variables that are set but empty, which must also abort startup.
    pub fn check_tokens(&self) -> Result<(), MissingConfig> {
        let mut missing = Vec::new();
        if self.practicum.practicum_token.trim().is_empty() {
            missing.push("PRACTICUM_TOKEN");
        }
        if self.telegram.telegram_token.trim().is_empty() {
            missing.push("TELEGRAM_TOKEN");
        }
        if self.telegram.chat_id.trim().is_empty() {
            missing.push("TELEGRAM_CHAT_ID");
        }

        if missing.is_empty() { Ok(()) } else { Err(MissingConfig(missing.join(", "))) }
    }
}

/// Fatal startup error: one or more required configuration values are empty.
#[derive(Debug, thiserror::Error)]
#[error("missing required configuration: {0}")]
pub struct MissingConfig(pub String);

#[cfg(test)]
mod tests {
    use super::{DEFAULT_ENDPOINT, Opts, PracticumOpts, TelegramOpts};
    use url::Url;

    fn opts(practicum_token: &str, telegram_token: &str, chat_id: &str) -> Opts {
        Opts {
            practicum: PracticumOpts {
                practicum_token: practicum_token.to_owned(),
                endpoint: Url::parse(DEFAULT_ENDPOINT).unwrap(),
            },
            telegram: TelegramOpts {
                telegram_token: telegram_token.to_owned(),
                chat_id: chat_id.to_owned(),
            },
            poll_interval_secs: 600,
        }
    }

    #[test]
    fn test_verify_cli() {
        use clap::CommandFactory;
        Opts::command().debug_assert()
    }

    #[test]
    fn accepts_complete_configuration() {
        assert!(opts("practicum", "telegram", "42").check_tokens().is_ok());
    }

    #[test]
    fn rejects_empty_practicum_token() {
        let err = opts("", "telegram", "42").check_tokens().unwrap_err();
        assert_eq!(err.0, "PRACTICUM_TOKEN");
    }

    #[test]
    fn rejects_whitespace_only_chat_id() {
        let err = opts("practicum", "telegram", "  ").check_tokens().unwrap_err();
        assert_eq!(err.0, "TELEGRAM_CHAT_ID");
    }

    #[test]
    fn lists_every_empty_variable() {
        let err = opts("", "", "").check_tokens().unwrap_err();
        assert_eq!(err.0, "PRACTICUM_TOKEN, TELEGRAM_TOKEN, TELEGRAM_CHAT_ID");
    }
}
