use reqwest::StatusCode;
use url::Url;

/// Errors raised by the status query and response validation.
///
/// Every variant carries enough context for an actionable log line. The
/// watcher loop de-duplicates failure alerts by [`Error::code`], so two
/// errors of the same kind with different details count as the same failure.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The endpoint could not be reached at the transport level.
    #[error("endpoint {endpoint} unreachable (from_date={from_date}): {source}")]
    Unreachable {
        /// Queried endpoint.
        endpoint: Url,
        /// Poll cursor sent with the request.
        from_date: u64,
        /// Underlying transport error.
        #[source]
        source: reqwest::Error,
    },
    /// The endpoint answered with a status other than 200.
    #[error("endpoint {endpoint} returned {status} (from_date={from_date})")]
    BadStatus {
        /// Queried endpoint.
        endpoint: Url,
        /// Poll cursor sent with the request.
        from_date: u64,
        /// HTTP status the endpoint answered with.
        status: StatusCode,
    },
    /// The response body could not be parsed as JSON.
    #[error("response body is not valid JSON: {source}")]
    NotJson {
        /// Underlying decode error.
        #[source]
        source: reqwest::Error,
    },
    /// The response is not a JSON object.
    #[error("response is not a JSON object")]
    NotAnObject,
    /// The response object has no `homeworks` key.
    #[error("response has no `homeworks` key")]
    HomeworksMissing,
    /// The `homeworks` value is not a list.
    #[error("`homeworks` is not a list")]
    HomeworksNotAList,
}

impl Error {
    /// Stable code identifying the failure kind.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Unreachable { .. } => "endpoint-unreachable",
            Self::BadStatus { .. } => "bad-status",
            Self::NotJson { .. } => "not-json",
            Self::NotAnObject => "not-an-object",
            Self::HomeworksMissing => "homeworks-missing",
            Self::HomeworksNotAList => "homeworks-not-a-list",
        }
    }
}
