/// Errors a single watch cycle can surface.
///
/// The loop reports a failure to the chat once per [`WatchError::code`];
/// repeating the same code on later ticks is suppressed, so a persistently
/// broken collaborator produces one alert instead of one per tick.
#[derive(Debug, thiserror::Error)]
pub enum WatchError {
    /// Status query or response validation failed.
    #[error(transparent)]
    Api(#[from] practicum::Error),
    /// A homework record is missing a required field.
    #[error("homework record has no `{0}` field")]
    MissingField(&'static str),
    /// A homework record carries a status outside the verdict table.
    #[error("unknown homework status `{0}`")]
    UnknownStatus(String),
}

impl WatchError {
    /// Stable code identifying the failure kind.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Api(err) => err.code(),
            Self::MissingField(_) => "missing-field",
            Self::UnknownStatus(_) => "unknown-status",
        }
    }
}
