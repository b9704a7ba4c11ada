use serde_json::Value;

use crate::error::WatchError;

/// Human-readable verdict for every status the review pipeline can report.
/// The set of valid statuses is exactly the key set of this table.
const HOMEWORK_VERDICTS: [(&str, &str); 3] = [
    ("approved", "Work checked: the reviewer liked everything. Hooray!"),
    ("reviewing", "Work taken for review by the reviewer."),
    ("rejected", "Work checked: the reviewer has remarks."),
];

fn verdict_for(status: &str) -> Option<&'static str> {
    HOMEWORK_VERDICTS.iter().find(|(key, _)| *key == status).map(|(_, verdict)| *verdict)
}

/// Render the notification text for a single homework record.
///
/// Extracts `homework_name` and `status` from the record and looks the
/// status up in the verdict table. The output is a fixed template, so the
/// same record always renders to the same bytes.
pub fn parse_status(homework: &Value) -> Result<String, WatchError> {
    let name = homework
        .get("homework_name")
        .and_then(Value::as_str)
        .ok_or(WatchError::MissingField("homework_name"))?;
    let status = homework
        .get("status")
        .and_then(Value::as_str)
        .ok_or(WatchError::MissingField("status"))?;
    let verdict =
        verdict_for(status).ok_or_else(|| WatchError::UnknownStatus(status.to_owned()))?;

    Ok(format!("Review status changed for \"{name}\". {verdict}"))
}
