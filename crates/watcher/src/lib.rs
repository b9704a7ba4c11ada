//! Watcher crate: verdict rendering and the poll/notify loop.
/// Loop-level error taxonomy
pub mod error;
/// Verdict table and notification rendering
pub mod verdict;
/// Poll, validate, notify, sleep
pub mod watcher;

pub use error::WatchError;
pub use verdict::parse_status;
pub use watcher::Watcher;
