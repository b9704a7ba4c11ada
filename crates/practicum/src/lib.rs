//! Practicum crate: homework status API client and response validation.
/// Status API client
pub mod client;
/// Error taxonomy for the poll cycle
pub mod error;
/// Response shape validation
pub mod response;

pub use client::StatusClient;
pub use error::Error;
pub use response::{check_response, server_timestamp};
