//! Failure type for every REST call and form submission.
//!
//! ERROR HANDLING
//! ==============
//! Users only ever see the `Display` text. Variants exist so logs can tell a
//! dead network apart from a server rejection.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde_json::Value;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    /// The request never produced an HTTP response.
    #[error("{0}")]
    Transport(String),
    /// The server answered with a non-success status.
    #[error("{message}")]
    Status { status: u16, message: String },
    /// A success body did not have the expected shape.
    #[error("{0}")]
    Decode(String),
    /// Client-side form validation stopped the submission.
    #[error("{0}")]
    Validation(String),
}

impl RequestError {
    /// Build a status error, preferring the server's `error` field.
    pub fn from_status(status: u16, body: &Value) -> Self {
        let message = body
            .get("error")
            .and_then(Value::as_str)
            .filter(|msg| !msg.is_empty())
            .map_or_else(|| request_failed_message(status), str::to_owned);
        Self::Status { status, message }
    }

    /// HTTP status for server rejections.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub(crate) fn request_failed_message(status: u16) -> String {
    format!("Request failed: {status}")
}
