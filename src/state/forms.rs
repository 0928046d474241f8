//! Form input normalization and validation.
//!
//! Inputs only live for one submit: read, trimmed, validated, turned into a
//! wire body. Passwords are never trimmed.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use crate::net::types::{Credentials, NewMessage};

pub const MISSING_TONE_MESSAGE: &str = "Please select a tone.";

impl Credentials {
    pub fn from_form(username: &str, password: &str) -> Self {
        Self {
            username: username.trim().to_owned(),
            password: password.to_owned(),
        }
    }
}

/// Current contents of the regret composer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MessageDraft {
    pub text: String,
    pub tone: String,
    pub is_anonymous: bool,
}

impl MessageDraft {
    /// Trim the text and require a tone. Empty text is left for the server
    /// to judge.
    ///
    /// # Errors
    ///
    /// Returns the inline message to show when no tone is selected.
    pub fn validate(&self) -> Result<NewMessage, &'static str> {
        if self.tone.is_empty() {
            return Err(MISSING_TONE_MESSAGE);
        }
        Ok(NewMessage {
            text: self.text.trim().to_owned(),
            tone: self.tone.clone(),
            is_anonymous: self.is_anonymous,
        })
    }
}
