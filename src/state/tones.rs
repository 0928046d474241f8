//! Options for the tone `<select>`.
//!
//! Every placeholder carries an empty value so submitting one reads as
//! "no tone selected".

#[cfg(test)]
#[path = "tones_test.rs"]
mod tones_test;

use crate::net::types::Tone;

pub const LOADING_LABEL: &str = "Loading tones…";
pub const EMPTY_LABEL: &str = "No tones available";
pub const PROMPT_LABEL: &str = "Select a tone";
pub const FAILED_LABEL: &str = "Failed to load tones";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToneOption {
    pub value: String,
    pub label: String,
}

impl ToneOption {
    pub fn placeholder(label: &str) -> Self {
        Self {
            value: String::new(),
            label: label.to_owned(),
        }
    }

    pub fn from_tone(tone: &Tone) -> Self {
        Self {
            value: tone.name.clone(),
            label: format!("{} ({})", tone.name, tone.category),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.value.is_empty()
    }
}

pub fn loading_options() -> Vec<ToneOption> {
    vec![ToneOption::placeholder(LOADING_LABEL)]
}

pub fn failed_options() -> Vec<ToneOption> {
    vec![ToneOption::placeholder(FAILED_LABEL)]
}

/// Prompt placeholder followed by one option per tone, in server order.
/// No tones collapses to the single "none available" placeholder.
pub fn tone_options(tones: &[Tone]) -> Vec<ToneOption> {
    if tones.is_empty() {
        return vec![ToneOption::placeholder(EMPTY_LABEL)];
    }
    std::iter::once(ToneOption::placeholder(PROMPT_LABEL))
        .chain(tones.iter().map(ToneOption::from_tone))
        .collect()
}

/// Result of a tone load. Failures end here: they are logged and shown as
/// a placeholder, never raised to the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ToneLoad {
    Loaded(usize),
    Empty,
    Failed(String),
}
