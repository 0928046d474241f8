//! Feed line rendering.

#[cfg(test)]
#[path = "feed_test.rs"]
mod feed_test;

use crate::net::types::Message;

/// `"<username>: <text> — <tone>"`, without the tone segment when the
/// message has no (or an empty) tone.
pub fn render_message(message: &Message) -> String {
    match message.tone.as_deref().filter(|tone| !tone.is_empty()) {
        Some(tone) => format!("{}: {} — {tone}", message.username, message.text),
        None => format!("{}: {}", message.username, message.text),
    }
}

pub fn render_feed(messages: &[Message]) -> Vec<String> {
    messages.iter().map(render_message).collect()
}
