use super::*;

fn message(username: &str, text: &str, tone: Option<&str>) -> Message {
    Message {
        username: username.to_owned(),
        text: text.to_owned(),
        tone: tone.map(str::to_owned),
    }
}

#[test]
fn render_message_includes_tone_segment() {
    let line = render_message(&message("ana", "replied all", Some("mortified")));
    assert_eq!(line, "ana: replied all — mortified");
}

#[test]
fn render_message_omits_missing_tone() {
    assert_eq!(render_message(&message("ana", "replied all", None)), "ana: replied all");
}

#[test]
fn render_message_omits_empty_tone() {
    assert_eq!(render_message(&message("ana", "replied all", Some(""))), "ana: replied all");
}

#[test]
fn render_feed_keeps_order() {
    let lines = render_feed(&[message("b", "2", None), message("a", "1", Some("x"))]);
    assert_eq!(lines, vec!["b: 2".to_owned(), "a: 1 — x".to_owned()]);
}

#[test]
fn render_feed_of_nothing_is_empty() {
    assert!(render_feed(&[]).is_empty());
}
