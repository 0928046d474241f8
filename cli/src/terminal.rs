//! Terminal surface: records what the controller shows so the command can
//! print it once the flow finishes.

#[cfg(test)]
#[path = "terminal_test.rs"]
mod terminal_test;

use std::cell::RefCell;

use regret_client::controller::Surface;
use regret_client::state::tones::ToneOption;
use regret_client::state::view::ViewState;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Screen {
    pub tone_options: Vec<ToneOption>,
    pub messages: Vec<String>,
    /// Alerts, in the order they were raised.
    pub notices: Vec<String>,
}

#[derive(Debug, Default)]
pub struct TerminalSurface {
    screen: RefCell<Screen>,
}

impl TerminalSurface {
    pub fn screen(&self) -> Screen {
        self.screen.borrow().clone()
    }
}

impl Surface for TerminalSurface {
    fn show(&self, view: ViewState) {
        log::debug!("view -> {}", view.label());
    }

    fn set_tone_options(&self, options: Vec<ToneOption>) {
        self.screen.borrow_mut().tone_options = options;
    }

    fn set_messages(&self, lines: Vec<String>) {
        self.screen.borrow_mut().messages = lines;
    }

    fn alert(&self, message: &str) {
        self.screen.borrow_mut().notices.push(message.to_owned());
    }

    /// Inline errors come back as the command's error; nothing to keep.
    fn set_form_error(&self, message: &str) {
        if !message.is_empty() {
            log::debug!("form error: {message}");
        }
    }

    fn focus_tone(&self) {
        log::debug!("tone required; pass --tone <name>");
    }

    fn reset_message_form(&self) {}
}

/// Real tones by label, or the lone placeholder when there are none.
pub fn tone_lines(options: &[ToneOption]) -> Vec<String> {
    let tones: Vec<String> = options
        .iter()
        .filter(|option| !option.is_placeholder())
        .map(|option| option.label.clone())
        .collect();
    if tones.is_empty() {
        return options.iter().map(|option| option.label.clone()).collect();
    }
    tones
}
