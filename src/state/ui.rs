//! Signal-backed UI state and the [`Surface`] that writes into it.
//!
//! DESIGN
//! ======
//! The controller pushes view changes through `SignalSurface`; components
//! only read `RwSignal<UiState>` from context. Focus requests travel as a
//! sequence counter so the owning component can react in an effect.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use leptos::prelude::*;

use crate::controller::Surface;
use crate::state::forms::MessageDraft;
use crate::state::tones::ToneOption;
use crate::state::view::ViewState;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub view: ViewState,
    pub tone_options: Vec<ToneOption>,
    pub messages: Vec<String>,
    /// Inline message under the composer; empty when there is nothing to say.
    pub form_error: String,
    pub draft: MessageDraft,
    pub tone_focus_seq: u64,
}

#[derive(Clone, Copy, Debug)]
pub struct SignalSurface {
    ui: RwSignal<UiState>,
}

impl SignalSurface {
    pub fn new(ui: RwSignal<UiState>) -> Self {
        Self { ui }
    }
}

impl Surface for SignalSurface {
    fn show(&self, view: ViewState) {
        self.ui.update(|s| s.view = view);
    }

    /// A selected tone that is no longer offered falls back to the
    /// placeholder, matching what the rebuilt `<select>` shows.
    fn set_tone_options(&self, options: Vec<ToneOption>) {
        self.ui.update(|s| {
            let offered = options
                .iter()
                .any(|option| !option.is_placeholder() && option.value == s.draft.tone);
            if !offered {
                s.draft.tone.clear();
            }
            s.tone_options = options;
        });
    }

    fn set_messages(&self, lines: Vec<String>) {
        self.ui.update(|s| s.messages = lines);
    }

    fn alert(&self, message: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(window) = web_sys::window() {
                if let Err(err) = window.alert_with_message(message) {
                    log::warn!("alert failed: {err:?}");
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            log::info!("alert: {message}");
        }
    }

    fn set_form_error(&self, message: &str) {
        self.ui.update(|s| message.clone_into(&mut s.form_error));
    }

    fn focus_tone(&self) {
        self.ui.update(|s| s.tone_focus_seq = s.tone_focus_seq.wrapping_add(1));
    }

    fn reset_message_form(&self) {
        self.ui.update(|s| s.draft = MessageDraft::default());
    }
}
