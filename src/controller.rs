//! Flow controller: startup probe, tone/feed loaders and the form handlers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Front-ends (the Leptos app, the CLI) translate user actions into calls on
//! [`Controller`] and render whatever it pushes through their [`Surface`].
//! The controller never touches a DOM or a terminal directly.
//!
//! Each handler follows the same shape: normalize inputs, validate, call the
//! API, update session and view, refresh dependent views. On failure the
//! error is reported through the surface and session/view stay as they were.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use crate::net::api::ApiClient;
use crate::net::error::RequestError;
use crate::net::transport::Transport;
use crate::net::types::Credentials;
use crate::session::{Session, TokenStore};
use crate::state::feed::render_feed;
use crate::state::forms::MessageDraft;
use crate::state::tones::{self, ToneLoad, ToneOption};
use crate::state::view::ViewState;

pub const REGISTERED_MESSAGE: &str = "Registered";
pub const LOGIN_FAILED_MESSAGE: &str = "Login failed";

/// View bindings the controller drives.
///
/// `alert` is blocking and user-facing; `set_form_error` is the inline,
/// non-blocking message next to the composer (empty string clears it).
pub trait Surface {
    fn show(&self, view: ViewState);
    fn set_tone_options(&self, options: Vec<ToneOption>);
    fn set_messages(&self, lines: Vec<String>);
    fn alert(&self, message: &str);
    fn set_form_error(&self, message: &str);
    fn focus_tone(&self);
    /// Clear text, select the tone placeholder, uncheck anonymous.
    fn reset_message_form(&self);
}

pub struct Controller<T, S, V> {
    api: ApiClient<T>,
    session: Session<S>,
    surface: V,
}

impl<T, S, V> Controller<T, S, V>
where
    T: Transport,
    S: TokenStore,
    V: Surface,
{
    pub fn new(api: ApiClient<T>, session: Session<S>, surface: V) -> Self {
        Self { api, session, surface }
    }

    pub fn api(&self) -> &ApiClient<T> {
        &self.api
    }

    pub fn session(&self) -> &Session<S> {
        &self.session
    }

    pub fn surface(&self) -> &V {
        &self.surface
    }

    /// Pick the initial view. A stored token is trusted optimistically and
    /// probed by loading tones and the feed; a failed feed load drops the
    /// session. Tone failures never log the user out.
    pub async fn startup(&self) -> ViewState {
        if !self.session.is_active() {
            self.surface.show(ViewState::Auth);
            return ViewState::Auth;
        }

        self.surface.show(ViewState::App);
        self.load_tones().await;
        if let Err(err) = self.load_messages().await {
            log::warn!("stored session rejected, falling back to login: {err}");
            self.session.clear();
            self.surface.show(ViewState::Auth);
            return ViewState::Auth;
        }
        ViewState::App
    }

    /// Populate the tone control. Never fails from the caller's side.
    pub async fn load_tones(&self) -> ToneLoad {
        self.surface.set_tone_options(tones::loading_options());
        match self.api.tones().await {
            Ok(list) if list.is_empty() => {
                self.surface.set_tone_options(tones::tone_options(&list));
                ToneLoad::Empty
            }
            Ok(list) => {
                self.surface.set_tone_options(tones::tone_options(&list));
                ToneLoad::Loaded(list.len())
            }
            Err(err) => {
                log::error!("failed to load tones: {err}");
                self.surface.set_tone_options(tones::failed_options());
                ToneLoad::Failed(err.to_string())
            }
        }
    }

    /// Replace the feed with the server's messages.
    ///
    /// # Errors
    ///
    /// The failure has already been alerted; it is returned so the startup
    /// probe can act on it.
    pub async fn load_messages(&self) -> Result<(), RequestError> {
        let token = self.session.token().unwrap_or_default();
        match self.api.messages(&token).await {
            Ok(messages) => {
                self.surface.set_messages(render_feed(&messages));
                Ok(())
            }
            Err(err) => {
                self.surface.alert(&err.to_string());
                Err(err)
            }
        }
    }

    /// Create an account. Does not log in.
    ///
    /// # Errors
    ///
    /// Returns the (already alerted) request failure.
    pub async fn register(&self, username: &str, password: &str) -> Result<(), RequestError> {
        let credentials = Credentials::from_form(username, password);
        match self.api.register(&credentials).await {
            Ok(message) => {
                self.surface.alert(message.as_deref().unwrap_or(REGISTERED_MESSAGE));
                Ok(())
            }
            Err(err) => {
                self.surface.alert(&err.to_string());
                Err(err)
            }
        }
    }

    /// Exchange credentials for a token, switch to the app and load it.
    ///
    /// # Errors
    ///
    /// Returns the (already alerted) login failure; session and view are
    /// untouched in that case.
    pub async fn login(&self, username: &str, password: &str) -> Result<(), RequestError> {
        let credentials = Credentials::from_form(username, password);
        let token = match self.api.login(&credentials).await {
            Ok(token) => token,
            Err(err) => {
                let message = err.to_string();
                self.surface.alert(if message.is_empty() { LOGIN_FAILED_MESSAGE } else { &message });
                return Err(err);
            }
        };

        self.session.set(&token);
        self.surface.show(ViewState::App);
        self.load_tones().await;
        self.refresh_feed().await;
        Ok(())
    }

    /// Post a regret. Problems are reported inline, never alerted.
    ///
    /// # Errors
    ///
    /// [`RequestError::Validation`] when no tone is selected (no request is
    /// made), otherwise the request failure.
    pub async fn create_message(&self, draft: &MessageDraft) -> Result<(), RequestError> {
        self.surface.set_form_error("");

        let message = match draft.validate() {
            Ok(message) => message,
            Err(reason) => {
                self.surface.set_form_error(reason);
                self.surface.focus_tone();
                return Err(RequestError::Validation(reason.to_owned()));
            }
        };

        let token = self.session.token().unwrap_or_default();
        if let Err(err) = self.api.create_message(&token, &message).await {
            self.surface.set_form_error(&err.to_string());
            return Err(err);
        }

        self.surface.reset_message_form();
        self.refresh_feed().await;
        Ok(())
    }

    /// Drop the session and return to the auth forms. No network call.
    pub fn logout(&self) {
        self.session.clear();
        self.surface.show(ViewState::Auth);
    }

    async fn refresh_feed(&self) {
        if let Err(err) = self.load_messages().await {
            log::debug!("feed refresh failed: {err}");
        }
    }
}
