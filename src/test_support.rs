//! Scripted collaborators shared by the native unit tests.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};

use serde_json::Value;

use crate::controller::{Controller, Surface};
use crate::net::api::ApiClient;
use crate::net::error::RequestError;
use crate::net::transport::{HttpRequest, HttpResponse, Method, Transport};
use crate::session::{MemoryTokenStore, Session};
use crate::state::tones::ToneOption;
use crate::state::view::ViewState;

pub(crate) const BASE_URL: &str = "http://api.test";

type Route = (Method, String);

/// Transport answering from per-route queues and recording every request.
#[derive(Default)]
pub(crate) struct ScriptedTransport {
    routes: RefCell<HashMap<Route, VecDeque<Result<HttpResponse, RequestError>>>>,
    sent: RefCell<Vec<HttpRequest>>,
}

impl ScriptedTransport {
    pub(crate) fn respond(&self, method: Method, path: &str, status: u16, body: &Value) {
        self.respond_raw(method, path, status, &body.to_string());
    }

    pub(crate) fn respond_raw(&self, method: Method, path: &str, status: u16, body: &str) {
        self.push(
            method,
            path,
            Ok(HttpResponse {
                status,
                body: body.to_owned(),
            }),
        );
    }

    pub(crate) fn fail(&self, method: Method, path: &str, message: &str) {
        self.push(method, path, Err(RequestError::Transport(message.to_owned())));
    }

    fn push(&self, method: Method, path: &str, outcome: Result<HttpResponse, RequestError>) {
        self.routes
            .borrow_mut()
            .entry((method, path.to_owned()))
            .or_default()
            .push_back(outcome);
    }

    pub(crate) fn sent(&self) -> Vec<HttpRequest> {
        self.sent.borrow().clone()
    }

    pub(crate) fn count(&self, method: Method, path: &str) -> usize {
        let url = format!("{BASE_URL}{path}");
        self.sent
            .borrow()
            .iter()
            .filter(|request| request.method == method && request.url == url)
            .count()
    }
}

impl Transport for ScriptedTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, RequestError> {
        let path = request
            .url
            .strip_prefix(BASE_URL)
            .unwrap_or(&request.url)
            .to_owned();
        let route = (request.method, path);
        self.sent.borrow_mut().push(request);
        let next = self
            .routes
            .borrow_mut()
            .get_mut(&route)
            .and_then(VecDeque::pop_front);
        next.unwrap_or_else(|| {
            Err(RequestError::Transport(format!(
                "no scripted response for {} {}",
                route.0.as_str(),
                route.1
            )))
        })
    }
}

/// Everything the controller pushed at the view.
#[derive(Clone, Debug, Default)]
pub(crate) struct Recorded {
    pub view: Option<ViewState>,
    pub tone_options: Vec<ToneOption>,
    pub tone_history: Vec<Vec<ToneOption>>,
    pub messages: Vec<String>,
    pub feed_renders: usize,
    pub alerts: Vec<String>,
    pub form_error: String,
    pub tone_focus: usize,
    pub form_resets: usize,
}

#[derive(Default)]
pub(crate) struct RecordingSurface {
    state: RefCell<Recorded>,
}

impl RecordingSurface {
    pub(crate) fn snapshot(&self) -> Recorded {
        self.state.borrow().clone()
    }
}

impl Surface for RecordingSurface {
    fn show(&self, view: ViewState) {
        self.state.borrow_mut().view = Some(view);
    }

    fn set_tone_options(&self, options: Vec<ToneOption>) {
        let mut state = self.state.borrow_mut();
        state.tone_history.push(options.clone());
        state.tone_options = options;
    }

    fn set_messages(&self, lines: Vec<String>) {
        let mut state = self.state.borrow_mut();
        state.messages = lines;
        state.feed_renders += 1;
    }

    fn alert(&self, message: &str) {
        self.state.borrow_mut().alerts.push(message.to_owned());
    }

    fn set_form_error(&self, message: &str) {
        message.clone_into(&mut self.state.borrow_mut().form_error);
    }

    fn focus_tone(&self) {
        self.state.borrow_mut().tone_focus += 1;
    }

    fn reset_message_form(&self) {
        self.state.borrow_mut().form_resets += 1;
    }
}

pub(crate) type TestController = Controller<ScriptedTransport, MemoryTokenStore, RecordingSurface>;

/// Controller over scripted collaborators; `stored` seeds the token store.
pub(crate) fn controller(stored: Option<&str>) -> TestController {
    let store = MemoryTokenStore::default();
    if let Some(token) = stored {
        crate::session::TokenStore::save(&store, token);
    }
    Controller::new(
        ApiClient::new(ScriptedTransport::default(), BASE_URL),
        Session::restore(store),
        RecordingSurface::default(),
    )
}
