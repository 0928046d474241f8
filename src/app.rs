//! Root application component: wires the controller and provides context.

use std::sync::Arc;

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::controller::Controller;
use crate::net::api::ApiClient;
use crate::net::browser::BrowserTransport;
use crate::pages::home::HomePage;
use crate::session::Session;
use crate::state::ui::{SignalSurface, UiState};
use crate::util::local_storage::LocalStorageTokenStore;

/// Controller as wired for the browser.
pub type AppController = Controller<BrowserTransport, LocalStorageTokenStore, SignalSurface>;

/// Root application component.
///
/// Provides `RwSignal<UiState>` and `Arc<AppController>` to every child and
/// kicks off the startup probe.
#[component]
pub fn App() -> impl IntoView {
    let config = ClientConfig::from_build_env();
    let ui = RwSignal::new(UiState::default());
    let controller = Arc::new(Controller::new(
        ApiClient::new(BrowserTransport, &config.api_url),
        Session::restore(LocalStorageTokenStore::new(config.token_key)),
        SignalSurface::new(ui),
    ));

    let startup = Arc::clone(&controller);
    crate::util::task::spawn_flow(async move {
        let view = startup.startup().await;
        log::info!("started in {} view", view.label());
    });

    provide_context(ui);
    provide_context(controller);

    view! { <HomePage/> }
}
