//! Home page: header with logout, auth forms, composer and feed.
//!
//! SYSTEM CONTEXT
//! ==============
//! Exactly one of the auth and app regions is displayed, driven by
//! `UiState::view`; the logout button is visible only with the app region.

use std::sync::Arc;

use leptos::prelude::*;

use crate::app::AppController;
use crate::components::auth_panel::AuthPanel;
use crate::components::regret_form::RegretForm;
use crate::components::regret_list::RegretList;
use crate::state::ui::UiState;

#[component]
pub fn HomePage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let controller = expect_context::<Arc<AppController>>();

    let regions = move || ui.with(|s| s.view.regions());
    let on_logout = move |_| controller.logout();

    view! {
        <div class="regret-page">
            <header class="regret-page__header">
                <h1 class="regret-page__title">"Regret Board"</h1>
                <button
                    class="btn regret-page__logout"
                    type="button"
                    style:display=move || regions().logout
                    on:click=on_logout
                >
                    "Logout"
                </button>
            </header>

            <section class="regret-page__auth" style:display=move || regions().auth>
                <AuthPanel/>
            </section>

            <section class="regret-page__app" style:display=move || regions().app>
                <RegretForm/>
                <RegretList/>
            </section>
        </div>
    }
}
