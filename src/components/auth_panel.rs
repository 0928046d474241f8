//! Register and login forms.

use std::sync::Arc;

use leptos::prelude::*;

use crate::app::AppController;
use crate::util::task::spawn_flow;

#[component]
pub fn AuthPanel() -> impl IntoView {
    let controller = expect_context::<Arc<AppController>>();

    let register_username = RwSignal::new(String::new());
    let register_password = RwSignal::new(String::new());
    let login_username = RwSignal::new(String::new());
    let login_password = RwSignal::new(String::new());

    let register_controller = Arc::clone(&controller);
    let on_register = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let username = register_username.get_untracked();
        let password = register_password.get_untracked();
        let controller = Arc::clone(&register_controller);
        spawn_flow(async move {
            if let Err(err) = controller.register(&username, &password).await {
                log::debug!("registration failed: {err}");
            }
        });
    };

    let on_login = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let username = login_username.get_untracked();
        let password = login_password.get_untracked();
        let controller = Arc::clone(&controller);
        spawn_flow(async move {
            if let Err(err) = controller.login(&username, &password).await {
                log::debug!("login failed: {err}");
            }
        });
    };

    view! {
        <div class="auth-panel">
            <form class="auth-form" on:submit=on_register>
                <h2>"Register"</h2>
                <input
                    class="auth-input"
                    type="text"
                    placeholder="Username"
                    autocomplete="username"
                    prop:value=move || register_username.get()
                    on:input=move |ev| register_username.set(event_target_value(&ev))
                />
                <input
                    class="auth-input"
                    type="password"
                    placeholder="Password"
                    autocomplete="new-password"
                    prop:value=move || register_password.get()
                    on:input=move |ev| register_password.set(event_target_value(&ev))
                />
                <button class="btn" type="submit">"Register"</button>
            </form>

            <form class="auth-form" on:submit=on_login>
                <h2>"Login"</h2>
                <input
                    class="auth-input"
                    type="text"
                    placeholder="Username"
                    autocomplete="username"
                    prop:value=move || login_username.get()
                    on:input=move |ev| login_username.set(event_target_value(&ev))
                />
                <input
                    class="auth-input"
                    type="password"
                    placeholder="Password"
                    autocomplete="current-password"
                    prop:value=move || login_password.get()
                    on:input=move |ev| login_password.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit">"Login"</button>
            </form>
        </div>
    }
}
