//! Feed of posted regrets, one pre-rendered line each.

use leptos::prelude::*;

use crate::state::ui::UiState;

#[component]
pub fn RegretList() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <ul class="regret-list">
            {move || {
                ui.with(|s| s.messages.clone())
                    .into_iter()
                    .map(|line| view! { <li class="regret-list__item">{line}</li> })
                    .collect_view()
            }}
        </ul>
    }
}
