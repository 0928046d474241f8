//! Composer for new regrets: text, tone select, anonymous checkbox.

use std::sync::Arc;

use leptos::prelude::*;

use crate::app::AppController;
use crate::state::ui::UiState;
use crate::util::task::spawn_flow;

#[component]
pub fn RegretForm() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let controller = expect_context::<Arc<AppController>>();
    let tone_ref = NodeRef::<leptos::html::Select>::new();

    Effect::new(move || {
        let seq = ui.with(|s| s.tone_focus_seq);
        if seq == 0 {
            return;
        }
        #[cfg(feature = "csr")]
        {
            if let Some(select) = tone_ref.get() {
                if let Err(err) = select.focus() {
                    log::warn!("tone focus failed: {err:?}");
                }
            }
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let draft = ui.with_untracked(|s| s.draft.clone());
        let controller = Arc::clone(&controller);
        spawn_flow(async move {
            if let Err(err) = controller.create_message(&draft).await {
                log::debug!("regret not posted: {err}");
            }
        });
    };

    view! {
        <form class="regret-form" on:submit=on_submit>
            <textarea
                class="regret-form__text"
                placeholder="What do you regret?"
                prop:value=move || ui.with(|s| s.draft.text.clone())
                on:input=move |ev| ui.update(|s| s.draft.text = event_target_value(&ev))
            ></textarea>

            <select
                class="regret-form__tone"
                node_ref=tone_ref
                prop:value=move || ui.with(|s| s.draft.tone.clone())
                on:change=move |ev| ui.update(|s| s.draft.tone = event_target_value(&ev))
            >
                {move || {
                    ui.with(|s| s.tone_options.clone())
                        .into_iter()
                        .map(|option| view! { <option value=option.value>{option.label}</option> })
                        .collect_view()
                }}
            </select>

            <label class="regret-form__anonymous">
                <input
                    type="checkbox"
                    prop:checked=move || ui.with(|s| s.draft.is_anonymous)
                    on:change=move |ev| ui.update(|s| s.draft.is_anonymous = event_target_checked(&ev))
                />
                "Post anonymously"
            </label>

            <button class="btn btn--primary" type="submit">"Post"</button>

            <p class="regret-form__error">{move || ui.with(|s| s.form_error.clone())}</p>
        </form>
    }
}
