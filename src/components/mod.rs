//! UI components rendered by the home page.
//!
//! Components read `RwSignal<UiState>` and call into the shared
//! controller; none of them talk to the network themselves.

pub mod auth_panel;
pub mod regret_form;
pub mod regret_list;
