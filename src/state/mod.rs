//! Client-side state modules.
//!
//! DESIGN
//! ======
//! Pure data and formatting rules live here (`view`, `tones`, `feed`,
//! `forms`) so they are testable without a browser; `ui` bundles them into
//! the signal-backed state the Leptos components render.

pub mod feed;
pub mod forms;
pub mod tones;
pub mod ui;
pub mod view;
