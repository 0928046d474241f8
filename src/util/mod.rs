//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and
//! component logic so the rest of the crate builds and tests natively.

pub mod local_storage;
pub mod task;
