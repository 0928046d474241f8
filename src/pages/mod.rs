//! Page modules.
//!
//! ARCHITECTURE
//! ============
//! There is a single page; it owns the auth/app region toggling and
//! delegates forms and the feed to `components`.

pub mod home;
