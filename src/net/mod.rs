//! Networking modules for the regret REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` builds requests and unwraps responses, `transport` is the seam an
//! HTTP backend plugs into, `browser` is the `gloo-net` backend, `error`
//! holds the single failure type and `types` the wire schema.

pub mod api;
pub mod browser;
pub mod error;
pub mod transport;
pub mod types;
