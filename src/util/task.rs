//! Spawning of user-triggered flows.

use std::future::Future;

/// Run a flow on the browser's event loop. Outside the browser there is no
/// executor to hand it to, so it is dropped unstarted.
pub fn spawn_flow<F>(flow: F)
where
    F: Future<Output = ()> + 'static,
{
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(flow);
    #[cfg(not(feature = "csr"))]
    drop(flow);
}
