//! Platform helpers selected at compile time (desktop vs wasm).

use std::future::Future;
use std::time::Duration;

/// Sleep on whichever timer the target provides.
pub async fn sleep(duration: Duration) {
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;

    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
}

/// Spawn a fire-and-forget task on the Dioxus runtime of the current scope.
pub fn spawn_task(future: impl Future<Output = ()> + 'static) {
    dioxus::prelude::spawn(future);
}
