//! Timer future used for simulated backend latency and toast expiry.

use std::time::Duration;

/// Suspend the current task for `duration` in the browser.
///
/// Outside the browser this resolves immediately, which keeps native tests
/// deterministic.
pub async fn sleep(duration: Duration) {
    #[cfg(feature = "hydrate")]
    {
        gloo_timers::future::sleep(duration).await;
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = duration;
    }
}
