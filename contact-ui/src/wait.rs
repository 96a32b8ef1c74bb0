//! Fixed-timeout polling for UI readiness.
//!
//! The application renders asynchronously, so interactions poll for their
//! precondition with a fixed timeout. There are no cancellation semantics
//! beyond the timeout failure.

use std::future::Future;
use std::time::Duration;

use tokio::time::Instant;

use crate::error::{UiError, UiResult};

/// Default overall wait timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
/// Default interval between condition checks.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Waiting strategy: how long to keep polling, and how often.
#[derive(Debug, Clone)]
pub struct WaitConfig {
    /// Overall timeout before the wait fails
    pub timeout: Duration,
    /// Interval between condition checks
    pub poll_interval: Duration,
}

impl Default for WaitConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

impl WaitConfig {
    /// Strategy with a custom timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Strategy with a custom poll interval.
    #[must_use]
    pub const fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }
}

/// Poll `check` until it reports true or the timeout elapses.
///
/// `what` names the awaited condition in the timeout error.
///
/// # Errors
///
/// Returns [`UiError::WaitTimeout`] when the condition never held.
pub async fn poll_until<F, Fut>(config: &WaitConfig, what: &str, mut check: F) -> UiResult<()>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = bool>,
{
    let deadline = Instant::now() + config.timeout;
    loop {
        if check().await {
            return Ok(());
        }
        if Instant::now() >= deadline {
            let millis = u64::try_from(config.timeout.as_millis()).unwrap_or(u64::MAX);
            return Err(UiError::WaitTimeout(millis, what.to_string()));
        }
        tokio::time::sleep(config.poll_interval).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn fast_config() -> WaitConfig {
        WaitConfig::default()
            .with_timeout(Duration::from_millis(100))
            .with_poll_interval(Duration::from_millis(5))
    }

    #[tokio::test]
    async fn test_condition_already_true_returns_immediately() {
        let result = poll_until(&fast_config(), "always ready", || async { true }).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_condition_becoming_true_is_awaited() {
        let calls = AtomicU32::new(0);
        let result = poll_until(&fast_config(), "ready on third poll", || {
            let n = calls.fetch_add(1, Ordering::SeqCst);
            async move { n >= 2 }
        })
        .await;
        assert!(result.is_ok());
        assert!(calls.load(Ordering::SeqCst) >= 3);
    }

    #[tokio::test]
    async fn test_never_true_times_out() {
        let err = poll_until(&fast_config(), "never ready", || async { false })
            .await
            .unwrap_err();
        assert!(matches!(err, UiError::WaitTimeout(100, _)));
    }
}
