//! Bounded retries with exponential backoff.

use std::future::Future;

use papersum_core::{AcquisitionFailure, Error, Result, RetryPolicy};
use tracing::warn;

/// Failures that retrying cannot fix.
fn is_permanent(err: &Error) -> bool {
    matches!(
        err,
        Error::Acquisition {
            kind: AcquisitionFailure::NotFound,
            ..
        }
    ) || err.is_input()
}

/// Run `op` up to `policy.max_attempts` times, sleeping `policy.delay_for(n)`
/// after failed attempt `n`. Returns the last error once attempts run out.
pub async fn with_retries<T, F, Fut>(policy: &RetryPolicy, label: &str, mut op: F) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let attempts = policy.max_attempts.max(1);
    let mut attempt = 0;
    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(e) if is_permanent(&e) => return Err(e),
            Err(e) => {
                attempt += 1;
                if attempt >= attempts {
                    warn!("{} failed after {} attempt(s): {}", label, attempts, e);
                    return Err(e);
                }
                let delay = policy.delay_for(attempt - 1);
                warn!(
                    "{} attempt {}/{} failed: {}; retrying in {}ms",
                    label,
                    attempt,
                    attempts,
                    e,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn fast(max_attempts: u32) -> RetryPolicy {
        RetryPolicy {
            max_attempts,
            base_delay_ms: 1,
        }
    }

    #[tokio::test]
    async fn test_succeeds_after_transient_failures() {
        let calls = AtomicU32::new(0);
        let result = with_retries(&fast(3), "lookup", || {
            let n = calls.fetch_add(1, Ordering::SeqCst);
            async move {
                if n < 2 {
                    Err(Error::acquisition(AcquisitionFailure::Network, "reset"))
                } else {
                    Ok(n)
                }
            }
        })
        .await;
        assert_eq!(result.unwrap(), 2);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_gives_up_after_max_attempts() {
        let calls = AtomicU32::new(0);
        let result: Result<()> = with_retries(&fast(3), "download", || {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Err(Error::acquisition(AcquisitionFailure::Timeout, "slow")) }
        })
        .await;
        assert!(matches!(
            result,
            Err(Error::Acquisition {
                kind: AcquisitionFailure::Timeout,
                ..
            })
        ));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_not_found_is_not_retried() {
        let calls = AtomicU32::new(0);
        let result: Result<()> = with_retries(&fast(5), "lookup", || {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Err(Error::acquisition(AcquisitionFailure::NotFound, "no entry")) }
        })
        .await;
        assert!(result.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
