//! Retry-with-backoff combinator for transient failures.

use std::future::Future;
use std::time::Duration;

use finpanel_shared::ApiResult;

/// Retries a remote call that failed for a transient reason.
///
/// Invokes `operation` up to `max_attempts` times in total. A failure is
/// retried only when `ApiError::is_retryable` says so (transport
/// timeout, 503, 408); anything else propagates unchanged without
/// consuming a retry. Before each retry the combinator sleeps `delay`,
/// then doubles it. Purely sequential: each attempt completes before the
/// next is scheduled.
pub async fn retry_with_backoff<T, F, Fut>(
    mut operation: F,
    max_attempts: u32,
    initial_delay: Duration,
) -> ApiResult<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = ApiResult<T>>,
{
    let mut delay = initial_delay;
    let mut attempt = 1u32;
    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(error) if error.is_retryable() && attempt < max_attempts => {
                tracing::debug!(
                    attempt,
                    delay_ms = delay.as_millis() as u64,
                    error = %error,
                    "transient failure, backing off"
                );
                tokio::time::sleep(delay).await;
                delay *= 2;
                attempt += 1;
            }
            Err(error) => return Err(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use finpanel_shared::ApiError;
    use std::cell::RefCell;
    use tokio::time::Instant;

    fn unavailable() -> ApiError {
        ApiError::Status {
            status: 503,
            message: None,
        }
    }

    #[tokio::test(start_paused = true)]
    async fn succeeds_on_third_attempt_with_doubled_delays() {
        let calls = RefCell::new(0u32);
        let started = Instant::now();

        let result = retry_with_backoff(
            || async {
                *calls.borrow_mut() += 1;
                if *calls.borrow() < 3 {
                    Err(unavailable())
                } else {
                    Ok(42)
                }
            },
            3,
            Duration::from_millis(1000),
        )
        .await;

        assert_eq!(result.unwrap(), 42);
        assert_eq!(*calls.borrow(), 3);
        // Exactly two delays: 1000ms then 2000ms.
        assert_eq!(started.elapsed(), Duration::from_millis(3000));
    }

    #[tokio::test(start_paused = true)]
    async fn non_retryable_propagates_immediately() {
        let calls = RefCell::new(0u32);
        let started = Instant::now();

        let result: ApiResult<i32> = retry_with_backoff(
            || async {
                *calls.borrow_mut() += 1;
                Err(ApiError::Status {
                    status: 400,
                    message: Some("Valor inválido".into()),
                })
            },
            3,
            Duration::from_millis(1000),
        )
        .await;

        assert!(matches!(
            result,
            Err(ApiError::Status { status: 400, .. })
        ));
        assert_eq!(*calls.borrow(), 1);
        assert_eq!(started.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn exhausted_budget_propagates_original_error() {
        let calls = RefCell::new(0u32);

        let result: ApiResult<i32> =
            retry_with_backoff(|| async {
                *calls.borrow_mut() += 1;
                Err(ApiError::Timeout)
            }, 3, Duration::from_millis(1000))
            .await;

        assert!(matches!(result, Err(ApiError::Timeout)));
        assert_eq!(*calls.borrow(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn timeout_is_retried() {
        let calls = RefCell::new(0u32);

        let result = retry_with_backoff(
            || async {
                *calls.borrow_mut() += 1;
                if *calls.borrow() == 1 {
                    Err(ApiError::Timeout)
                } else {
                    Ok("ok")
                }
            },
            3,
            Duration::from_millis(10),
        )
        .await;

        assert_eq!(result.unwrap(), "ok");
        assert_eq!(*calls.borrow(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn http_408_is_retried() {
        let calls = RefCell::new(0u32);

        let result = retry_with_backoff(
            || async {
                *calls.borrow_mut() += 1;
                if *calls.borrow() == 1 {
                    Err(ApiError::Status {
                        status: 408,
                        message: None,
                    })
                } else {
                    Ok(())
                }
            },
            3,
            Duration::from_millis(10),
        )
        .await;

        assert!(result.is_ok());
        assert_eq!(*calls.borrow(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn single_attempt_budget_never_sleeps() {
        let calls = RefCell::new(0u32);
        let started = Instant::now();

        let result: ApiResult<i32> = retry_with_backoff(
            || async {
                *calls.borrow_mut() += 1;
                Err(unavailable())
            },
            1,
            Duration::from_millis(1000),
        )
        .await;

        assert!(result.is_err());
        assert_eq!(*calls.borrow(), 1);
        assert_eq!(started.elapsed(), Duration::ZERO);
    }
}
