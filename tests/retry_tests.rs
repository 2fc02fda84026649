use anyhow::{Result, anyhow};
use bellory_admin::{
    config::Config,
    error::ApiError,
    models::retry::RetryConfig,
    utils::{retry_when, retry_with_backoff},
};
use std::sync::{
    Arc,
    atomic::{AtomicU32, Ordering},
};
use tokio::time::Instant;

fn fast_config(max_attempts: u32) -> RetryConfig {
    RetryConfig {
        max_attempts,
        initial_delay_ms: 20,
        max_delay_ms: 200,
        backoff_multiplier: 2,
    }
}

/// Test: Successful reads complete without retry
#[tokio::test]
async fn test_successful_operation_no_retry() -> Result<()> {
    let attempt_count = Arc::new(AtomicU32::new(0));
    let counter = Arc::clone(&attempt_count);

    let result = retry_with_backoff(&fast_config(3), || {
        let counter = Arc::clone(&counter);
        async move {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok::<_, anyhow::Error>("dashboard")
        }
    })
    .await?;

    assert_eq!(result, "dashboard");
    assert_eq!(
        attempt_count.load(Ordering::SeqCst),
        1,
        "Should only attempt once"
    );

    Ok(())
}

/// Test: Server errors are retried until the read succeeds
#[tokio::test]
async fn test_server_errors_are_retried() -> Result<()> {
    let attempt_count = Arc::new(AtomicU32::new(0));
    let counter = Arc::clone(&attempt_count);

    let result = retry_when(
        &fast_config(5),
        || {
            let counter = Arc::clone(&counter);
            async move {
                let attempts = counter.fetch_add(1, Ordering::SeqCst);

                // Two 503s, then the server recovers
                if attempts < 2 {
                    Err(ApiError::Status {
                        status: 503,
                        message: "Service Unavailable".to_string(),
                    })
                } else {
                    Ok("planos")
                }
            }
        },
        ApiError::is_retryable,
    )
    .await?;

    assert_eq!(result, "planos");
    assert_eq!(
        attempt_count.load(Ordering::SeqCst),
        3,
        "Should retry 2 times then succeed"
    );

    Ok(())
}

/// Test: Client errors are returned on the first attempt
#[tokio::test]
async fn test_client_errors_are_not_retried() -> Result<()> {
    for error in [
        ApiError::Unauthorized,
        ApiError::Forbidden,
        ApiError::Status {
            status: 404,
            message: "Plano não encontrado".to_string(),
        },
    ] {
        let expected_status = error.status();
        let slot = Arc::new(std::sync::Mutex::new(Some(error)));
        let attempt_count = Arc::new(AtomicU32::new(0));
        let counter = Arc::clone(&attempt_count);

        let result: Result<(), ApiError> = retry_when(
            &fast_config(4),
            || {
                let counter = Arc::clone(&counter);
                let slot = Arc::clone(&slot);
                async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                    let error = slot
                        .lock()
                        .ok()
                        .and_then(|mut s| s.take())
                        .unwrap_or(ApiError::InvalidResponse("retried".to_string()));
                    Err(error)
                }
            },
            ApiError::is_retryable,
        )
        .await;

        let error = result.expect_err("Operation should fail");
        assert_eq!(error.status(), expected_status, "Original error is returned");
        assert_eq!(
            attempt_count.load(Ordering::SeqCst),
            1,
            "Non-retryable errors should not be retried"
        );
    }

    Ok(())
}

/// Test: Persistent failures exhaust retries
#[tokio::test]
async fn test_permanent_failure_exhausts_retries() -> Result<()> {
    let attempt_count = Arc::new(AtomicU32::new(0));
    let counter = Arc::clone(&attempt_count);

    let result = retry_with_backoff(&fast_config(4), || {
        let counter = Arc::clone(&counter);
        async move {
            counter.fetch_add(1, Ordering::SeqCst);
            Err::<String, _>(anyhow!("Connection refused"))
        }
    })
    .await;

    assert!(result.is_err(), "Should fail after max attempts");
    assert_eq!(
        attempt_count.load(Ordering::SeqCst),
        4,
        "Should attempt exactly max_attempts times"
    );

    Ok(())
}

/// Test: A single-attempt config never sleeps or retries
#[tokio::test]
async fn test_no_retry_config_attempts_once() -> Result<()> {
    let attempt_count = Arc::new(AtomicU32::new(0));
    let counter = Arc::clone(&attempt_count);

    let result = retry_with_backoff(&RetryConfig::no_retry(), || {
        let counter = Arc::clone(&counter);
        async move {
            counter.fetch_add(1, Ordering::SeqCst);
            Err::<String, _>(anyhow!("Fail"))
        }
    })
    .await;

    assert!(result.is_err());
    assert_eq!(attempt_count.load(Ordering::SeqCst), 1);

    Ok(())
}

/// Test: Retry delays follow exponential backoff
#[tokio::test]
async fn test_exponential_backoff_timing() -> Result<()> {
    let config = RetryConfig {
        max_attempts: 4,
        initial_delay_ms: 100,
        max_delay_ms: 1000,
        backoff_multiplier: 2,
    };

    let start = Instant::now();
    let attempt_times = Arc::new(tokio::sync::Mutex::new(Vec::new()));
    let times = Arc::clone(&attempt_times);

    let _ = retry_with_backoff(&config, || {
        let times = Arc::clone(&times);
        async move {
            let elapsed = start.elapsed().as_millis();
            times.lock().await.push(elapsed);
            Err::<String, _>(anyhow!("Fail"))
        }
    })
    .await;

    let times = attempt_times.lock().await;

    assert_eq!(times.len(), 4);
    assert!(times[0] < 50, "First attempt should be immediate");

    for i in 1..times.len() {
        let delay = times[i] - times[i - 1];
        let base = config.initial_delay_ms * config.backoff_multiplier.pow(i as u32 - 1);
        let expected_min = base * 8 / 10;
        let expected_max = base * 15 / 10;

        assert!(
            delay >= expected_min as u128 && delay <= expected_max as u128,
            "Delay {} should be between {} and {} (actual: {})",
            i,
            expected_min,
            expected_max,
            delay
        );
    }

    Ok(())
}

/// Test: Max delay cap is respected
#[tokio::test]
async fn test_max_delay_cap_respected() -> Result<()> {
    let config = RetryConfig {
        max_attempts: 6,
        initial_delay_ms: 100,
        max_delay_ms: 300,
        backoff_multiplier: 2,
    };

    let start = Instant::now();
    let attempt_times = Arc::new(tokio::sync::Mutex::new(Vec::new()));
    let times = Arc::clone(&attempt_times);

    let _ = retry_with_backoff(&config, || {
        let times = Arc::clone(&times);
        async move {
            let elapsed = start.elapsed().as_millis();
            times.lock().await.push(elapsed);
            Err::<String, _>(anyhow!("Fail"))
        }
    })
    .await;

    let times = attempt_times.lock().await;

    for i in 3..times.len() {
        let delay = times[i] - times[i - 1];
        assert!(
            delay <= (config.max_delay_ms * 15 / 10) as u128,
            "Delay should not exceed max_delay_ms cap"
        );
    }

    Ok(())
}

/// Test: Retry settings come from the configuration
#[tokio::test]
async fn test_retry_config_from_config() -> Result<()> {
    let config = Config {
        max_retry_attempts: 7,
        initial_retry_delay_ms: 250,
        max_retry_delay_ms: 4000,
        retry_backoff_multiplier: 3,
        ..Config::default()
    };

    let retry = RetryConfig::from_config(&config);

    assert_eq!(retry.max_attempts, 7);
    assert_eq!(retry.initial_delay_ms, 250);
    assert_eq!(retry.max_delay_ms, 4000);
    assert_eq!(retry.backoff_multiplier, 3);

    Ok(())
}
