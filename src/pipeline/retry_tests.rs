//! Tests for `RetryPolicy`.

use std::time::Duration;

use super::RetryPolicy;

#[test]
fn default_matches_reference_behavior() {
    let policy = RetryPolicy::default();
    assert_eq!(policy.max_attempts, 10);
    assert_eq!(policy.delay, Duration::from_secs(1));
}

#[test]
fn builder_overrides_fields() {
    let policy = RetryPolicy::new()
        .with_max_attempts(3)
        .with_delay(Duration::from_millis(250));

    assert_eq!(policy.max_attempts, 3);
    assert_eq!(policy.delay, Duration::from_millis(250));
}

#[test]
fn should_retry_below_ceiling() {
    let policy = RetryPolicy::new().with_max_attempts(3);
    assert!(policy.should_retry(1));
    assert!(policy.should_retry(2));
    assert!(!policy.should_retry(3));
    assert!(!policy.should_retry(4));
}

#[test]
fn single_attempt_never_retries() {
    let policy = RetryPolicy::new().with_max_attempts(1);
    assert!(!policy.should_retry(1));
}

#[test]
fn zero_delay_is_allowed() {
    let policy = RetryPolicy::new().with_delay(Duration::ZERO);
    assert_eq!(policy.delay, Duration::ZERO);
}

#[test]
#[should_panic(expected = "max_attempts must be at least 1")]
fn zero_max_attempts_panics() {
    let _ = RetryPolicy::new().with_max_attempts(0);
}
