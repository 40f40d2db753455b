//! Timing utilities for the workflow cadence.

pub async fn sleep_ms(ms: u64) {
    api::timer::sleep_ms(ms).await;
}
