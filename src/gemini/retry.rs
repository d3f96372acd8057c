// Retry with exponential backoff for Gemini calls

use anyhow::Result;
use std::time::Duration;
use tokio::time::sleep;

const MAX_ATTEMPTS: u32 = 3;
const INITIAL_BACKOFF_MS: u64 = 500;

/// Run `f` up to three times, doubling the delay between attempts.
pub async fn with_retry<F, Fut, T>(f: F) -> Result<T>
where
    F: Fn() -> Fut,
    Fut: std::future::Future<Output = Result<T>>,
{
    let mut last_error = None;

    for attempt in 1..=MAX_ATTEMPTS {
        match f().await {
            Ok(value) => return Ok(value),
            Err(e) => {
                if attempt < MAX_ATTEMPTS {
                    let backoff =
                        Duration::from_millis(INITIAL_BACKOFF_MS * 2u64.pow(attempt - 1));
                    tracing::warn!(
                        attempt,
                        max_attempts = MAX_ATTEMPTS,
                        ?backoff,
                        error = %e,
                        "generation request failed, retrying"
                    );
                    last_error = Some(e);
                    sleep(backoff).await;
                } else {
                    last_error = Some(e);
                }
            }
        }
    }

    Err(last_error.expect("retry loop ran at least once"))
}
