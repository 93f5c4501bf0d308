//! Bounded retry with exponential backoff for transient S3 failures.
//!
//! Progress saves are upserts: retrying a failed put is always safe, and
//! the respondent's in-memory answers survive a save that never lands. A
//! short attempt budget is enough before the failure surfaces as a
//! non-fatal notice.

use std::time::Duration;

use crate::error::StorageError;

/// Default attempt budget for store operations.
pub const DEFAULT_ATTEMPTS: u32 = 3;

const INITIAL_BACKOFF_MS: u64 = 100;
const MAX_BACKOFF_MS: u64 = 2_000;

/// Run `operation` up to `attempts` times, sleeping with exponential
/// backoff between failures. Non-transient errors fail immediately.
pub async fn with_backoff<F, Fut, T>(
    operation_name: &str,
    attempts: u32,
    mut operation: F,
) -> Result<T, StorageError>
where
    F: FnMut() -> Fut,
    Fut: std::future::Future<Output = Result<T, StorageError>>,
{
    let mut backoff_ms = INITIAL_BACKOFF_MS;
    let mut attempt = 0u32;

    loop {
        attempt += 1;

        match operation().await {
            Ok(value) => {
                if attempt > 1 {
                    tracing::debug!(
                        operation = operation_name,
                        attempt,
                        "storage operation succeeded after retry"
                    );
                }
                return Ok(value);
            }
            Err(err) if is_transient(&err) && attempt < attempts => {
                tracing::warn!(
                    operation = operation_name,
                    attempt,
                    backoff_ms,
                    error = %err,
                    "transient storage failure, retrying"
                );
                tokio::time::sleep(Duration::from_millis(backoff_ms)).await;
                backoff_ms = (backoff_ms * 2).min(MAX_BACKOFF_MS);
            }
            Err(err) => {
                if attempt > 1 {
                    tracing::error!(
                        operation = operation_name,
                        attempt,
                        error = %err,
                        "storage operation failed after retries"
                    );
                }
                return Err(err);
            }
        }
    }
}

/// Whether an error is worth retrying. A missing object or malformed JSON
/// never is; network-shaped SDK failures are.
fn is_transient(err: &StorageError) -> bool {
    matches!(
        err,
        StorageError::GetObject(_) | StorageError::PutObject(_) | StorageError::ListObjects(_)
    )
}
