//! Best-effort fan-out support.
//!
//! Dependent fetches inside an aggregate are isolated: a failure is logged
//! and converted to an empty fallback value, never rethrown across the join
//! boundary, so sibling fetches and the enclosing aggregate always complete.

use std::future::Future;

use crate::error::Result;

/// Awaits one dependent fetch, degrading any failure to an empty collection.
pub(crate) async fn ok_or_empty<T>(
    fut: impl Future<Output = Result<Vec<T>>>,
    what: &'static str,
    parent_id: i64,
) -> Vec<T> {
    match fut.await {
        Ok(items) => items,
        Err(err) => {
            tracing::warn!(parent_id, error = %err, "failed to fetch {what}, continuing without them");
            Vec::new()
        }
    }
}
