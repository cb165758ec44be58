//! Concurrent status probing: one query per target, all in flight at once,
//! results joined back in configuration order.

use std::time::Duration;

use futures::future::join_all;
use tracing::debug;

use crate::config::Target;
use crate::models::StatusResult;
use crate::protocol;

/// Per-probe budget. A dead server costs a request this much, never more.
pub const SOCKET_TIMEOUT: Duration = Duration::from_secs(1);

/// Probes every target concurrently and waits for all of them. The output
/// is index-aligned with `targets` no matter which probes finish first.
pub async fn probe_all(targets: &[Target], deadline: Duration) -> Vec<StatusResult> {
    join_all(targets.iter().map(|target| probe_target(target, deadline))).await
}

/// Never fails: any query error becomes an offline record.
async fn probe_target(target: &Target, deadline: Duration) -> StatusResult {
    match protocol::get_status(&target.host, target.port, deadline).await {
        Ok(status) => StatusResult::online(target, &status),
        Err(e) => {
            debug!("Probe of {} ({}:{}) failed: {}", target.name, target.host, target.port, e);
            StatusResult::offline(target, e.to_string())
        }
    }
}
