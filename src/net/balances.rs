//! Balance reporting endpoints.

use super::http::{self, ApiError};
use super::types::{BalanceOverview, BalanceSnapshot, Envelope, SnapshotFilter};

/// Fetch the aggregate balance report via `GET /balances/overview`.
pub async fn overview() -> Result<BalanceOverview, ApiError> {
    let envelope: Envelope<BalanceOverview> = http::get_json("/balances/overview").await?;
    Ok(envelope.data)
}

/// Fetch dated balance records via `GET /balances/snapshots`.
pub async fn snapshots(filter: &SnapshotFilter) -> Result<Vec<BalanceSnapshot>, ApiError> {
    let envelope: Envelope<Vec<BalanceSnapshot>> =
        http::get_json_query("/balances/snapshots", &filter.query_pairs()).await?;
    Ok(envelope.data)
}
