use super::client::ApiClient;
use super::error::ApiError;
use crate::models::LedgerView;
use crate::utils::{format_bytes, format_time_from_minutes};

pub struct LedgersResult {
    pub ledgers: Vec<LedgerView>,
    pub total_size: u64,
    pub total_ledgers: u64,
}

/// Fetch ledgers, optionally scoped to one cluster/bookie pair.
pub async fn load_ledgers(
    api: &ApiClient,
    cluster_id: Option<&str>,
    bookie_id: Option<&str>,
) -> Result<LedgersResult, ApiError> {
    let mut params = Vec::new();
    if let Some(cluster) = cluster_id {
        params.push(("cluster".to_string(), cluster.to_string()));
    }
    if let Some(bookie) = bookie_id {
        params.push(("bookie".to_string(), bookie.to_string()));
    }
    let params = if params.is_empty() { None } else { Some(params) };
    let payload = api.get_value("api/ledger/all", params).await?;

    let mut ledgers = Vec::new();
    if let Some(arr) = payload.get("ledgers").and_then(|d| d.as_array()) {
        for item in arr {
            if let Some(obj) = item.as_object() {
                let size = obj.get("length").and_then(|v| v.as_u64()).unwrap_or(0);
                let age_minutes = obj.get("age").and_then(|v| v.as_u64()).unwrap_or(0);
                ledgers.push(LedgerView {
                    ledger_id: obj.get("id").and_then(|v| v.as_i64()).unwrap_or(0),
                    description: obj
                        .get("description")
                        .and_then(|v| v.as_str())
                        .unwrap_or("")
                        .to_string(),
                    size,
                    size_display: format_bytes(size, 2),
                    age_display: format_time_from_minutes(age_minutes),
                    ensemble_size: obj.get("ensembleSize").and_then(|v| v.as_i64()).unwrap_or(0),
                    write_quorum_size: obj
                        .get("writeQuorumSize")
                        .and_then(|v| v.as_i64())
                        .unwrap_or(0),
                    ack_quorum_size: obj
                        .get("ackQuorumSize")
                        .and_then(|v| v.as_i64())
                        .unwrap_or(0),
                    closed: obj.get("closed").and_then(|v| v.as_bool()).unwrap_or(false),
                });
            }
        }
    }

    Ok(LedgersResult {
        total_size: payload.get("totalSize").and_then(|v| v.as_u64()).unwrap_or(0),
        total_ledgers: payload
            .get("totalLedgers")
            .and_then(|v| v.as_u64())
            .unwrap_or(ledgers.len() as u64),
        ledgers,
    })
}
