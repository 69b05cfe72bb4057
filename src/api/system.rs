use serde_json::Value;

use super::client::ApiClient;
use super::error::ApiError;
use crate::models::{ClusterStatusView, SystemStatusView};
use crate::utils::format_time_diff;

/// Current metadata-cache worker status plus per-cluster configuration.
pub async fn load_system_status(api: &ApiClient) -> Result<SystemStatusView, ApiError> {
    let payload = api.get_value("api/cache/info", None).await?;
    Ok(parse_status(&payload))
}

/// Ask the service to rebuild its metadata cache, returning the new status.
pub async fn refresh_system_status(api: &ApiClient) -> Result<SystemStatusView, ApiError> {
    let payload = api.get_value("api/cache/refresh", None).await?;
    Ok(parse_status(&payload))
}

fn parse_status(payload: &Value) -> SystemStatusView {
    let now_millis = chrono::Utc::now().timestamp_millis();
    let last_refresh = payload
        .get("lastCacheRefresh")
        .and_then(|v| v.as_i64())
        .unwrap_or(0);
    let last_refresh_display = if last_refresh > 0 {
        format_time_diff(now_millis.saturating_sub(last_refresh).max(0) as u64)
    } else {
        "never".to_string()
    };

    let mut clusters = Vec::new();
    if let Some(arr) = payload.get("clusters").and_then(|d| d.as_array()) {
        for item in arr {
            if let Some(obj) = item.as_object() {
                clusters.push(ClusterStatusView {
                    cluster_id: obj.get("clusterId").and_then(|v| v.as_i64()).unwrap_or(0),
                    cluster_name: obj
                        .get("clusterName")
                        .and_then(|v| v.as_str())
                        .unwrap_or("")
                        .to_string(),
                    auditor: obj.get("auditor").and_then(|v| v.as_str()).unwrap_or("").to_string(),
                    autorecovery_enabled: obj
                        .get("autorecoveryEnabled")
                        .and_then(|v| v.as_bool())
                        .unwrap_or(false),
                    lost_bookie_recovery_delay: obj
                        .get("lostBookieRecoveryDelay")
                        .and_then(|v| v.as_i64())
                        .unwrap_or(0),
                    layout_format_version: obj
                        .get("layoutFormatVersion")
                        .and_then(|v| v.as_i64())
                        .unwrap_or(0),
                    layout_manager_factory_class: obj
                        .get("layoutManagerFactoryClass")
                        .and_then(|v| v.as_str())
                        .unwrap_or("")
                        .to_string(),
                    layout_manager_version: obj
                        .get("layoutManagerVersion")
                        .and_then(|v| v.as_i64())
                        .unwrap_or(0),
                });
            }
        }
    }

    SystemStatusView {
        status: payload
            .get("status")
            .and_then(|v| v.as_str())
            .unwrap_or("UNKNOWN")
            .to_string(),
        last_refresh_display,
        clusters,
    }
}
