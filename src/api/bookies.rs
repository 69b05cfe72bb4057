use super::client::ApiClient;
use super::error::ApiError;
use crate::models::BookieView;
use crate::utils::{format_bytes, format_percent, format_time_diff};

/// Fetch all storage nodes and derive the display fields the bookies table
/// renders (disk sizes, usage percentage, last scan age).
pub async fn load_bookies(api: &ApiClient) -> Result<Vec<BookieView>, ApiError> {
    let payload = api.get_value("api/bookie/all", None).await?;
    let now_millis = chrono::Utc::now().timestamp_millis();

    let mut out = Vec::new();
    if let Some(arr) = payload.get("bookies").and_then(|d| d.as_array()) {
        for item in arr {
            if let Some(obj) = item.as_object() {
                let state = obj
                    .get("state")
                    .and_then(|v| v.as_str())
                    .unwrap_or("down")
                    .to_string();
                let free = obj.get("freeDiskSpace").and_then(|v| v.as_u64()).unwrap_or(0);
                let total = obj.get("totalDiskSpace").and_then(|v| v.as_u64()).unwrap_or(0);
                let used = total.saturating_sub(free);
                let last_scan = obj.get("lastScan").and_then(|v| v.as_i64()).unwrap_or(0);
                let last_scan_display = if last_scan > 0 {
                    format_time_diff(now_millis.saturating_sub(last_scan).max(0) as u64)
                } else {
                    "never".to_string()
                };

                out.push(BookieView {
                    bookie_id: obj
                        .get("bookieId")
                        .and_then(|v| v.as_str())
                        .unwrap_or("")
                        .to_string(),
                    description: obj
                        .get("description")
                        .and_then(|v| v.as_str())
                        .unwrap_or("")
                        .to_string(),
                    cluster_id: obj.get("clusterId").and_then(|v| v.as_i64()).unwrap_or(0),
                    cluster_name: obj
                        .get("clusterName")
                        .and_then(|v| v.as_str())
                        .unwrap_or("")
                        .to_string(),
                    ok: state == "available",
                    state,
                    free_disk_space: free,
                    total_disk_space: total,
                    free_disk_display: format_bytes(free, 2),
                    total_disk_display: format_bytes(total, 2),
                    used_percent_display: format_percent(used as f64, total as f64, 2),
                    last_scan_display,
                });
            }
        }
    }
    Ok(out)
}
