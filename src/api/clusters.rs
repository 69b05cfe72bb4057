use super::client::ApiClient;
use super::error::ApiError;
use crate::models::ClusterView;

pub const CLUSTER_COUNT_ENDPOINT: &str = "api/cluster/count";

/// Number of clusters registered with the management service. The endpoint
/// answers with a bare integer body.
pub async fn cluster_count(api: &ApiClient) -> Result<u64, ApiError> {
    let text = api.get_text(CLUSTER_COUNT_ENDPOINT).await?;
    text.trim()
        .parse::<u64>()
        .map_err(|e| ApiError::UnexpectedPayload {
            endpoint: CLUSTER_COUNT_ENDPOINT.to_string(),
            detail: e.to_string(),
        })
}

pub async fn load_clusters(api: &ApiClient) -> Result<Vec<ClusterView>, ApiError> {
    let payload = api.get_value("api/cluster/all", None).await?;
    let mut out = Vec::new();
    if let Some(arr) = payload.as_array() {
        for item in arr {
            if let Some(obj) = item.as_object() {
                out.push(ClusterView {
                    name: obj.get("name").and_then(|v| v.as_str()).unwrap_or("").to_string(),
                    metadata_service_uri: obj
                        .get("metadataServiceUri")
                        .and_then(|v| v.as_str())
                        .unwrap_or("")
                        .to_string(),
                });
            }
        }
    }
    Ok(out)
}

pub async fn add_cluster(
    api: &ApiClient,
    name: &str,
    metadata_service_uri: &str,
) -> Result<(), ApiError> {
    let body = serde_json::json!({
        "name": name,
        "metadataServiceUri": metadata_service_uri,
    });
    api.post_value("api/cluster/add", Some(body)).await.map(|_| ())
}

pub async fn delete_cluster(api: &ApiClient, name: &str) -> Result<(), ApiError> {
    api.post_value(&format!("api/cluster/delete/{}", name), None)
        .await
        .map(|_| ())
}
