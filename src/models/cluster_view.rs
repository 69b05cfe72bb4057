/// Display model for a registered cluster.
#[derive(Clone, Debug)]
pub struct ClusterView {
    pub name: String,
    pub metadata_service_uri: String,
}
