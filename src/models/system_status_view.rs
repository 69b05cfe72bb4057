/// Cluster-wide configuration snapshot shown on the system status page.
#[derive(Clone, Debug)]
pub struct ClusterStatusView {
    pub cluster_id: i64,
    pub cluster_name: String,
    pub auditor: String,
    pub autorecovery_enabled: bool,
    pub lost_bookie_recovery_delay: i64,
    pub layout_format_version: i64,
    pub layout_manager_factory_class: String,
    pub layout_manager_version: i64,
}

#[derive(Clone, Debug)]
pub struct SystemStatusView {
    pub status: String,
    pub last_refresh_display: String,
    pub clusters: Vec<ClusterStatusView>,
}
