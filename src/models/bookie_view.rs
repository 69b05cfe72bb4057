/// Display model for a single storage node as rendered in the bookies table.
#[derive(Clone, Debug)]
pub struct BookieView {
    pub bookie_id: String,
    pub description: String,
    pub cluster_id: i64,
    pub cluster_name: String,
    pub state: String,
    pub ok: bool,
    pub free_disk_space: u64,
    pub total_disk_space: u64,
    pub free_disk_display: String,
    pub total_disk_display: String,
    pub used_percent_display: String,
    pub last_scan_display: String,
}
