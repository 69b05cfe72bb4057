/// Display model for one ledger row.
#[derive(Clone, Debug)]
pub struct LedgerView {
    pub ledger_id: i64,
    pub description: String,
    pub size: u64,
    pub size_display: String,
    pub age_display: String,
    pub ensemble_size: i64,
    pub write_quorum_size: i64,
    pub ack_quorum_size: i64,
    pub closed: bool,
}
