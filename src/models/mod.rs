pub mod app_state;
pub mod bookie_view;
pub mod cluster_view;
pub mod credentials;
pub mod ledger_view;
pub mod system_status_view;

pub use app_state::AppState;
pub use bookie_view::BookieView;
pub use cluster_view::ClusterView;
pub use credentials::Credentials;
pub use ledger_view::LedgerView;
pub use system_status_view::{ClusterStatusView, SystemStatusView};
