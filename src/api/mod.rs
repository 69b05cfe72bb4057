pub mod auth;
pub mod bookies;
pub mod client;
pub mod clusters;
pub mod error;
pub mod ledgers;
pub mod system;

pub use auth::{login, logout, LOGIN_ENDPOINT, LOGOUT_ENDPOINT};
pub use bookies::load_bookies;
pub use client::ApiClient;
pub use clusters::{add_cluster, cluster_count, delete_cluster, load_clusters};
pub use error::ApiError;
pub use ledgers::{load_ledgers, LedgersResult};
pub use system::{load_system_status, refresh_system_status};
