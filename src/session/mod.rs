pub mod cluster_count;
pub mod store;
pub mod token_file;

pub use cluster_count::ClusterCountCache;
pub use store::{AuthStatus, SessionStore, SESSION_TOKEN};
pub use token_file::TokenFile;
