use askama::Template;

use crate::models::{BookieView, ClusterView, LedgerView, SystemStatusView};

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub logged_in: bool,
    pub show_drawer: bool,
    pub api_hostname: String,
    pub title: String,
    pub error: Option<String>,
}

#[derive(Template)]
#[template(path = "bookies.html")]
pub struct BookiesTemplate {
    pub logged_in: bool,
    pub show_drawer: bool,
    pub api_hostname: String,
    pub title: String,
    pub bookies: Vec<BookieView>,
}

#[derive(Template)]
#[template(path = "ledgers.html")]
pub struct LedgersTemplate {
    pub logged_in: bool,
    pub show_drawer: bool,
    pub api_hostname: String,
    pub title: String,
    pub ledgers: Vec<LedgerView>,
    pub total_ledgers: u64,
    pub total_size_display: String,
}

#[derive(Template)]
#[template(path = "clusters.html")]
pub struct ClustersTemplate {
    pub logged_in: bool,
    pub show_drawer: bool,
    pub api_hostname: String,
    pub title: String,
    pub clusters: Vec<ClusterView>,
    pub error: Option<String>,
}

#[derive(Template)]
#[template(path = "systemstatus.html")]
pub struct SystemStatusTemplate {
    pub logged_in: bool,
    pub show_drawer: bool,
    pub api_hostname: String,
    pub title: String,
    pub status: SystemStatusView,
}

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub logged_in: bool,
    pub show_drawer: bool,
    pub api_hostname: String,
    pub title: String,
    pub code: String,
}
