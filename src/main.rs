use std::net::SocketAddr;
use std::process;

use clap::{Parser, Subcommand};
use comfy_table::{modifiers, presets, ContentArrangement, Table};
use terminal_size::{terminal_size, Width};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use bkvm::api::{self, ApiClient};
use bkvm::config::{self, DEFAULT_HOST, DEFAULT_PORT};
use bkvm::models::AppState;
use bkvm::routes::build_router;
use bkvm::session::{SessionStore, TokenFile};

async fn build_state_from_env(env_file: Option<&str>) -> AppState {
    config::load_env_file(env_file);
    let api = ApiClient::new(&config::get_api_base_url());
    let storage = TokenFile::new(config::get_session_file());
    let session = SessionStore::restore(storage, &api);
    AppState::new(api, session)
}

async fn start_server(state: AppState, host: &str, port: u16) {
    let addr: SocketAddr = match format!("{}:{}", host, port).parse() {
        Ok(a) => a,
        Err(e) => {
            tracing::error!(%e, "Invalid host/port format");
            eprintln!("{}: {}", yansi::Paint::red("Invalid host/port format"), e);
            process::exit(1);
        }
    };
    let app = build_router(state);
    tracing::info!(%addr, "Starting bkvm dashboard server");
    println!(
        "{} {}",
        yansi::Paint::new("Dashboard running on").green(),
        yansi::Paint::new(format!("http://{}", addr)).cyan()
    );
    match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => {
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!(%e, "Server encountered an error while running");
                eprintln!("{}: {}", yansi::Paint::new("Server error").red(), e);
                process::exit(1);
            }
        }
        Err(e) => {
            eprintln!(
                "{}: {}\n{}",
                yansi::Paint::new(format!("Failed to bind to {}", addr)).red(),
                e,
                yansi::Paint::new("Please stop any process using this port, or start the server with a different --port value.").yellow()
            );
            process::exit(1);
        }
    }
}

fn new_table(headers: Vec<&str>) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL);
    table.apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    if let Some((Width(w), _)) = terminal_size() {
        table.set_width(w - 4);
    }
    table.set_header(headers);
    table
}

fn exit_api_error(e: api::ApiError) -> ! {
    if e.is_unauthorized() {
        eprintln!(
            "{}",
            yansi::Paint::new("Not authenticated: log in through the dashboard first").red()
        );
    } else {
        eprintln!("{}: {}", yansi::Paint::new("API error").red(), e);
    }
    process::exit(1);
}

#[derive(Parser)]
#[command(
    name = "bkvm",
    author,
    version,
    about = "Administrative dashboard for Apache BookKeeper clusters",
    long_about = r#"bkvm — browse bookies, ledgers and clusters through the external
management service's REST API.

The dashboard is a thin presentation layer: it holds no bookkeeping state of
its own. Point BKVM_API_URL at the management service (via environment or an
--env-file) and start the server, or use the read-only list commands below.

Examples:
  1) Run the dashboard (dev):
      cargo run -- serve --host 127.0.0.1 --port 4500
  2) Inspect the cluster from the terminal:
      bkvm bookies
      bkvm ledgers --bookie bk-1:3181
"#,
    after_help = "Use `bkvm <subcommand> --help` to get subcommand specific options."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    /// Disable colorized output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the dashboard server
    Serve {
        /// Host to bind to
        #[arg(long, default_value_t = String::from(DEFAULT_HOST))]
        host: String,
        /// Port to bind to
        #[arg(long, default_value_t = DEFAULT_PORT)]
        port: u16,
        /// Path to .env file
        #[arg(long)]
        env_file: Option<String>,
    },
    /// Validate configuration and management-service connectivity
    CheckConfig {
        env_file: Option<String>,
    },
    /// List storage nodes
    Bookies,
    /// List ledgers (optionally scoped to one bookie)
    Ledgers {
        /// Cluster id to filter by
        #[arg(long)]
        cluster: Option<String>,
        /// Bookie id to filter by
        #[arg(long)]
        bookie: Option<String>,
    },
    /// List registered clusters
    Clusters,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.no_color {
        yansi::whenever(yansi::Condition::NEVER);
    }

    // No subcommand serves the dashboard with defaults
    if cli.command.is_none() {
        let state = build_state_from_env(None).await;
        start_server(state, DEFAULT_HOST, DEFAULT_PORT).await;
        return;
    }
    match cli.command.unwrap() {
        Commands::Serve { host, port, env_file } => {
            let state = build_state_from_env(env_file.as_deref()).await;
            start_server(state, &host, port).await;
        }
        Commands::CheckConfig { env_file } => {
            let state = build_state_from_env(env_file.as_deref()).await;
            match api::cluster_count(&state.api).await {
                Ok(count) => {
                    println!(
                        "{} ({} clusters registered)",
                        yansi::Paint::new("Configuration looks valid").green(),
                        count
                    );
                }
                Err(e) => {
                    eprintln!(
                        "{}: {}",
                        yansi::Paint::new("Configuration appears invalid").red(),
                        e
                    );
                    process::exit(1);
                }
            }
        }
        Commands::Bookies => {
            let state = build_state_from_env(None).await;
            match api::load_bookies(&state.api).await {
                Ok(bookies) => {
                    let mut table = new_table(vec![
                        "Bookie", "Cluster", "State", "Free", "Total", "Used %", "Last scan",
                    ]);
                    for b in &bookies {
                        table.add_row(vec![
                            b.bookie_id.clone(),
                            b.cluster_name.clone(),
                            b.state.clone(),
                            b.free_disk_display.clone(),
                            b.total_disk_display.clone(),
                            b.used_percent_display.clone(),
                            b.last_scan_display.clone(),
                        ]);
                    }
                    println!("\n{table}\n");
                }
                Err(e) => exit_api_error(e),
            }
        }
        Commands::Ledgers { cluster, bookie } => {
            let state = build_state_from_env(None).await;
            match api::load_ledgers(&state.api, cluster.as_deref(), bookie.as_deref()).await {
                Ok(result) => {
                    let mut table = new_table(vec![
                        "Ledger", "Size", "Age", "Ensemble", "WQ", "AQ", "Closed",
                    ]);
                    for l in &result.ledgers {
                        table.add_row(vec![
                            l.ledger_id.to_string(),
                            l.size_display.clone(),
                            l.age_display.clone(),
                            l.ensemble_size.to_string(),
                            l.write_quorum_size.to_string(),
                            l.ack_quorum_size.to_string(),
                            l.closed.to_string(),
                        ]);
                    }
                    println!("\n{table}\n");
                    println!(
                        "{} ledgers, {} total",
                        result.total_ledgers,
                        bkvm::utils::format_bytes(result.total_size, 2)
                    );
                }
                Err(e) => exit_api_error(e),
            }
        }
        Commands::Clusters => {
            let state = build_state_from_env(None).await;
            match api::load_clusters(&state.api).await {
                Ok(clusters) => {
                    let mut table = new_table(vec!["Name", "Metadata service URI"]);
                    for c in &clusters {
                        table.add_row(vec![c.name.clone(), c.metadata_service_uri.clone()]);
                    }
                    println!("\n{table}\n");
                }
                Err(e) => exit_api_error(e),
            }
        }
    }
}
