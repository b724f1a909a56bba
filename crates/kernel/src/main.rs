//! sitenav
//!
//! Serves sidebar resolution over HTTP, or resolves a snapshot file once.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use axum::http::{HeaderName, HeaderValue, Method, header};
use clap::{Parser, Subcommand};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use sitenav_kernel::features::FeatureFlags;
use sitenav_kernel::support_session::SUPPORT_SESSION_HEADER;
use sitenav_kernel::{AppState, Config, SidebarSnapshot, routes};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP server (default).
    Serve,

    /// Resolve a JSON or YAML snapshot file and print the menu as JSON.
    Resolve {
        /// Snapshot file.
        snapshot: PathBuf,

        /// Override the configured feature flags (comma-separated).
        #[arg(long)]
        features: Option<String>,

        /// Pretty-print the output.
        #[arg(long)]
        pretty: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_tracing();

    let args = Args::parse();

    let config = Config::from_env().context("failed to load configuration")?;
    info!(
        port = config.port,
        features = config.features.len(),
        "Configuration loaded"
    );

    match args.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(config).await,
        Command::Resolve {
            snapshot,
            features,
            pretty,
        } => resolve(&config, &snapshot, features.as_deref(), pretty),
    }
}

async fn serve(config: Config) -> Result<()> {
    let cors = build_cors_layer(&config);
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));

    // Middleware layers (last added = first executed in request flow):
    // TraceLayer → CORS → support session → routes
    let app = routes::app(AppState::new(config))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("failed to bind to address")?;

    info!(%addr, "Server listening");

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}

fn resolve(
    config: &Config,
    path: &std::path::Path,
    features: Option<&str>,
    pretty: bool,
) -> Result<()> {
    let features = features.map_or_else(|| config.features.clone(), FeatureFlags::parse_list);

    let snapshot = SidebarSnapshot::load(path)
        .with_context(|| format!("failed to load snapshot {}", path.display()))?;
    let items = snapshot
        .resolve(&features)
        .context("failed to assemble menu catalog")?;

    let output = if pretty {
        serde_json::to_string_pretty(&items)
    } else {
        serde_json::to_string(&items)
    }
    .context("failed to serialize menu")?;

    println!("{output}");
    Ok(())
}

fn build_cors_layer(config: &Config) -> CorsLayer {
    let methods = [Method::GET, Method::POST, Method::OPTIONS];
    let support_session = HeaderName::from_static(SUPPORT_SESSION_HEADER);
    let headers = [header::CONTENT_TYPE, support_session.clone()];

    if config.cors_allowed_origins.len() == 1 && config.cors_allowed_origins[0] == "*" {
        CorsLayer::new()
            .allow_origin(tower_http::cors::Any)
            .allow_methods(methods)
            .allow_headers(headers)
            .expose_headers([support_session])
    } else {
        let origins: Vec<HeaderValue> = config
            .cors_allowed_origins
            .iter()
            .filter_map(|o| match o.parse::<HeaderValue>() {
                Ok(v) => Some(v),
                Err(_) => {
                    warn!(origin = %o, "ignoring unparseable CORS origin");
                    None
                }
            })
            .collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(methods)
            .allow_headers(headers)
            .expose_headers([support_session])
            .allow_credentials(true)
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug"));

    // Logs go to stderr so `resolve` output stays clean on stdout.
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
