//! Mission Server - relative-leg drone mission generator
//!
//! This binary serves the mission generation API:
//! - POST /api/generate (Litchi CSV) and POST /api/generate_kml (KML)
//! - GET /api/generate_point for single projections
//! - Health, info and encoder status endpoints

use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use mission_server::{server, AppState, ServiceConfig};

#[derive(Parser)]
#[command(name = "mission-server")]
#[command(about = "Converts relative flight legs into Litchi CSV and KML missions")]
struct Args {
    /// JSON configuration file (defaults apply to anything it omits)
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Interface to bind the HTTP server to
    #[arg(long)]
    host: Option<String>,

    /// HTTP server port (0 = auto-assign, default: 5000)
    #[arg(long)]
    http_port: Option<u16>,

    /// Lowest altitude any waypoint may be given, in meters
    #[arg(long)]
    min_altitude: Option<f64>,

    /// Enable verbose logging
    #[arg(long, short)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging
    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut config = match &args.config {
        Some(path) => {
            info!("Loading configuration from {}", path.display());
            ServiceConfig::from_file(path)?
        }
        None => ServiceConfig::default(),
    };
    if let Some(host) = args.host {
        config.http.host = host;
    }
    if let Some(port) = args.http_port {
        config.http.port = port;
    }
    if let Some(min_altitude) = args.min_altitude {
        config.resolver.min_altitude_m = min_altitude;
    }

    let state = Arc::new(AppState::new(&config)?);
    info!(
        "Resolver: earth radius {} m, launch altitude {} m, altitude floor {} m",
        config.resolver.earth_radius_m, config.resolver.launch_altitude_m, config.resolver.min_altitude_m
    );

    // Bind to requested port (0 = auto-assign)
    let listener = tokio::net::TcpListener::bind(config.http.bind_address()).await?;
    let actual_port = listener.local_addr()?.port();

    info!("═══════════════════════════════════════════════════════════");
    info!("  Mission server listening on http://127.0.0.1:{}", actual_port);
    info!("  CSV: POST http://127.0.0.1:{}/api/generate", actual_port);
    info!("  KML: POST http://127.0.0.1:{}/api/generate_kml", actual_port);
    info!("═══════════════════════════════════════════════════════════");

    let app = server::create_router(state);
    axum::serve(listener, app).await?;

    Ok(())
}
