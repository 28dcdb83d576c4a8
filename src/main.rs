use axum::{routing::get, Extension, Router};
use scp_catalog::catalog::handlers::{
    handle_get_images, handle_get_scp, handle_get_tags, handle_health,
};
use scp_catalog::catalog::loader::load_catalog;
use scp_catalog::query::handlers::{
    handle_get_series, handle_list_scps, handle_search, handle_search_by_tag,
};
use scp_catalog::stats::handlers::{handle_list_tags, handle_stats};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

const DEFAULT_BIND: &str = "0.0.0.0:3000";
const DEFAULT_DATA: &str = "database.json";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mut bind_addr: SocketAddr = DEFAULT_BIND.parse()?;
    let mut data_path = PathBuf::from(DEFAULT_DATA);

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--bind" if i + 1 < args.len() => {
                bind_addr = args[i + 1].parse()?;
                i += 2;
            }
            "--data" if i + 1 < args.len() => {
                data_path = PathBuf::from(&args[i + 1]);
                i += 2;
            }
            "--help" | "-h" => {
                eprintln!("Usage: {} [--bind <addr:port>] [--data <file>]", args[0]);
                eprintln!("Defaults: --bind {DEFAULT_BIND} --data {DEFAULT_DATA}");
                std::process::exit(0);
            }
            _ => {
                i += 1;
            }
        }
    }

    // 1. Load the dataset once; queries only ever see this frozen snapshot.
    let catalog = Arc::new(load_catalog(&data_path));
    if catalog.is_loaded() {
        tracing::info!(
            "Loaded {} SCP entries from {}",
            catalog.len(),
            data_path.display()
        );
    } else {
        tracing::warn!(
            "No dataset loaded from {}, serving empty catalog",
            data_path.display()
        );
    }

    // 2. HTTP Router:
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/api/scp/:id", get(handle_get_scp))
        .route("/api/scp/:id/images", get(handle_get_images))
        .route("/api/scp/:id/tags", get(handle_get_tags))
        .route("/api/scps", get(handle_list_scps))
        .route("/api/search", get(handle_search))
        .route("/api/series/:series", get(handle_get_series))
        .route("/api/stats", get(handle_stats))
        .route("/api/tags", get(handle_list_tags))
        .route("/api/tags/search", get(handle_search_by_tag))
        .route("/health", get(handle_health))
        .layer(Extension(catalog))
        .layer(cors);

    // 3. Start HTTP server:
    tracing::info!("HTTP server listening on {}", bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
