pub mod handlers;
pub mod routes;
pub mod shared;

use std::path::PathBuf;
use std::sync::Arc;

/// Used when RUST_LOG is not set.
const DEFAULT_LOG_FILTER: &str = "info";

/// Shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    pub catalog_path: Arc<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use axum::body::Body;
    use axum::http::{Method, Request};
    use axum::middleware::{self, Next};
    use axum::response::Response;
    use std::net::SocketAddr;
    use tokio::net::TcpListener;
    use tower_http::cors::{Any, CorsLayer};
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let log_dir = std::path::Path::new("target").join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join("host.log"))?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Arc::new(log_file))
                .with_ansi(false),
        )
        .init();

    async fn request_logger(req: Request<Body>, next: Next) -> Response {
        let start = std::time::Instant::now();
        let method = req.method().clone();
        let path = req.uri().path().to_string();

        let response = next.run(req).await;

        let status = response.status().as_u16();
        let elapsed = start.elapsed().as_millis();
        if status < 400 {
            tracing::info!("{:>5}ms | {} {:>6} {}", elapsed, status, method, path);
        } else {
            tracing::warn!("{:>5}ms | {} {:>6} {}", elapsed, status, method, path);
        }
        response
    }

    let config = shared::config::load_config()?;
    let catalog_path = shared::config::resolve_path(&config.catalog.path);
    let static_dir = shared::config::resolve_path(&config.server.static_dir);

    shared::catalog::report(&catalog_path);
    if !static_dir.exists() {
        tracing::warn!(
            "Static dir {} does not exist; build the frontend with trunk first",
            static_dir.display()
        );
    }

    let state = AppState {
        catalog_path: Arc::new(catalog_path),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS]);

    let app = routes::configure_routes(state, &static_dir)
        .layer(middleware::from_fn(request_logger))
        .layer(cors);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;

    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Port {} is already in use. Please ensure no other process is using this port.",
                    config.server.port
                );
            } else {
                tracing::error!("Failed to bind to port {}. Error: {}", config.server.port, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
