use std::net::SocketAddr;
use std::sync::Arc;

use tokio::signal;

use mergington::errors::Report;
use mergington::log;

mod config;
mod error;
mod handlers;
mod services;

use config::Config;
use services::ActivityServiceInMemory;

/// Shared state handed to every handler.
pub struct AppState {
    pub activities: ActivityServiceInMemory,
    pub started_at: chrono::DateTime<chrono::Utc>,
}

impl AppState {
    pub fn new(activities: ActivityServiceInMemory) -> Self {
        Self {
            activities,
            started_at: chrono::Utc::now(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Report> {
    // Setup logging
    mergington::log::setup()?;

    let config = Config::load()?;

    // Seed the catalog and setup the routes
    let state = Arc::new(AppState::new(ActivityServiceInMemory::new()));
    let app = routes::setup_routes(state, &config);

    // Setup the server
    let addr = SocketAddr::new(config.host, config.port);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    log::info!("Starting server on http://{}", listener.local_addr()?);
    log::info!("Serving static files from {}", config.static_dir.display());
    log::info!("Press Ctrl+C to stop the server");

    // Start the server
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log::info!("Shutting down server");

    Ok(())
}

/// Wait for a shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            log::error!("Failed to install Ctrl+C handler: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                log::error!("Failed to install SIGTERM handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    log::info!("Signal received, starting graceful shutdown");
}

mod routes {
    use std::sync::Arc;

    use axum::{
        Router,
        http::{HeaderValue, Method, header},
        routing::{get, post},
    };
    use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

    use crate::{AppState, config::Config, handlers};

    fn cors() -> CorsLayer {
        let origins = if cfg!(debug_assertions) {
            let dev_ports = vec![3000, 5173, 8000, 8080];
            let mut allowed_origins = Vec::new();
            for port in dev_ports {
                allowed_origins.push(format!("http://localhost:{}", port));
                allowed_origins.push(format!("http://127.0.0.1:{}", port));
            }
            allowed_origins
        } else {
            // Production origins - add your domains here
            vec![]
        };

        CorsLayer::new()
            .allow_origin(
                origins
                    .iter()
                    .filter_map(|origin| HeaderValue::from_str(origin).ok())
                    .collect::<Vec<_>>(),
            )
            .allow_headers([header::CONTENT_TYPE])
            .allow_methods([Method::GET, Method::POST])
    }

    /// Setup the routes for the server and configure CORS and tracing
    pub fn setup_routes(state: Arc<AppState>, config: &Config) -> Router {
        Router::new()
            .route("/", get(handlers::activities::root))
            .route("/health", get(handlers::health::get))
            .route("/activities", get(handlers::activities::list))
            .route(
                "/activities/{activity_name}/signup",
                post(handlers::activities::signup),
            )
            .route(
                "/activities/{activity_name}/unregister",
                post(handlers::activities::unregister),
            )
            .nest_service("/static", ServeDir::new(&config.static_dir))
            .with_state(state)
            .layer(cors())
            .layer(TraceLayer::new_for_http())
    }

}
