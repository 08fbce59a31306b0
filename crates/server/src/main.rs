//! Campus server entry point.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use campus_api::{AppState, router as api_router};
use campus_common::Config;
use campus_core::{AnnouncementService, AuthService};
use campus_db::repositories::{AnnouncementRepository, TeacherRepository};
use campus_db::{DocumentStore, MemoryStore};
use tokio::signal;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Waits for a shutdown signal (SIGINT or SIGTERM).
///
/// On Unix systems, this listens for both SIGINT (Ctrl+C) and SIGTERM.
/// On Windows, this only listens for Ctrl+C.
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received SIGINT, initiating graceful shutdown...");
        },
        () = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown...");
        },
    }
}

/// Seed teacher accounts from configuration.
async fn seed_teachers(config: &Config, teacher_repo: &TeacherRepository) {
    for teacher in &config.seed.teachers {
        match teacher_repo
            .create(teacher.username.clone(), teacher.display_name.clone())
            .await
        {
            Ok(seeded) => info!(username = %seeded.username, "Seeded teacher account"),
            Err(e) => warn!(username = %teacher.username, error = %e, "Failed to seed teacher"),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "campus=debug,tower_http=debug".into()),
        )
        .init();

    info!("Starting campus server...");

    // Load configuration
    let config = Config::load()?;

    // The document store ships in-memory; swapping backends means swapping
    // this one constructor behind the trait object.
    let store: Arc<dyn DocumentStore> = Arc::new(MemoryStore::new());
    info!("Initialized in-memory document store");

    // Initialize repositories
    let teacher_repo = TeacherRepository::new(Arc::clone(&store));
    let announcement_repo = AnnouncementRepository::new(Arc::clone(&store));

    // Seed principal records
    seed_teachers(&config, &teacher_repo).await;

    // Initialize services
    let announcement_service = AnnouncementService::new(announcement_repo);
    let auth_service = AuthService::new(teacher_repo);

    // Create app state
    let state = AppState {
        announcement_service,
        auth_service,
    };

    // Build router
    let app = Router::new()
        .merge(api_router())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state);

    // Start server with graceful shutdown
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}
