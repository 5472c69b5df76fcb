//! Catalog server entry point.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use catalog_api::{AppState, router as api_router};
use catalog_common::{Config, FileStoreRef, LocalFileStore};
use catalog_core::{CastMemberService, CategoryService, GenreService, VideoService};
use catalog_db::repositories::{
    CastMemberRepository, CategoryRepository, GenreRepository, VideoRepository,
};
use tokio::signal;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use tracing::info;
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

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "catalog=info,tower_http=info".into()),
        )
        .init();

    let config = Config::load()?;

    info!("Connecting to database...");
    let db = Arc::new(catalog_db::init(&config).await?);
    catalog_db::migrate(&db).await?;
    info!("Database ready");

    let store: FileStoreRef = Arc::new(LocalFileStore::new(
        config.storage.base_path.clone(),
        format!(
            "{}{}",
            config.server.url.trim_end_matches('/'),
            config.storage.base_url
        ),
    ));

    let category_repo = CategoryRepository::new(Arc::clone(&db));
    let genre_repo = GenreRepository::new(Arc::clone(&db));
    let cast_member_repo = CastMemberRepository::new(Arc::clone(&db));
    let video_repo = VideoRepository::new(Arc::clone(&db));

    let state = AppState {
        category_service: CategoryService::new(category_repo.clone()),
        genre_service: GenreService::new(genre_repo.clone()),
        cast_member_service: CastMemberService::new(cast_member_repo),
        video_service: VideoService::new(
            Arc::clone(&db),
            video_repo,
            category_repo,
            genre_repo,
            store,
        ),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .nest("/api", api_router())
        .nest_service(
            config.storage.base_url.as_str(),
            ServeDir::new(&config.storage.base_path),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}
