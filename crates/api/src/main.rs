//! Épingle API server

use axum::{routing::delete, routing::get, routing::post, routing::put, Router};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

mod error;
mod routes;
mod state;

use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("engine=debug".parse()?)
                .add_directive("api=debug".parse()?),
        )
        .init();

    info!("📌 Starting Épingle API");

    // Load configuration
    let config = common::Config::from_env();

    // Connect to database
    let pool = db::create_pool(&config.database_url).await?;

    // Run migrations
    db::run_migrations(&pool).await?;

    // Create app state; this spawns the background refresh worker
    let state = Arc::new(AppState::new(config.clone(), pool));

    // Build router
    let app = Router::new()
        .route("/health", get(routes::health::health))
        .route(
            "/api/pins",
            get(routes::pins::list).post(routes::pins::create),
        )
        .route(
            "/api/pins/:id",
            get(routes::pins::get).delete(routes::pins::delete),
        )
        .route("/api/pins/:id/comments", post(routes::pins::comment))
        .route("/api/comments/:id", delete(routes::pins::delete_comment))
        .route("/api/pins/:id/likes", put(routes::pins::like))
        .route("/api/pins/:id/likes/:email", delete(routes::pins::unlike))
        .route("/api/pins/:id/saves", put(routes::pins::save))
        .route("/api/pins/:id/saves/:email", delete(routes::pins::unsave))
        .route(
            "/api/users",
            get(routes::users::list).post(routes::users::upsert),
        )
        .route("/api/users/:email", get(routes::users::get))
        .route("/api/users/:email/connections", post(routes::users::connect))
        .route("/api/users/:email/secret", post(routes::users::secret))
        .route(
            "/api/users/:email/notifications",
            get(routes::users::notifications),
        )
        .route(
            "/api/users/:email/notifications/seen",
            post(routes::users::mark_notifications_seen),
        )
        .route(
            "/api/teams",
            get(routes::teams::list).post(routes::teams::create),
        )
        .route("/api/teams/leaderboard", get(routes::leaderboard::teams))
        .route(
            "/api/teams/:name",
            get(routes::teams::get).delete(routes::teams::delete),
        )
        .route("/api/teams/:name/members", post(routes::teams::add_member))
        .route(
            "/api/teams/:name/members/:email",
            delete(routes::teams::remove_member),
        )
        .route("/api/leaderboard", get(routes::leaderboard::users))
        .route("/api/recalculate", post(routes::recalc::trigger))
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = format!("{}:{}", config.host, config.port);
    info!("🚀 Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
