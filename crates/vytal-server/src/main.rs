//! HTTP server entry point and Axum router setup.
//!
//! Initializes the server state (demo profile, response provider), configures
//! routes and CORS for the dashboard frontend, and starts the Axum server on
//! port 8080.

mod dto;
mod error;
mod handlers;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::body::Body;
use axum::http::{HeaderValue, Request, Response};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use vytal_assistant::{CannedProvider, OpenAiProvider, ResponseProvider};
use vytal_core::{demo_profile, UserContext};

const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Dashboard frontend origins allowed to call the API with credentials.
const ALLOWED_ORIGINS: [&str; 2] = ["http://localhost:3000", "http://127.0.0.1:3000"];

/// Shared server state accessible from all handlers.
pub struct ServerState {
    pub profile: UserContext,
    pub provider: Arc<dyn ResponseProvider>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".parse().unwrap()),
        )
        .compact()
        .init();

    let state = Arc::new(init_server_state());
    let app = app(state);

    let port = std::env::var("PORT").unwrap_or_else(|_| "8080".into());
    let addr = format!("0.0.0.0:{port}");
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Builds the router with CORS and request tracing.
fn app(state: Arc<ServerState>) -> Router {
    // Credentialed CORS cannot use wildcards, so methods and headers are
    // mirrored back for the listed origins.
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(
            ALLOWED_ORIGINS.map(HeaderValue::from_static),
        ))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request<Body>| {
            tracing::info_span!(
                "request",
                method = %req.method(),
                uri = %req.uri(),
                version = ?req.version(),
            )
        })
        .on_response(|res: &Response<Body>, latency: Duration, _span: &tracing::Span| {
            info!(
                latency = %format!("{} ms", latency.as_millis()),
                status = %res.status().as_u16(),
                "finished processing request"
            );
        });

    let logged_routes = Router::new()
        .route("/api/v1/chat/message", post(handlers::chat::message))
        .route("/api/v1/user/profile", get(handlers::profile::get))
        .route("/api/v1/actions/{action_id}/log", post(handlers::actions::log))
        .route("/api/v1/progress/summary", get(handlers::progress::summary))
        .layer(trace_layer);

    Router::new()
        .merge(logged_routes)
        .route("/", get(handlers::root))
        .route("/api/health", get(handlers::health))
        .layer(cors)
        .with_state(state)
}

/// Initializes the server state: selects the response provider once and
/// builds the immutable demo profile handlers read from.
fn init_server_state() -> ServerState {
    let provider: Arc<dyn ResponseProvider> = match std::env::var("OPENAI_API_KEY") {
        Ok(key) if !key.is_empty() => {
            let model =
                std::env::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.into());
            info!("OpenAI integration active (model: {})", model);
            Arc::new(OpenAiProvider::new(&model))
        }
        _ => {
            warn!("OPENAI_API_KEY not set; serving canned replies");
            Arc::new(CannedProvider)
        }
    };

    ServerState {
        profile: demo_profile(),
        provider,
    }
}
