//! # Hangout API
//!
//! Reference HTTP backend for the hangout planner. It accepts the calendar
//! and time slot requests the planner submits and keeps them in memory.
//!
//! ## Architecture
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Validate requests and talk to the store
//! - **Middleware**: Password hashing and error to HTTP mapping
//! - **Store**: In-memory calendars and their slots
//! - **Config**: Environment-driven server settings

/// Configuration module for API settings
pub mod config;
/// Request handlers
pub mod handlers;
/// Authentication helpers and error handling
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;
/// In-memory calendar storage
pub mod store;

use std::{sync::Arc, time::Duration};

use axum::{
    http::{header, HeaderValue, Method},
    Router,
};
use eyre::Result;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::FmtSubscriber;

use crate::store::CalendarStore;

/// Shared application state that is accessible to all request handlers
#[derive(Debug, Default)]
pub struct ApiState {
    /// Calendars created since the server started
    pub store: CalendarStore,
}

/// Builds the application router with all routes attached to `state`
pub fn app(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Calendar and time slot endpoints
        .merge(routes::calendar::routes())
        .with_state(state)
}

/// Starts the API server with the provided configuration
///
/// Sets up logging, CORS, request tracing and timeouts, then serves until
/// the process is stopped.
pub async fn start_server(config: config::ApiConfig) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let state = Arc::new(ApiState::default());
    let app = app(state);

    // Apply CORS configuration if origins are specified
    let app = match &config.cors_origins {
        Some(origins) => app.layer(cors_layer(origins)),
        None => app,
    };

    let app = app.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout))),
    );

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin {:?}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .allow_origin(allowed)
        .allow_credentials(true)
}
