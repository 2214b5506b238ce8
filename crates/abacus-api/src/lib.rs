#![deny(warnings)]
//! Abacus HTTP API
//!
//! A small axum service in front of the arithmetic engine. Front ends post two
//! raw operands and an operation tag and receive either the rendered result or
//! the engine's message.

use std::sync::Arc;
use std::time::Duration;

use abacus_calculator::Calculator;
use axum::{
    Router,
    routing::{get, post},
};
use chrono::{DateTime, Utc};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};
use tracing::info;

pub mod cli;
pub mod config;
pub mod error;
pub mod handlers;
pub mod tracing_setup;

use crate::config::AbacusConfig;

/// Shared, immutable application state.
#[derive(Debug)]
pub struct AppState {
    pub start_time: DateTime<Utc>,
    pub calculator: Calculator,
}

impl AppState {
    pub fn new() -> Self {
        Self { start_time: Utc::now(), calculator: Calculator::new() }
    }

    pub fn elapsed(&self) -> Duration {
        (Utc::now() - self.start_time).to_std().unwrap_or_default()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds the router with tracing, body limit and (optionally) CORS layers.
pub fn create_app(config: &AbacusConfig) -> Router {
    let state = Arc::new(AppState::new());

    let api = Router::new()
        .route("/calculate", post(handlers::calculate))
        .route("/operations", get(handlers::operations));

    let mut app = Router::new()
        .route("/health", get(handlers::health))
        .nest("/api/v1", api)
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(RequestBodyLimitLayer::new(config.limits.max_body_size_bytes())),
        );

    if config.server.enable_cors {
        app = app.layer(CorsLayer::permissive());
    }

    info!(
        max_body_size_kb = config.limits.max_body_size_kb,
        cors = config.server.enable_cors,
        "Router configured"
    );
    app
}
