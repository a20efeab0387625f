//! Warehouse API
//!
//! Request validation, partial-update merging and pre-write dependency checks
//! for a warehouse and inventory REST backend.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![allow(elided_lifetimes_in_paths)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

pub mod config;
pub mod dependency;
pub mod errors;
pub mod handlers;
pub mod merge;
pub mod middleware_helpers;
pub mod models;
pub mod repositories;
pub mod services;
pub mod tracing;
pub mod validation;

use axum::{extract::DefaultBodyLimit, extract::FromRef, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::config::AppConfig;
use crate::services::AppServices;
use crate::validation::Validator;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub validator: Validator,
    pub services: AppServices,
}

impl AppState {
    pub fn new(config: AppConfig, services: AppServices) -> Self {
        Self {
            validator: Validator::new(config.locale),
            config: Arc::new(config),
            services,
        }
    }

    /// Fresh in-memory storage, used by the binary and by tests.
    pub fn in_memory(config: AppConfig) -> Self {
        Self::new(config, AppServices::in_memory())
    }
}

impl FromRef<AppState> for Validator {
    fn from_ref(state: &AppState) -> Self {
        state.validator
    }
}

/// Full application router with the request-id, trace, body-limit and CORS layers.
pub fn build_router(state: AppState) -> Router {
    let max_body_size = state.config.max_body_size;
    let cors = if state.config.is_production() {
        CorsLayer::new()
    } else {
        CorsLayer::permissive()
    };

    Router::new()
        .nest("/api/v1", handlers::api_v1_routes())
        .nest("/health", handlers::health::health_routes())
        .layer(DefaultBodyLimit::max(max_body_size))
        .layer(cors)
        .layer(crate::tracing::configure_http_tracing())
        .layer(axum::middleware::from_fn(
            middleware_helpers::request_id_middleware,
        ))
        .with_state(state)
}
