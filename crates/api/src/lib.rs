//! HTTP API server with observability for the institutions registry.
//!
//! Provides the `/instituicoes` REST endpoints, with structured logging
//! (tracing) and Prometheus metrics.

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, put};
use domain::InstitutionService;
use institution_store::InstitutionStore;
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use routes::instituicoes::AppState;

/// Creates the Axum application router with all routes and shared state.
pub fn create_app<S: InstitutionStore + 'static>(
    state: Arc<AppState<S>>,
    metrics_handle: PrometheusHandle,
) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    Router::new()
        .route("/health", get(routes::health::check))
        .route(
            "/instituicoes",
            get(routes::instituicoes::list::<S>).post(routes::instituicoes::create::<S>),
        )
        .route(
            "/instituicoes/uf-alunos",
            get(routes::instituicoes::totals_by_state::<S>),
        )
        .route(
            "/instituicoes/exists",
            get(routes::instituicoes::exists::<S>),
        )
        .route(
            "/instituicoes/{id}",
            put(routes::instituicoes::update::<S>).delete(routes::instituicoes::delete::<S>),
        )
        .with_state(state)
        .merge(metrics_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Creates the application state over the given store.
pub fn create_default_state<S: InstitutionStore + 'static>(store: S) -> Arc<AppState<S>> {
    Arc::new(AppState {
        service: InstitutionService::new(store),
    })
}
