use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::processor::NotificationProcessor;
use crate::routes;
use crate::telemetry::TelemetrySink;

pub struct AppState {
    pub processor: Arc<dyn NotificationProcessor>,
    pub telemetry: Arc<dyn TelemetrySink>,
}

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            routes::INCOMING_CALL_ROUTE,
            post(handlers::calling::on_incoming_handler),
        )
        .route(
            routes::NOTIFICATION_ROUTE,
            post(handlers::calling::on_notification_handler),
        )
        .route(routes::HEALTH_ROUTE, get(handlers::health::health_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
