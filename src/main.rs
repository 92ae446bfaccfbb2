use std::sync::Arc;

use clap::Parser;

use callrelay_server::config::ServerConfig;
use callrelay_server::processor::HttpNotificationProcessor;
use callrelay_server::router::{self, AppState};
use callrelay_server::telemetry::TracingTelemetry;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = ServerConfig::parse();

    let processor = HttpNotificationProcessor::new(&config.processor_url)
        .expect("Failed to create notification processor client");

    let state = Arc::new(AppState {
        processor: Arc::new(processor),
        telemetry: Arc::new(TracingTelemetry),
    });

    let app = router::build_router(state);

    let addr = format!("{}:{}", config.bind, config.port);
    tracing::info!("Call relay starting on {}", addr);
    tracing::info!("Notification processor: {}", config.processor_url);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind address");

    tracing::info!("Server ready, waiting for platform callbacks...");

    axum::serve(listener, app).await.expect("Server error");
}
