use axum::body::to_bytes;
use axum::extract::{Request, State};
use std::sync::Arc;

use crate::error::AppError;
use crate::relay;
use crate::router::AppState;

/// Callback for a new incoming call.
pub async fn on_incoming_handler(
    State(state): State<Arc<AppState>>,
    request: Request,
) -> Result<String, AppError> {
    state.telemetry.record("callrelay | platform_call | on_incoming");
    relay_notification(&state, request).await
}

/// Callback for a notification on an existing call.
pub async fn on_notification_handler(
    State(state): State<Arc<AppState>>,
    request: Request,
) -> Result<String, AppError> {
    state.telemetry.record("callrelay | platform_call | on_notification");
    relay_notification(&state, request).await
}

/// Shared relay pipeline: translate, dispatch, respond.
///
/// Both routes behave identically; the platform merely calls different
/// paths for call setup versus mid-call notifications.
async fn relay_notification(state: &AppState, request: Request) -> Result<String, AppError> {
    tracing::info!(
        method = %request.method(),
        path = %request.uri().path(),
        "Received HTTP request"
    );

    let (parts, body) = request.into_parts();

    let body = if relay::carries_body(&parts.method) {
        let bytes = to_bytes(body, usize::MAX)
            .await
            .map_err(|e| AppError::Translation(format!("Failed to read request body: {e}")))?;
        Some(bytes)
    } else {
        None
    };

    let outbound = relay::build_outbound_request(&parts.method, &parts.uri, &parts.headers, body)?;

    // Hand the notification to the processor; it decides what to do with it.
    let response = state
        .processor
        .process_notification(outbound)
        .await
        .map_err(|e| AppError::Dispatch(e.to_string()))?;

    match response.content {
        Some(bytes) => String::from_utf8(bytes.to_vec())
            .map_err(|e| AppError::ReadResponse(format!("Processor content is not text: {e}"))),
        None => Ok(String::new()),
    }
}
