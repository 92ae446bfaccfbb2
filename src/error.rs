use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

#[derive(Debug)]
pub enum AppError {
    /// The inbound request could not be rebuilt as an outbound request.
    Translation(String),
    /// The notification processor failed while handling the request.
    Dispatch(String),
    /// The processor responded, but its content could not be read as text.
    ReadResponse(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (error_key, detail) = match self {
            Self::Translation(msg) => ("translation_error", msg),
            Self::Dispatch(msg) => ("dispatch_error", msg),
            Self::ReadResponse(msg) => ("read_error", msg),
        };

        tracing::error!("Relay error ({}): {}", error_key, detail);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({
                "error": error_key,
                "message": "Internal server error",
            })),
        )
            .into_response()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_translation_error() {
        let error = AppError::Translation("bad authority".to_string());
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "translation_error");
        assert_eq!(json["message"], "Internal server error");
    }

    #[tokio::test]
    async fn test_dispatch_error() {
        let error = AppError::Dispatch("processor unreachable".to_string());
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "dispatch_error");
    }

    #[tokio::test]
    async fn test_read_response_error() {
        let error = AppError::ReadResponse("invalid utf-8".to_string());
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "read_error");
    }
}
