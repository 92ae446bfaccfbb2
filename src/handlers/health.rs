use axum::Json;

use crate::models::response::StatusOk;

pub async fn health_handler() -> Json<StatusOk> {
    Json(StatusOk::with_version())
}
