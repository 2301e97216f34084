use axum::Json;
use chrono::Utc;
use serde_json::{Value, json};

use crate::prelude::Result;

pub async fn health() -> Result<Json<Value>> {
    tracing::debug!("service is healthy");
    Ok(Json(json!({
        "status": "OK",
        "timestamp": Utc::now().to_rfc3339(),
    })))
}
