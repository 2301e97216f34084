use axum::Json;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::{
    pkg::internal::extract::extract_job_info,
    prelude::{Error, Result},
};

#[derive(Deserialize)]
pub struct ExtractInput {
    pub url: Option<String>,
}

/// A url that fails to parse is not an error here: the caller gets an
/// all-empty triple with success still true.
pub async fn extract(Json(input): Json<ExtractInput>) -> Result<Json<Value>> {
    let Some(url) = input.url.filter(|value| !value.is_empty()) else {
        return Err(Error::Validation("URL is required".into()));
    };
    let job_info = extract_job_info(&url);
    Ok(Json(json!({
        "success": true,
        "jobInfo": job_info,
    })))
}
