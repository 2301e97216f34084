use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::{
    pkg::{
        internal::{
            adaptors::jobs::{mutators::JobMutator, selectors::JobSelector, spec},
            extract::extract_job_info,
        },
        server::state::AppState,
    },
    prelude::{Error, Result},
};

pub const LISTING_SOURCE: &str = "ProductSpace Job Board";

#[derive(Deserialize)]
pub struct CreateJobInput {
    pub title: Option<String>,
    pub company: Option<String>,
    #[serde(rename = "type")]
    pub job_type: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub link: Option<String>,
}

// Empty strings count as absent, matching what web forms tend to submit.
fn provided(field: Option<String>) -> Option<String> {
    field.filter(|value| !value.is_empty())
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Value>> {
    let jobs = state.jobs.read().await;
    let selector = JobSelector::new(&jobs);
    Ok(Json(json!({
        "success": true,
        "jobs": selector.all(),
        "count": selector.count(),
        "source": LISTING_SOURCE,
    })))
}

pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateJobInput>,
) -> Result<Json<Value>> {
    let Some(link) = provided(input.link) else {
        return Err(Error::Validation("Job link is required".into()));
    };
    let extracted = extract_job_info(&link);
    let job = spec::JobEntry {
        id: spec::JobEntry::generate_id(),
        title: provided(input.title).unwrap_or(extracted.title),
        company: provided(input.company).unwrap_or(extracted.company),
        job_type: provided(input.job_type).unwrap_or_else(|| spec::DEFAULT_TYPE.into()),
        location: provided(input.location).unwrap_or(extracted.location),
        description: provided(input.description)
            .unwrap_or_else(|| spec::DEFAULT_DESCRIPTION.into()),
        link,
        pub_date: chrono::Utc::now(),
        source: spec::SOURCE.into(),
    };
    let mut jobs = state.jobs.write().await;
    JobMutator::new(&mut jobs).insert(job.clone());
    tracing::info!("added job {} ({})", &job.id, &job.title);
    Ok(Json(json!({
        "success": true,
        "job": job,
        "message": "Job added successfully",
    })))
}

pub async fn remove(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Value>> {
    let mut jobs = state.jobs.write().await;
    let deleted = JobMutator::new(&mut jobs).remove(&id)?;
    tracing::info!("deleted job {}", &deleted.id);
    Ok(Json(json!({
        "success": true,
        "message": "Job deleted successfully",
        "deletedJob": deleted,
    })))
}
