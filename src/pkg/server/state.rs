use std::sync::Arc;

use tokio::sync::RwLock;

use crate::pkg::internal::adaptors::jobs::spec::JobEntry;
use crate::prelude::Result;

/// Postings live in process memory only and vanish on restart. The lock
/// keeps insert/remove/list mutually exclusive across axum's worker tasks.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub jobs: Arc<RwLock<Vec<JobEntry>>>,
}

impl AppState {
    pub async fn new() -> Result<AppState> {
        Ok(AppState::default())
    }
}
