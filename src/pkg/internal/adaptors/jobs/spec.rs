use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const SOURCE: &str = "ProductSpace";
pub const DEFAULT_TYPE: &str = "fulltime";
pub const DEFAULT_DESCRIPTION: &str =
    "Product management opportunity. Click the link to learn more and apply.";

/// A stored posting. Field names are the wire names; records are never
/// mutated after creation.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct JobEntry {
    pub id: String,
    pub title: String,
    pub company: String,
    #[serde(rename = "type")]
    pub job_type: String,
    pub location: String,
    pub description: String,
    pub link: String,
    #[serde(rename = "pubDate")]
    pub pub_date: DateTime<Utc>,
    pub source: String,
}

impl JobEntry {
    pub fn generate_id() -> String {
        format!("job-{}", Uuid::new_v4())
    }
}
