pub mod extract;
pub mod jobs;
pub mod newsletter;
pub mod probes;
