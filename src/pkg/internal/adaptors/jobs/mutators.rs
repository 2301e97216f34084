use crate::pkg::internal::adaptors::jobs::spec::JobEntry;
use crate::prelude::{Error, Result};

pub struct JobMutator<'a> {
    jobs: &'a mut Vec<JobEntry>,
}

impl<'a> JobMutator<'a> {
    pub fn new(jobs: &'a mut Vec<JobEntry>) -> Self {
        JobMutator { jobs }
    }

    /// Newest postings sit at the head of the sequence.
    pub fn insert(&mut self, job: JobEntry) {
        self.jobs.insert(0, job);
    }

    /// Removes the first record with a matching id, preserving the order of
    /// the rest.
    pub fn remove(&mut self, id: &str) -> Result<JobEntry> {
        let idx = self
            .jobs
            .iter()
            .position(|job| job.id == id)
            .ok_or_else(|| Error::NotFound("Job not found".into()))?;
        Ok(self.jobs.remove(idx))
    }
}
