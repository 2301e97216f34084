use crate::pkg::internal::adaptors::jobs::spec::JobEntry;

pub struct JobSelector<'a> {
    jobs: &'a [JobEntry],
}

impl<'a> JobSelector<'a> {
    pub fn new(jobs: &'a [JobEntry]) -> Self {
        JobSelector { jobs }
    }

    pub fn all(&self) -> Vec<JobEntry> {
        self.jobs.to_vec()
    }

    pub fn count(&self) -> usize {
        self.jobs.len()
    }
}
