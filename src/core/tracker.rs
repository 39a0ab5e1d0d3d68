//! Job progress tracking - the board of open service orders.
//!
//! Jobs are never removed. The only mutation after a job is opened is flipping
//! one step's `completed` flag, which leaves the step order and every other
//! job untouched.

use crate::{
    entities::{Job, StepDraft},
    errors::Result,
};
use tracing::{debug, info};

/// All open service orders, in the order they were opened.
#[derive(Debug, Clone)]
pub struct JobBoard {
    jobs: Vec<Job>,
    next_id: i64,
}

impl Default for JobBoard {
    fn default() -> Self {
        Self {
            jobs: Vec::new(),
            next_id: 1,
        }
    }
}

impl JobBoard {
    /// Wraps existing jobs (typically seeded from configuration).
    #[must_use]
    pub fn new(jobs: Vec<Job>) -> Self {
        let next_id = jobs.iter().map(|j| j.id).max().unwrap_or(0) + 1;
        Self { jobs, next_id }
    }

    /// Every job on the board.
    #[must_use]
    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    /// Looks a job up by id.
    #[must_use]
    pub fn get(&self, job_id: i64) -> Option<&Job> {
        self.jobs.iter().find(|j| j.id == job_id)
    }

    /// Opens a new job for a customer in the given bay.
    ///
    /// # Errors
    /// Returns a validation error if the bay or a step name is blank.
    pub fn open_job(&mut self, customer_id: i64, bay: &str, steps: Vec<StepDraft>) -> Result<&Job> {
        let job = Job::open(self.next_id, customer_id, bay, steps)?;
        self.next_id += 1;
        info!(job_id = job.id, bay = %job.bay, steps = job.steps.len(), "Opened job");
        self.jobs.push(job);
        Ok(&self.jobs[self.jobs.len() - 1])
    }

    /// Flips the completion flag of one step of one job.
    ///
    /// Returns `false` and changes nothing if the job or the step does not exist.
    pub fn toggle_step(&mut self, job_id: i64, step_id: i64) -> bool {
        let Some(step) = self
            .jobs
            .iter_mut()
            .find(|j| j.id == job_id)
            .and_then(|j| j.steps.iter_mut().find(|s| s.id == step_id))
        else {
            debug!(job_id, step_id, "toggle_step: no such job or step");
            return false;
        };

        step.completed = !step.completed;
        debug!(job_id, step_id, completed = step.completed, "Toggled step");
        true
    }
}

/// Completion percentage of a job, or `None` if it has no steps.
#[must_use]
pub fn compute_progress(job: &Job) -> Option<u8> {
    progress_percent(job.completed_steps(), job.steps.len())
}

/// `round(100 * completed / total)` with halves rounded up, or `None` for `total == 0`.
#[must_use]
pub fn progress_percent(completed: usize, total: usize) -> Option<u8> {
    if total == 0 {
        return None;
    }
    let completed = completed.min(total) as u64;
    let total = total as u64;
    let rounded = (200 * completed + total) / (2 * total);
    Some(u8::try_from(rounded).unwrap_or(100))
}

/// A job is finished once every step is done. A job without steps never is.
#[must_use]
pub fn is_finished(job: &Job) -> bool {
    compute_progress(job) == Some(100)
}
