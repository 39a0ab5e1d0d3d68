//! Job entity - One vehicle's service order and its ordered checklist.
//!
//! The step sequence is fixed when the job is opened; afterwards only the
//! `completed` flags change.

use super::product::required;
use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};

/// One checklist item of a job
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobStep {
    /// Identifier, unique within the owning job
    pub id: i64,
    /// Short title (e.g., "Corrección de Pintura")
    pub name: String,
    /// Detail line (e.g., "Eliminación de swirls")
    pub description: String,
    /// Whether the step is done
    pub completed: bool,
    /// Icon name, opaque to this crate
    pub icon: String,
}

/// A vehicle's service order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    /// Unique identifier on the job board
    pub id: i64,
    /// Weak reference to a customer; the customer may since have been deleted
    pub customer_id: i64,
    /// Work bay label (e.g., "Bahía 1")
    pub bay: String,
    /// Ordered checklist
    pub steps: Vec<JobStep>,
}

/// Form data for one step of a new job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepDraft {
    /// Short title
    pub name: String,
    /// Detail line
    #[serde(default)]
    pub description: String,
    /// Icon name
    #[serde(default)]
    pub icon: String,
    /// Start already completed (used when seeding)
    #[serde(default)]
    pub completed: bool,
}

impl StepDraft {
    /// A pending step with the given name and description.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            icon: String::new(),
            completed: false,
        }
    }
}

impl Job {
    /// Opens a job with steps numbered from 1 in the given order.
    ///
    /// # Errors
    /// Returns a validation error if the bay or any step name is blank.
    pub fn open(id: i64, customer_id: i64, bay: &str, steps: Vec<StepDraft>) -> Result<Self> {
        let bay = required("Bay", bay)?;
        let steps = steps
            .into_iter()
            .zip(1_i64..)
            .map(|(draft, step_id)| {
                let name = required("Step name", &draft.name)
                    .map_err(|_| Error::validation(format!("Step {step_id} needs a name")))?;
                Ok(JobStep {
                    id: step_id,
                    name,
                    description: draft.description.trim().to_string(),
                    completed: draft.completed,
                    icon: draft.icon.trim().to_string(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            id,
            customer_id,
            bay,
            steps,
        })
    }

    /// Number of steps marked completed.
    #[must_use]
    pub fn completed_steps(&self) -> usize {
        self.steps.iter().filter(|s| s.completed).count()
    }
}
