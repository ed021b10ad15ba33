//! Deployment step tracker
//!
//! Steps are numbered `1..=total`. Each is pending or completed, and a single
//! cursor marks the step the reader is working on. State lives only as long as
//! the tracker does.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::error::{GuideError, Result};

/// Titles of the OMEGAMON deployment steps, step 1 first
pub const DEPLOYMENT_STEPS: [&str; 14] = [
    "Create DFDSS dump datasets on MNT1 LPAR",
    "FTP transfer datasets to target LPAR",
    "Create catalog aliases on target LPAR",
    "DFDSS restore essential libraries",
    "APF authorize TKANMOD library",
    "Restore OMEGAMON datasets",
    "Copy started tasks to PROCLIB",
    "APF authorize required libraries",
    "Define OMEGAMON subsystem",
    "Activate VTAM MAJORNODE",
    "Configure TSO authorization",
    "Start OMEGAMON components",
    "Verify product functionality",
    "Configure ISPF interface",
];

pub fn step_title(step: u32) -> Option<&'static str> {
    let index = step.checked_sub(1)? as usize;
    DEPLOYMENT_STEPS.get(index).copied()
}

/// What a tracker operation changed, for the caller to render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "change")]
pub enum StepChange {
    /// Step newly completed; `advanced_to` is set when the cursor moved
    Completed { step: u32, advanced_to: Option<u32> },
    Reopened { step: u32 },
    Unchanged { step: u32 },
}

impl StepChange {
    pub fn notification(&self) -> Option<String> {
        match self {
            Self::Completed { step, .. } => Some(format!("Step {} completed!", step)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Progress {
    pub current_step: u32,
    pub total_steps: u32,
    pub completed: usize,
    pub percent: f64,
}

impl Progress {
    pub fn label(&self) -> String {
        format!(
            "Step {} of {} ({} completed)",
            self.current_step, self.total_steps, self.completed
        )
    }
}

#[derive(Debug, Clone)]
pub struct StepTracker {
    total_steps: u32,
    current_step: u32,
    completed: BTreeSet<u32>,
}

impl StepTracker {
    pub fn new(total_steps: u32) -> Self {
        Self {
            total_steps,
            current_step: 1,
            completed: BTreeSet::new(),
        }
    }

    pub fn total_steps(&self) -> u32 {
        self.total_steps
    }

    pub fn current_step(&self) -> u32 {
        self.current_step
    }

    pub fn is_completed(&self, step: u32) -> bool {
        self.completed.contains(&step)
    }

    /// Completed steps in ascending order
    pub fn completed_steps(&self) -> Vec<u32> {
        self.completed.iter().copied().collect()
    }

    fn check_range(&self, step: u32) -> Result<()> {
        if step == 0 || step > self.total_steps {
            return Err(GuideError::StepOutOfRange {
                step,
                total: self.total_steps,
            });
        }
        Ok(())
    }

    /// Mark a step done. Completing the step under the cursor moves the cursor on
    /// unless it is already on the last step. Already-completed steps are left alone.
    pub fn mark_complete(&mut self, step: u32) -> Result<StepChange> {
        self.check_range(step)?;

        if !self.completed.insert(step) {
            return Ok(StepChange::Unchanged { step });
        }

        let mut advanced_to = None;
        if step == self.current_step && self.current_step < self.total_steps {
            self.current_step += 1;
            advanced_to = Some(self.current_step);
        }

        tracing::debug!(step, current = self.current_step, "step completed");
        Ok(StepChange::Completed { step, advanced_to })
    }

    /// Flip a step between pending and completed. Reopening never moves the cursor.
    pub fn toggle(&mut self, step: u32) -> Result<StepChange> {
        self.check_range(step)?;

        if self.completed.remove(&step) {
            tracing::debug!(step, "step reopened");
            return Ok(StepChange::Reopened { step });
        }

        self.mark_complete(step)
    }

    pub fn progress(&self) -> Progress {
        let percent = if self.total_steps == 0 {
            0.0
        } else {
            self.completed.len() as f64 / self.total_steps as f64 * 100.0
        };

        Progress {
            current_step: self.current_step,
            total_steps: self.total_steps,
            completed: self.completed.len(),
            percent,
        }
    }
}
