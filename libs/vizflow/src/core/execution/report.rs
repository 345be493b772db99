// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

use std::fmt;

use crate::core::graph::ProcessorId;

/// What happened to one processor during an evaluation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessOutcome {
    /// `process()` succeeded and the processor received `stamp`.
    Processed { stamp: u64 },
    /// Valid with fresh inputs; nothing to do.
    UpToDate,
    /// A required input is unavailable; the processor stays invalid.
    NotReady,
    /// `process()` returned an error or panicked. Outputs kept their last data.
    Failed(String),
}

impl ProcessOutcome {
    pub fn is_processed(&self) -> bool {
        matches!(self, Self::Processed { .. })
    }
}

impl fmt::Display for ProcessOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Processed { stamp } => write!(f, "processed (stamp {})", stamp),
            Self::UpToDate => write!(f, "up to date"),
            Self::NotReady => write!(f, "not ready"),
            Self::Failed(reason) => write!(f, "failed: {}", reason),
        }
    }
}

/// Per-processor outcomes of one pass, in evaluation order.
#[derive(Debug, Clone, Default)]
pub struct EvaluationReport {
    outcomes: Vec<(ProcessorId, ProcessOutcome)>,
}

impl EvaluationReport {
    pub(crate) fn record(&mut self, id: ProcessorId, outcome: ProcessOutcome) {
        self.outcomes.push((id, outcome));
    }

    pub fn outcome(&self, id: &str) -> Option<&ProcessOutcome> {
        self.outcomes
            .iter()
            .find(|(pid, _)| pid == id)
            .map(|(_, outcome)| outcome)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ProcessorId, &ProcessOutcome)> {
        self.outcomes.iter().map(|(id, outcome)| (id, outcome))
    }

    /// Processors that ran successfully, in the order they ran.
    pub fn processed(&self) -> Vec<&ProcessorId> {
        self.outcomes
            .iter()
            .filter(|(_, outcome)| outcome.is_processed())
            .map(|(id, _)| id)
            .collect()
    }

    pub fn processed_count(&self) -> usize {
        self.count(|o| o.is_processed())
    }

    pub fn up_to_date_count(&self) -> usize {
        self.count(|o| *o == ProcessOutcome::UpToDate)
    }

    pub fn not_ready_count(&self) -> usize {
        self.count(|o| *o == ProcessOutcome::NotReady)
    }

    pub fn failed_count(&self) -> usize {
        self.count(|o| matches!(o, ProcessOutcome::Failed(_)))
    }

    /// True when no processor ran or failed.
    pub fn is_idle(&self) -> bool {
        self.processed_count() == 0 && self.failed_count() == 0
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    fn count(&self, f: impl Fn(&ProcessOutcome) -> bool) -> usize {
        self.outcomes.iter().filter(|(_, o)| f(o)).count()
    }
}

impl fmt::Display for EvaluationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} processed, {} up to date, {} not ready, {} failed",
            self.processed_count(),
            self.up_to_date_count(),
            self.not_ready_count(),
            self.failed_count()
        )
    }
}
