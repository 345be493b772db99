// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Evaluation scheduling.

mod evaluator;
mod report;

pub use evaluator::NetworkEvaluator;
pub use report::{EvaluationReport, ProcessOutcome};
