// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

use std::panic::{AssertUnwindSafe, catch_unwind};

use ahash::AHashSet;

use super::{EvaluationReport, ProcessOutcome};
use crate::core::config::{EvaluationSettings, NetworkConfig};
use crate::core::error::{NetworkError, Result};
use crate::core::graph::{ProcessorId, ProcessorNetwork};
use crate::core::ports::PortData;
use crate::core::processors::{ProcessContext, ValidityLevel};

/// Inputs gathered for one processor before it runs.
struct Pending {
    inputs: Vec<(String, Option<PortData>)>,
    consumed: Vec<(usize, u64)>,
    needs_processing: bool,
    ready: bool,
}

/// Single-threaded scheduler walking a network in dependency order.
///
/// A pass visits processors in [`ProcessorNetwork::evaluation_order`]. A
/// processor runs when it is invalid or one of its connected inports has
/// unconsumed upstream data, and all of its required inports have data.
#[derive(Debug, Clone, Default)]
pub struct NetworkEvaluator {
    settings: EvaluationSettings,
}

impl NetworkEvaluator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &NetworkConfig) -> Self {
        Self {
            settings: config.evaluation.clone(),
        }
    }

    pub fn with_settings(settings: EvaluationSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &EvaluationSettings {
        &self.settings
    }

    /// Run one synchronous evaluation pass.
    ///
    /// Processing failures do not abort the pass; they are logged and
    /// reported as [`ProcessOutcome::Failed`].
    pub fn request_evaluation(&self, network: &mut ProcessorNetwork) -> EvaluationReport {
        let mut report = EvaluationReport::default();
        let invalid = network
            .processors()
            .iter()
            .filter(|node| !node.is_valid())
            .count();

        if invalid == 0 {
            tracing::trace!("Evaluation requested with no invalid processors");
        }

        let mut not_ready: AHashSet<ProcessorId> = AHashSet::new();

        for id in network.evaluation_order() {
            let Some(pending) = self.gather(network, &id, &not_ready) else {
                continue;
            };

            if !pending.needs_processing {
                report.record(id, ProcessOutcome::UpToDate);
                continue;
            }

            if !pending.ready {
                tracing::trace!("Processor '{}' not ready", id);
                not_ready.insert(id.clone());
                network.notify(|o| o.did_process(&id, &ProcessOutcome::NotReady));
                report.record(id, ProcessOutcome::NotReady);
                continue;
            }

            network.notify(|o| o.will_process(&id));
            let outcome = self.run(network, &id, pending);
            network.notify(|o| o.did_process(&id, &outcome));
            report.record(id, outcome);
        }

        tracing::debug!(
            "Evaluation pass over {} processors ({} invalid): {}",
            report.len(),
            invalid,
            report
        );

        report
    }

    fn gather(
        &self,
        network: &ProcessorNetwork,
        id: &ProcessorId,
        not_ready: &AHashSet<ProcessorId>,
    ) -> Option<Pending> {
        let node = network.processor(id)?;
        let mut pending = Pending {
            inputs: Vec::with_capacity(node.inports().len()),
            consumed: Vec::new(),
            needs_processing: !node.is_valid(),
            ready: true,
        };

        for (index, inport) in node.inports().iter().enumerate() {
            let required = !inport.is_optional();
            let Some(address) = inport.connected_outport() else {
                pending.ready &= !required;
                pending.inputs.push((inport.name().to_string(), None));
                continue;
            };

            if not_ready.contains(&address.processor) && required {
                pending.ready = false;
            }

            let (version, data) = network
                .outport(address)
                .map(|port| (port.version(), port.data().cloned()))
                .unwrap_or((0, None));

            if inport.is_stale(version) {
                pending.needs_processing = true;
            }
            if data.is_none() && required {
                pending.ready = false;
            }

            pending.consumed.push((index, version));
            pending.inputs.push((inport.name().to_string(), data));
        }

        Some(pending)
    }

    fn run(
        &self,
        network: &mut ProcessorNetwork,
        id: &ProcessorId,
        pending: Pending,
    ) -> ProcessOutcome {
        let stamp = network.next_evaluation_stamp();
        let catch_panics = self.settings.catch_panics;

        let Some(node) = network.node_mut(id) else {
            return ProcessOutcome::NotReady;
        };

        let result = {
            let mut ctx = ProcessContext::new(
                &node.id,
                node.validity,
                pending.inputs,
                &node.outports,
                &node.properties,
                stamp,
            );
            let processor = &mut node.processor;

            let outcome = if catch_panics {
                catch_unwind(AssertUnwindSafe(|| processor.process(&mut ctx)))
                    .unwrap_or_else(|panic| Err(panic_to_error(panic)))
            } else {
                processor.process(&mut ctx)
            };

            outcome.map(|()| ctx.into_staged())
        };

        for (index, version) in pending.consumed {
            if let Some(inport) = node.inports.get_mut(index) {
                inport.mark_consumed(version);
            }
        }
        node.validity = ValidityLevel::Valid;

        match result {
            Ok(staged) => {
                for (index, data) in staged {
                    if let Some(outport) = node.outports.get_mut(index) {
                        outport.set_data(data);
                    }
                }
                node.evaluation_stamp = Some(stamp);
                network.advance_evaluation_counter();
                tracing::trace!("Processed '{}' (stamp {})", id, stamp);
                ProcessOutcome::Processed { stamp }
            }
            Err(e) => {
                tracing::error!("[{}] process() failed: {}", id, e);
                ProcessOutcome::Failed(e.to_string())
            }
        }
    }
}

fn panic_to_error(panic: Box<dyn std::any::Any + Send>) -> NetworkError {
    let message = if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    };
    NetworkError::Processing(format!("process() panicked: {}", message))
}

impl ProcessorNetwork {
    /// Run one evaluation pass with the network's configured settings.
    pub fn evaluate(&mut self) -> EvaluationReport {
        NetworkEvaluator::from_config(self.config()).request_evaluation(self)
    }

    /// Run one pass and fail on the first processing failure.
    pub fn evaluate_strict(&mut self) -> Result<EvaluationReport> {
        let report = self.evaluate();
        let failed = report.iter().find_map(|(id, outcome)| match outcome {
            ProcessOutcome::Failed(reason) => Some((id.clone(), reason.clone())),
            _ => None,
        });
        match failed {
            Some((id, reason)) => Err(NetworkError::Processing(format!("{}: {}", id, reason))),
            None => Ok(report),
        }
    }
}
