// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Downstream invalidation waves.

use std::collections::VecDeque;

use petgraph::Direction;
use petgraph::stable_graph::NodeIndex;

use super::{ProcessorId, ProcessorNetwork};
use crate::core::error::Result;
use crate::core::processors::ValidityLevel;

impl ProcessorNetwork {
    /// Raise a processor to at least `level` and everything downstream of it
    /// to at least `InvalidOutput`.
    ///
    /// Returns the processors whose validity changed, in visiting order.
    pub fn invalidate(&mut self, id: &str, level: ValidityLevel) -> Result<Vec<ProcessorId>> {
        let idx = self.node_index(id)?;
        Ok(self.invalidate_index(idx, level))
    }

    pub(crate) fn invalidate_index(
        &mut self,
        start: NodeIndex,
        level: ValidityLevel,
    ) -> Vec<ProcessorId> {
        if level.is_valid() {
            return Vec::new();
        }

        let changed = self.propagate_invalidation(start, level);
        if changed.is_empty() {
            return Vec::new();
        }

        tracing::trace!("Invalidation wave touched {} processors", changed.len());
        for (id, level) in &changed {
            self.notify(|o| o.did_invalidate(id, *level));
        }
        self.request_evaluation();

        changed.into_iter().map(|(id, _)| id).collect()
    }

    /// Breadth-first wave. A processor already at an equal-or-worse level stops
    /// the wave on its branch, so each processor changes at most once.
    fn propagate_invalidation(
        &mut self,
        start: NodeIndex,
        level: ValidityLevel,
    ) -> Vec<(ProcessorId, ValidityLevel)> {
        let mut changed = Vec::new();
        let mut queue = VecDeque::from([(start, level)]);

        while let Some((idx, level)) = queue.pop_front() {
            let Some(node) = self.graph.node_weight_mut(idx) else {
                continue;
            };
            if node.validity >= level {
                continue;
            }
            node.validity = level;
            changed.push((node.id.clone(), level));

            for successor in self.graph.neighbors_directed(idx, Direction::Outgoing) {
                queue.push_back((successor, ValidityLevel::InvalidOutput));
            }
        }

        changed
    }
}
