// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Topological order and neighborhood queries over connections.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use ahash::AHashMap;
use petgraph::Direction;
use petgraph::stable_graph::NodeIndex;
use petgraph::visit::{Bfs, Reversed};

use super::{ProcessorId, ProcessorNetwork};

impl ProcessorNetwork {
    /// Kahn topological order over connections. Among processors that are
    /// ready at the same time, the one added first comes first.
    pub fn evaluation_order(&self) -> Vec<ProcessorId> {
        let mut in_degree: AHashMap<NodeIndex, usize> = self
            .graph
            .node_indices()
            .map(|idx| {
                let degree = self
                    .graph
                    .neighbors_directed(idx, Direction::Incoming)
                    .count();
                (idx, degree)
            })
            .collect();

        let mut ready: BinaryHeap<Reverse<(u64, NodeIndex)>> = in_degree
            .iter()
            .filter(|(_, degree)| **degree == 0)
            .map(|(&idx, _)| Reverse((self.graph[idx].seq, idx)))
            .collect();

        let mut order = Vec::with_capacity(self.graph.node_count());
        while let Some(Reverse((_, idx))) = ready.pop() {
            order.push(self.graph[idx].id.clone());
            for successor in self.graph.neighbors_directed(idx, Direction::Outgoing) {
                if let Some(degree) = in_degree.get_mut(&successor) {
                    *degree -= 1;
                    if *degree == 0 {
                        ready.push(Reverse((self.graph[successor].seq, successor)));
                    }
                }
            }
        }

        order
    }

    /// Processors without incoming connections, in insertion order.
    pub fn sources(&self) -> Vec<ProcessorId> {
        self.filter_by_degree(Direction::Incoming)
    }

    /// Processors without outgoing connections, in insertion order.
    pub fn sinks(&self) -> Vec<ProcessorId> {
        self.filter_by_degree(Direction::Outgoing)
    }

    pub fn direct_predecessors(&self, id: &str) -> Vec<ProcessorId> {
        self.neighbors(id, Direction::Incoming)
    }

    pub fn direct_successors(&self, id: &str) -> Vec<ProcessorId> {
        self.neighbors(id, Direction::Outgoing)
    }

    /// Every processor `id` transitively depends on.
    pub fn predecessors(&self, id: &str) -> Vec<ProcessorId> {
        let Some(&start) = self.index.get(id) else {
            return Vec::new();
        };
        let reversed = Reversed(&self.graph);
        let mut bfs = Bfs::new(reversed, start);
        let mut found = Vec::new();
        while let Some(idx) = bfs.next(reversed) {
            if idx != start {
                found.push(idx);
            }
        }
        self.ids_in_insertion_order(found)
    }

    /// Every processor transitively depending on `id`.
    pub fn successors(&self, id: &str) -> Vec<ProcessorId> {
        let Some(&start) = self.index.get(id) else {
            return Vec::new();
        };
        let mut bfs = Bfs::new(&self.graph, start);
        let mut found = Vec::new();
        while let Some(idx) = bfs.next(&self.graph) {
            if idx != start {
                found.push(idx);
            }
        }
        self.ids_in_insertion_order(found)
    }

    fn neighbors(&self, id: &str, direction: Direction) -> Vec<ProcessorId> {
        let Some(&idx) = self.index.get(id) else {
            return Vec::new();
        };
        let found = self.graph.neighbors_directed(idx, direction).collect();
        self.ids_in_insertion_order(found)
    }

    fn filter_by_degree(&self, direction: Direction) -> Vec<ProcessorId> {
        let found = self
            .graph
            .node_indices()
            .filter(|&idx| {
                self.graph
                    .neighbors_directed(idx, direction)
                    .next()
                    .is_none()
            })
            .collect();
        self.ids_in_insertion_order(found)
    }

    fn ids_in_insertion_order(&self, mut found: Vec<NodeIndex>) -> Vec<ProcessorId> {
        found.sort_by_key(|&idx| self.graph[idx].seq);
        found.dedup();
        found
            .into_iter()
            .map(|idx| self.graph[idx].id.clone())
            .collect()
    }
}
