// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

use serde::{Deserialize, Serialize};

use super::DataType;
use crate::core::graph::PortAddress;

/// Declaration of an inport, produced by [`Processor::inports`](crate::core::Processor::inports).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InportSpec {
    pub name: String,
    pub data_type: DataType,
    /// Optional inports do not block evaluation when unconnected or empty.
    #[serde(default)]
    pub optional: bool,
}

impl InportSpec {
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
            optional: false,
        }
    }

    pub fn of<T: 'static>(name: impl Into<String>) -> Self {
        Self::new(name, DataType::of::<T>())
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }
}

/// Consuming endpoint of a processor.
///
/// Holds the address of its producer, never the producer itself.
#[derive(Debug, Clone)]
pub struct Inport {
    spec: InportSpec,
    connected_to: Option<PortAddress>,
    consumed_version: Option<u64>,
}

impl Inport {
    pub fn new(spec: InportSpec) -> Self {
        Self {
            spec,
            connected_to: None,
            consumed_version: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.spec.name
    }

    pub fn data_type(&self) -> &DataType {
        &self.spec.data_type
    }

    pub fn spec(&self) -> &InportSpec {
        &self.spec
    }

    pub fn is_optional(&self) -> bool {
        self.spec.optional
    }

    pub fn is_connected(&self) -> bool {
        self.connected_to.is_some()
    }

    pub fn connected_outport(&self) -> Option<&PortAddress> {
        self.connected_to.as_ref()
    }

    /// Upstream version seen at the owner's last evaluation.
    pub fn consumed_version(&self) -> Option<u64> {
        self.consumed_version
    }

    /// True when the upstream has produced something not yet consumed.
    pub fn is_stale(&self, upstream_version: u64) -> bool {
        self.consumed_version != Some(upstream_version)
    }

    pub(crate) fn connect(&mut self, outport: PortAddress) {
        self.connected_to = Some(outport);
        self.consumed_version = None;
    }

    pub(crate) fn disconnect(&mut self) -> Option<PortAddress> {
        self.consumed_version = None;
        self.connected_to.take()
    }

    pub(crate) fn retarget(&mut self, outport: PortAddress) {
        self.connected_to = Some(outport);
    }

    pub(crate) fn mark_consumed(&mut self, version: u64) {
        self.consumed_version = Some(version);
    }
}
