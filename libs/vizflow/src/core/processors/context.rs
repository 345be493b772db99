// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

use std::any::Any;
use std::sync::Arc;

use super::ValidityLevel;
use crate::core::error::{NetworkError, Result};
use crate::core::graph::ProcessorId;
use crate::core::ports::{Outport, PortData};
use crate::core::properties::{Property, PropertyValue};

/// View handed to [`Processor::process`](super::Processor::process).
///
/// Inport payloads are snapshotted before the call. Outport writes are staged
/// and only published by the evaluator when processing succeeds, so a failing
/// processor leaves its previous outputs in place.
pub struct ProcessContext<'a> {
    processor_id: &'a ProcessorId,
    validity: ValidityLevel,
    inputs: Vec<(String, Option<PortData>)>,
    outports: &'a [Outport],
    properties: &'a [Property],
    staged: Vec<(usize, PortData)>,
    stamp: u64,
}

impl<'a> ProcessContext<'a> {
    pub(crate) fn new(
        processor_id: &'a ProcessorId,
        validity: ValidityLevel,
        inputs: Vec<(String, Option<PortData>)>,
        outports: &'a [Outport],
        properties: &'a [Property],
        stamp: u64,
    ) -> Self {
        Self {
            processor_id,
            validity,
            inputs,
            outports,
            properties,
            staged: Vec::new(),
            stamp,
        }
    }

    pub fn processor_id(&self) -> &ProcessorId {
        self.processor_id
    }

    /// Validity level the processor had when the pass reached it.
    /// `InvalidResources` means resources must be rebuilt.
    pub fn validity(&self) -> ValidityLevel {
        self.validity
    }

    /// Stamp the processor receives if this call succeeds.
    pub fn evaluation_stamp(&self) -> u64 {
        self.stamp
    }

    /// Payload of a connected inport, `None` when unconnected or empty.
    pub fn input_data(&self, inport: &str) -> Option<&PortData> {
        self.inputs
            .iter()
            .find(|(name, _)| name == inport)
            .and_then(|(_, data)| data.as_ref())
    }

    /// Typed payload of an inport.
    pub fn input<T: Any + Send + Sync>(&self, inport: &str) -> Option<Arc<T>> {
        self.input_data(inport).and_then(PortData::downcast::<T>)
    }

    pub fn has_input(&self, inport: &str) -> bool {
        self.input_data(inport).is_some()
    }

    pub fn property(&self, identifier: &str) -> Option<&PropertyValue> {
        self.properties
            .iter()
            .find(|p| p.identifier == identifier)
            .map(Property::value)
    }

    /// Stage a value for an outport.
    pub fn set_output<T: Any + Send + Sync>(&mut self, outport: &str, value: T) -> Result<()> {
        self.set_output_data(outport, PortData::new(value))
    }

    /// Stage a shared value for an outport, e.g. a reuse-cache buffer.
    pub fn set_output_arc<T: Any + Send + Sync>(
        &mut self,
        outport: &str,
        value: Arc<T>,
    ) -> Result<()> {
        self.set_output_data(outport, PortData::from_arc(value))
    }

    pub fn set_output_data(&mut self, outport: &str, data: PortData) -> Result<()> {
        let index = self
            .outports
            .iter()
            .position(|p| p.name() == outport)
            .ok_or_else(|| {
                NetworkError::PortNotFound(format!("{}.{}", self.processor_id, outport))
            })?;

        let expected = self.outports[index].data_type();
        if !expected.accepts(data.type_id()) {
            return Err(NetworkError::PortTypeMismatch {
                port: format!("{}.{}", self.processor_id, outport),
                expected: expected.to_string(),
                actual: data.type_name().to_string(),
            });
        }

        self.staged.retain(|(i, _)| *i != index);
        self.staged.push((index, data));
        Ok(())
    }

    pub(crate) fn into_staged(self) -> Vec<(usize, PortData)> {
        self.staged
    }
}
