// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

use std::fmt;

use super::ProcessorId;
use crate::core::ports::{Inport, Outport};
use crate::core::processors::{BoxedProcessor, ProcessorInfo, ValidityLevel};
use crate::core::properties::Property;

/// A processor as held by the network.
///
/// The node owns the ports and properties the processor declared when it was
/// added, its validity and evaluation stamp, and the processor behavior.
pub struct ProcessorNode {
    pub(crate) id: ProcessorId,
    pub(crate) info: ProcessorInfo,
    pub(crate) inports: Vec<Inport>,
    pub(crate) outports: Vec<Outport>,
    pub(crate) properties: Vec<Property>,
    pub(crate) validity: ValidityLevel,
    pub(crate) evaluation_stamp: Option<u64>,
    pub(crate) seq: u64,
    pub(crate) processor: BoxedProcessor,
}

impl ProcessorNode {
    pub(crate) fn new(id: ProcessorId, processor: BoxedProcessor, seq: u64) -> Self {
        let info = processor.info();
        let inports = processor.inports().into_iter().map(Inport::new).collect();
        let outports = processor.outports().into_iter().map(Outport::new).collect();
        let properties = processor.properties();

        Self {
            id,
            info,
            inports,
            outports,
            properties,
            validity: ValidityLevel::InvalidResources,
            evaluation_stamp: None,
            seq,
            processor,
        }
    }

    pub fn id(&self) -> &ProcessorId {
        &self.id
    }

    pub fn info(&self) -> &ProcessorInfo {
        &self.info
    }

    pub fn inports(&self) -> &[Inport] {
        &self.inports
    }

    pub fn outports(&self) -> &[Outport] {
        &self.outports
    }

    pub fn inport(&self, name: &str) -> Option<&Inport> {
        self.inports.iter().find(|p| p.name() == name)
    }

    pub fn outport(&self, name: &str) -> Option<&Outport> {
        self.outports.iter().find(|p| p.name() == name)
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn property(&self, identifier: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.identifier == identifier)
    }

    pub fn validity(&self) -> ValidityLevel {
        self.validity
    }

    pub fn is_valid(&self) -> bool {
        self.validity.is_valid()
    }

    /// Evaluation counter value assigned at the last successful `process()`.
    pub fn evaluation_stamp(&self) -> Option<u64> {
        self.evaluation_stamp
    }

    pub(crate) fn inport_mut(&mut self, name: &str) -> Option<&mut Inport> {
        self.inports.iter_mut().find(|p| p.name() == name)
    }

    pub(crate) fn property_mut(&mut self, identifier: &str) -> Option<&mut Property> {
        self.properties
            .iter_mut()
            .find(|p| p.identifier == identifier)
    }
}

impl fmt::Debug for ProcessorNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProcessorNode")
            .field("id", &self.id)
            .field("class", &self.info.class_identifier)
            .field("validity", &self.validity)
            .field("evaluation_stamp", &self.evaluation_stamp)
            .finish()
    }
}

impl fmt::Display for ProcessorNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.id, self.info.class_identifier)
    }
}
