// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

use serde::{Deserialize, Serialize};

use super::{CodeState, ProcessContext, Tags};
use crate::core::error::Result;
use crate::core::ports::{InportSpec, OutportSpec};
use crate::core::properties::Property;

/// Static description of a processor class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessorInfo {
    /// Reverse-DNS class identifier, e.g. `org.vizflow.VolumeSource`.
    pub class_identifier: String,
    pub display_name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub code_state: CodeState,
    #[serde(default)]
    pub tags: Tags,
}

impl ProcessorInfo {
    pub fn new(class_identifier: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            class_identifier: class_identifier.into(),
            display_name: display_name.into(),
            category: String::new(),
            code_state: CodeState::default(),
            tags: Tags::default(),
        }
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn code_state(mut self, code_state: CodeState) -> Self {
        self.code_state = code_state;
        self
    }

    pub fn tags(mut self, tags: Tags) -> Self {
        self.tags = tags;
        self
    }
}

/// Behavior of a computation node.
///
/// The network owns the ports and properties a processor declares; the
/// processor only computes. `process` reads inport data and stages outport
/// data through the [`ProcessContext`]; staged data is published only when
/// `process` returns `Ok`.
pub trait Processor: Send + 'static {
    fn info(&self) -> ProcessorInfo;

    fn inports(&self) -> Vec<InportSpec> {
        Vec::new()
    }

    fn outports(&self) -> Vec<OutportSpec> {
        Vec::new()
    }

    fn properties(&self) -> Vec<Property> {
        Vec::new()
    }

    fn process(&mut self, ctx: &mut ProcessContext<'_>) -> Result<()>;
}

pub type BoxedProcessor = Box<dyn Processor>;
