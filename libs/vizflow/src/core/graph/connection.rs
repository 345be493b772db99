// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{PortAddress, ProcessorId};

/// Directed data edge from an outport to an inport.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Connection {
    pub outport: PortAddress,
    pub inport: PortAddress,
}

impl Connection {
    pub fn new(outport: PortAddress, inport: PortAddress) -> Self {
        Self { outport, inport }
    }

    pub fn source(&self) -> &ProcessorId {
        &self.outport.processor
    }

    pub fn target(&self) -> &ProcessorId {
        &self.inport.processor
    }

    pub fn involves(&self, id: &ProcessorId) -> bool {
        self.source() == id || self.target() == id
    }

    pub(crate) fn rename_processor(&mut self, old: &ProcessorId, new: &ProcessorId) {
        if &self.outport.processor == old {
            self.outport.processor = new.clone();
        }
        if &self.inport.processor == old {
            self.inport.processor = new.clone();
        }
    }
}

impl fmt::Display for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.outport, self.inport)
    }
}
