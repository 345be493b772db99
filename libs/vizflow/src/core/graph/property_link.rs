// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{LinkUniqueId, ProcessorId, PropertyPath};

/// Directed synchronization edge between two properties.
///
/// Equality ignores the generated id: two links are the same when they join
/// the same source and destination.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyLink {
    #[serde(skip, default)]
    pub id: LinkUniqueId,
    pub source: PropertyPath,
    pub destination: PropertyPath,
}

impl PropertyLink {
    pub fn new(source: PropertyPath, destination: PropertyPath) -> Self {
        Self {
            id: LinkUniqueId::new(),
            source,
            destination,
        }
    }

    pub fn joins(&self, source: &PropertyPath, destination: &PropertyPath) -> bool {
        &self.source == source && &self.destination == destination
    }

    pub fn involves_processor(&self, id: &ProcessorId) -> bool {
        &self.source.processor == id || &self.destination.processor == id
    }

    pub(crate) fn rename_processor(&mut self, old: &ProcessorId, new: &ProcessorId) {
        if &self.source.processor == old {
            self.source.processor = new.clone();
        }
        if &self.destination.processor == old {
            self.destination.processor = new.clone();
        }
    }
}

impl PartialEq for PropertyLink {
    fn eq(&self, other: &Self) -> bool {
        self.joins(&other.source, &other.destination)
    }
}

impl Eq for PropertyLink {}

impl fmt::Display for PropertyLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} => {}", self.source, self.destination)
    }
}
