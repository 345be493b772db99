// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

use std::collections::HashMap;

use super::{BoxedProcessor, Processor, ProcessorInfo};
use crate::core::delegates::FactoryDelegate;
use crate::core::error::{NetworkError, Result};

type Constructor = Box<dyn Fn() -> BoxedProcessor + Send + Sync>;

/// A registered processor class.
pub struct ProcessorRegistration {
    pub info: ProcessorInfo,
    constructor: Constructor,
}

impl ProcessorRegistration {
    pub fn create(&self) -> BoxedProcessor {
        (self.constructor)()
    }
}

/// Maps reverse-DNS class identifiers to processor constructors.
///
/// Constructed explicitly and passed to whoever needs it; there is no
/// process-wide instance.
pub struct ProcessorFactory {
    processors: HashMap<String, ProcessorRegistration>,
}

impl ProcessorFactory {
    pub fn new() -> Self {
        Self {
            processors: HashMap::new(),
        }
    }

    /// Register a processor type, reading its class info from a default instance.
    pub fn register<P: Processor + Default>(&mut self) -> Result<()> {
        let info = P::default().info();
        self.register_with(info, || Box::new(P::default()))
    }

    /// Register a processor class with an explicit constructor.
    pub fn register_with<F>(&mut self, info: ProcessorInfo, constructor: F) -> Result<()>
    where
        F: Fn() -> BoxedProcessor + Send + Sync + 'static,
    {
        let class_identifier = info.class_identifier.clone();

        if self.processors.contains_key(&class_identifier) {
            return Err(NetworkError::DuplicateProcessorClass(class_identifier));
        }

        tracing::debug!("Registered processor class '{}'", class_identifier);
        self.processors.insert(
            class_identifier,
            ProcessorRegistration {
                info,
                constructor: Box::new(constructor),
            },
        );

        Ok(())
    }

    pub fn get(&self, class_identifier: &str) -> Option<&ProcessorRegistration> {
        self.processors.get(class_identifier)
    }

    pub fn create(&self, class_identifier: &str) -> Result<BoxedProcessor> {
        self.get(class_identifier)
            .map(ProcessorRegistration::create)
            .ok_or_else(|| NetworkError::UnknownProcessorClass(class_identifier.to_string()))
    }

    /// Registered class infos, sorted by class identifier.
    pub fn list(&self) -> Vec<ProcessorInfo> {
        let mut infos: Vec<_> = self.processors.values().map(|r| r.info.clone()).collect();
        infos.sort_by(|a, b| a.class_identifier.cmp(&b.class_identifier));
        infos
    }

    pub fn list_by_tag(&self, tag: &str) -> Vec<ProcessorInfo> {
        self.list()
            .into_iter()
            .filter(|info| info.tags.contains(tag))
            .collect()
    }

    pub fn contains(&self, class_identifier: &str) -> bool {
        self.processors.contains_key(class_identifier)
    }

    pub fn unregister(&mut self, class_identifier: &str) -> bool {
        self.processors.remove(class_identifier).is_some()
    }

    pub fn len(&self) -> usize {
        self.processors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processors.is_empty()
    }
}

impl Default for ProcessorFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl FactoryDelegate for ProcessorFactory {
    fn create(&self, class_identifier: &str) -> Result<BoxedProcessor> {
        ProcessorFactory::create(self, class_identifier)
    }

    fn can_create(&self, class_identifier: &str) -> bool {
        self.contains(class_identifier)
    }
}
