// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

use serde::{Deserialize, Serialize};

use super::{DataType, PortData};

/// Declaration of an outport, produced by [`Processor::outports`](crate::core::Processor::outports).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutportSpec {
    pub name: String,
    pub data_type: DataType,
}

impl OutportSpec {
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
        }
    }

    pub fn of<T: 'static>(name: impl Into<String>) -> Self {
        Self::new(name, DataType::of::<T>())
    }
}

/// Producing endpoint of a processor.
#[derive(Debug, Clone)]
pub struct Outport {
    spec: OutportSpec,
    data: Option<PortData>,
    version: u64,
}

impl Outport {
    pub fn new(spec: OutportSpec) -> Self {
        Self {
            spec,
            data: None,
            version: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.spec.name
    }

    pub fn data_type(&self) -> &DataType {
        &self.spec.data_type
    }

    pub fn spec(&self) -> &OutportSpec {
        &self.spec
    }

    /// Replace the payload and bump the version. Does not invalidate anything.
    pub fn set_data(&mut self, data: PortData) {
        self.data = Some(data);
        self.version += 1;
    }

    pub fn data(&self) -> Option<&PortData> {
        self.data.as_ref()
    }

    pub fn has_data(&self) -> bool {
        self.data.is_some()
    }

    /// Incremented on every `set_data`.
    pub fn version(&self) -> u64 {
        self.version
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_data_bumps_version() {
        let mut port = Outport::new(OutportSpec::of::<u32>("outport"));
        assert_eq!(port.version(), 0);
        assert!(!port.has_data());

        port.set_data(PortData::new(1u32));
        port.set_data(PortData::new(2u32));
        assert_eq!(port.version(), 2);
        assert_eq!(*port.data().unwrap().downcast::<u32>().unwrap(), 2);
    }
}
