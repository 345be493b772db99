// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

use serde::{Deserialize, Serialize};
use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Identifier of the payload type carried by a port.
///
/// Ports connect by name. Types built with [`DataType::of`] also remember the
/// Rust payload type, and only those are checked when a processor publishes
/// data. Named types from [`DataType::new`] accept any payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DataType {
    name: String,
    #[serde(skip)]
    type_id: Option<TypeId>,
}

impl DataType {
    const ANY: &'static str = "*";

    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_id: None,
        }
    }

    /// Data type derived from a Rust type.
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            name: std::any::type_name::<T>().to_string(),
            type_id: Some(TypeId::of::<T>()),
        }
    }

    /// Wildcard accepted by inports that take any payload.
    pub fn any() -> Self {
        Self::new(Self::ANY)
    }

    pub fn is_any(&self) -> bool {
        self.name == Self::ANY
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rust payload type, when declared with [`DataType::of`].
    pub fn type_id(&self) -> Option<TypeId> {
        self.type_id
    }

    /// Whether a payload of `type_id` may be published on a port of this type.
    pub fn accepts(&self, type_id: TypeId) -> bool {
        self.type_id.is_none_or(|expected| expected == type_id)
    }

    /// Whether an outport of type `self` may feed an inport of type `inport`.
    pub fn can_feed(&self, inport: &DataType) -> bool {
        inport.is_any() || self == inport
    }
}

impl PartialEq for DataType {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for DataType {}

impl Hash for DataType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compatibility() {
        let image = DataType::of::<Vec<u8>>();
        let text = DataType::of::<String>();
        assert!(image.can_feed(&image));
        assert!(!image.can_feed(&text));
        assert!(image.can_feed(&DataType::any()));
        assert!(!DataType::any().can_feed(&image));
    }

    #[test]
    fn test_named_type_accepts_any_payload() {
        let volume = DataType::new("u32-volume");
        assert!(volume.accepts(TypeId::of::<u32>()));
        assert!(volume.accepts(TypeId::of::<String>()));
        assert!(volume.can_feed(&DataType::new("u32-volume")));

        let typed = DataType::of::<u32>();
        assert!(typed.accepts(TypeId::of::<u32>()));
        assert!(!typed.accepts(TypeId::of::<u64>()));
    }
}
