// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

use serde::{Deserialize, Serialize};

use super::{PropertyKind, PropertyValue};
use crate::core::error::{NetworkError, Result};
use crate::core::processors::ValidityLevel;

/// Named, typed setting owned by a processor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub identifier: String,
    pub display_name: String,
    value: PropertyValue,
    /// Level the owning processor drops to when this property changes.
    #[serde(default = "default_invalidation_level")]
    pub invalidation_level: ValidityLevel,
}

fn default_invalidation_level() -> ValidityLevel {
    ValidityLevel::InvalidOutput
}

impl Property {
    pub fn new(
        identifier: impl Into<String>,
        display_name: impl Into<String>,
        value: impl Into<PropertyValue>,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            display_name: display_name.into(),
            value: value.into(),
            invalidation_level: default_invalidation_level(),
        }
    }

    /// Set the level this property inflicts on its owner when changed.
    pub fn invalidates(mut self, level: ValidityLevel) -> Self {
        self.invalidation_level = level;
        self
    }

    pub fn value(&self) -> &PropertyValue {
        &self.value
    }

    pub fn kind(&self) -> PropertyKind {
        self.value.kind()
    }

    /// Assign a value of the same kind. Returns whether the value changed.
    pub fn set_value(&mut self, value: PropertyValue) -> Result<bool> {
        if value.kind() != self.kind() {
            return Err(NetworkError::PropertyTypeMismatch {
                property: self.identifier.clone(),
                expected: self.kind().to_string(),
                actual: value.kind().to_string(),
            });
        }
        if self.value == value {
            return Ok(false);
        }
        self.value = value;
        Ok(true)
    }
}
