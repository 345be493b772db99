// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::ops::Deref;

/// Unique identifier of a processor within a network.
///
/// Identifiers are chosen by the caller (usually derived from the display
/// name) and must not contain `.`, which separates the processor from the
/// port or property name in addresses.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProcessorId(String);

impl ProcessorId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Identifiers must be non-empty and free of the address separator.
    pub fn is_valid(&self) -> bool {
        !self.0.is_empty() && !self.0.contains('.')
    }
}

impl Deref for ProcessorId {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Borrow<str> for ProcessorId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ProcessorId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProcessorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ProcessorId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ProcessorId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<&ProcessorId> for ProcessorId {
    fn from(id: &ProcessorId) -> Self {
        id.clone()
    }
}

impl From<ProcessorId> for String {
    fn from(id: ProcessorId) -> Self {
        id.0
    }
}

impl PartialEq<str> for ProcessorId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ProcessorId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl PartialEq<ProcessorId> for &str {
    fn eq(&self, other: &ProcessorId) -> bool {
        *self == other.0
    }
}
