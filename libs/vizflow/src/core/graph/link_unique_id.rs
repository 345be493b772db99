// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;

/// Identifier of a property link. Generated, never persisted as a key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LinkUniqueId(String);

impl LinkUniqueId {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for LinkUniqueId {
    fn default() -> Self {
        Self(format!("L{}", cuid2::create_id()))
    }
}

impl Deref for LinkUniqueId {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for LinkUniqueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for LinkUniqueId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}
