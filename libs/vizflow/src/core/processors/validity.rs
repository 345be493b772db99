// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

use serde::{Deserialize, Serialize};
use std::fmt;

/// Cached "needs recompute" state of a processor. Ordered from best to worst.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub enum ValidityLevel {
    #[default]
    Valid,
    /// Outputs must be recomputed from current inputs.
    InvalidOutput,
    /// Resources (shaders, buffers) must be rebuilt before outputs.
    InvalidResources,
}

impl ValidityLevel {
    pub fn is_valid(self) -> bool {
        self == Self::Valid
    }
}

impl fmt::Display for ValidityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Valid => write!(f, "Valid"),
            Self::InvalidOutput => write!(f, "InvalidOutput"),
            Self::InvalidResources => write!(f, "InvalidResources"),
        }
    }
}

/// Maturity classification of a processor class. Metadata only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CodeState {
    Broken,
    #[default]
    Experimental,
    Stable,
    Deprecated,
}

/// Capability tags of a processor class, e.g. `CPU`, `GL`, `CL`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Tags(Vec<String>);

impl Tags {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cpu() -> Self {
        Self::from(["CPU"])
    }

    pub fn gl() -> Self {
        Self::from(["GL"])
    }

    pub fn with(mut self, tag: impl Into<String>) -> Self {
        let tag = tag.into();
        if !self.contains(&tag) {
            self.0.push(tag);
        }
        self
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.0.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Tags not present in `supported`.
    pub fn unsupported<'a>(&'a self, supported: &[String]) -> Vec<&'a str> {
        self.iter()
            .filter(|tag| !supported.iter().any(|s| s.eq_ignore_ascii_case(tag)))
            .collect()
    }
}

impl<const N: usize> From<[&str; N]> for Tags {
    fn from(tags: [&str; N]) -> Self {
        tags.into_iter().fold(Tags::new(), Tags::with)
    }
}

impl fmt::Display for Tags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(", "))
    }
}
