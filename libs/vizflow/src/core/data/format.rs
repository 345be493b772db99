// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

use serde::{Deserialize, Serialize};
use std::fmt;

/// Element format of an image or volume buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DataFormat {
    U8,
    U16,
    F32,
    #[default]
    Rgba8,
    Rgba16F,
    Rgba32F,
}

impl DataFormat {
    pub fn components(self) -> usize {
        match self {
            Self::U8 | Self::U16 | Self::F32 => 1,
            Self::Rgba8 | Self::Rgba16F | Self::Rgba32F => 4,
        }
    }

    pub fn bytes_per_element(self) -> usize {
        match self {
            Self::U8 => 1,
            Self::U16 => 2,
            Self::F32 => 4,
            Self::Rgba8 => 4,
            Self::Rgba16F => 8,
            Self::Rgba32F => 16,
        }
    }
}

impl fmt::Display for DataFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
