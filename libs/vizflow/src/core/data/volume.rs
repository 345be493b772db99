// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use serde::{Deserialize, Serialize};

use super::DataFormat;

/// Allocation parameters of a volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VolumeConfig {
    pub dimensions: [u32; 3],
    pub format: DataFormat,
}

impl VolumeConfig {
    pub fn new(dimensions: [u32; 3], format: DataFormat) -> Self {
        Self { dimensions, format }
    }

    pub fn byte_len(&self) -> usize {
        self.dimensions.iter().map(|&d| d as usize).product::<usize>()
            * self.format.bytes_per_element()
    }
}

/// 3D buffer with a lock-protected byte store.
#[derive(Debug)]
pub struct Volume {
    config: VolumeConfig,
    data: RwLock<Vec<u8>>,
}

impl Volume {
    pub fn new(config: VolumeConfig) -> Self {
        Self {
            config,
            data: RwLock::new(vec![0; config.byte_len()]),
        }
    }

    pub fn config(&self) -> VolumeConfig {
        self.config
    }

    pub fn dimensions(&self) -> [u32; 3] {
        self.config.dimensions
    }

    pub fn format(&self) -> DataFormat {
        self.config.format
    }

    pub fn read(&self) -> RwLockReadGuard<'_, Vec<u8>> {
        self.data.read()
    }

    pub fn write(&self) -> RwLockWriteGuard<'_, Vec<u8>> {
        self.data.write()
    }
}
