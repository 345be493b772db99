// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

use std::sync::Arc;

use super::ReusePool;
use crate::core::data::{Volume, VolumeConfig};

/// Reuse cache for output volumes of a single configuration.
///
/// Requesting a different configuration drops the whole pool.
#[derive(Debug, Default)]
pub struct VolumeReuseCache {
    config: Option<VolumeConfig>,
    pool: ReusePool<Volume>,
}

impl VolumeReuseCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration of the pooled volumes, if any were requested.
    pub fn config(&self) -> Option<VolumeConfig> {
        self.config
    }

    /// A volume nobody else holds, allocated with `config`.
    pub fn get(&mut self, config: VolumeConfig) -> Arc<Volume> {
        self.reset_if_changed(config);
        self.pool.acquire_or_insert_with(|| Volume::new(config))
    }

    /// Pool an externally allocated volume.
    pub fn add(&mut self, volume: Arc<Volume>) {
        self.reset_if_changed(volume.config());
        self.pool.push(volume);
    }

    pub fn len(&self) -> usize {
        self.pool.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pool.is_empty()
    }

    pub fn in_use(&self) -> usize {
        self.pool.in_use()
    }

    pub fn clear(&mut self) {
        self.pool.clear();
        self.config = None;
    }

    fn reset_if_changed(&mut self, config: VolumeConfig) {
        if self.config != Some(config) {
            if !self.pool.is_empty() {
                tracing::trace!(
                    "Volume config changed, dropping {} pooled volumes",
                    self.pool.len()
                );
            }
            self.pool.clear();
            self.config = Some(config);
        }
    }
}
