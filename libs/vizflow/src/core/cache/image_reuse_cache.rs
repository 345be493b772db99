// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

use std::sync::Arc;

use super::ReusePool;
use crate::core::data::{DataFormat, Image};

/// Reuse cache for output images.
///
/// Entries of any size share one pool; an unused entry with the wrong
/// configuration is reallocated in place.
#[derive(Debug, Default)]
pub struct ImageReuseCache {
    pool: ReusePool<Image>,
}

impl ImageReuseCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// An image nobody else holds, with the requested dimensions and format.
    pub fn get_unused(&mut self, dimensions: [u32; 2], format: DataFormat) -> Arc<Image> {
        if let Some(entry) = self.pool.find_unused() {
            if !entry.matches(dimensions, format) {
                match Arc::get_mut(entry) {
                    Some(image) => image.reallocate(dimensions, format),
                    None => *entry = Arc::new(Image::new(dimensions, format)),
                }
            }
            return Arc::clone(entry);
        }

        tracing::trace!(
            "Allocating image {}x{} {} (pool size {})",
            dimensions[0],
            dimensions[1],
            format,
            self.pool.len()
        );
        let image = Arc::new(Image::new(dimensions, format));
        self.pool.push(Arc::clone(&image));
        image
    }

    /// Pool an externally allocated image.
    pub fn add(&mut self, image: Arc<Image>) {
        self.pool.push(image);
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
    }
}
