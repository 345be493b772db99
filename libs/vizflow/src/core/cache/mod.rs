// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Free-lists of shared buffers, so processors that regenerate outputs every
//! evaluation do not allocate every evaluation.

mod image_reuse_cache;
mod reuse_pool;
mod volume_reuse_cache;

pub use image_reuse_cache::ImageReuseCache;
pub use reuse_pool::ReusePool;
pub use volume_reuse_cache::VolumeReuseCache;
