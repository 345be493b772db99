// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Host-side models of image and volume buffers.

mod format;
mod image;
mod volume;

pub use format::DataFormat;
pub use image::Image;
pub use volume::{Volume, VolumeConfig};
