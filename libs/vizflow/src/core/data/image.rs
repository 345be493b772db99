// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::DataFormat;

/// 2D buffer with a lock-protected byte store.
///
/// Shared between holders through `Arc`; the byte store stays writable for
/// whoever produces into it.
#[derive(Debug)]
pub struct Image {
    dimensions: [u32; 2],
    format: DataFormat,
    data: RwLock<Vec<u8>>,
}

impl Image {
    pub fn new(dimensions: [u32; 2], format: DataFormat) -> Self {
        Self {
            dimensions,
            format,
            data: RwLock::new(vec![0; Self::byte_len_for(dimensions, format)]),
        }
    }

    pub fn dimensions(&self) -> [u32; 2] {
        self.dimensions
    }

    pub fn format(&self) -> DataFormat {
        self.format
    }

    pub fn matches(&self, dimensions: [u32; 2], format: DataFormat) -> bool {
        self.dimensions == dimensions && self.format == format
    }

    pub fn byte_len(&self) -> usize {
        Self::byte_len_for(self.dimensions, self.format)
    }

    pub fn read(&self) -> RwLockReadGuard<'_, Vec<u8>> {
        self.data.read()
    }

    pub fn write(&self) -> RwLockWriteGuard<'_, Vec<u8>> {
        self.data.write()
    }

    /// Resize in place, discarding contents.
    pub fn reallocate(&mut self, dimensions: [u32; 2], format: DataFormat) {
        self.dimensions = dimensions;
        self.format = format;
        let data = self.data.get_mut();
        data.clear();
        data.resize(Self::byte_len_for(dimensions, format), 0);
    }

    fn byte_len_for(dimensions: [u32; 2], format: DataFormat) -> usize {
        dimensions.iter().map(|&d| d as usize).product::<usize>() * format.bytes_per_element()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_store_size() {
        let mut image = Image::new([4, 2], DataFormat::Rgba8);
        assert_eq!(image.byte_len(), 32);
        assert_eq!(image.read().len(), 32);

        image.write()[0] = 255;
        image.reallocate([2, 2], DataFormat::F32);
        assert_eq!(image.read().len(), 16);
        assert_eq!(image.read()[0], 0);
    }
}
