// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Factory delegate trait for processor instantiation.

use std::sync::Arc;

use crate::core::error::Result;
use crate::core::processors::BoxedProcessor;

/// Delegate for processor instantiation by class identifier.
///
/// A blanket implementation is provided for `Arc<dyn FactoryDelegate>`, so a
/// shared factory can be passed directly where a `FactoryDelegate` is expected.
pub trait FactoryDelegate: Send + Sync {
    /// Create a processor instance of the given class.
    fn create(&self, class_identifier: &str) -> Result<BoxedProcessor>;

    /// Check if this factory can create a processor class.
    fn can_create(&self, class_identifier: &str) -> bool;
}

impl FactoryDelegate for Arc<dyn FactoryDelegate> {
    fn create(&self, class_identifier: &str) -> Result<BoxedProcessor> {
        (**self).create(class_identifier)
    }

    fn can_create(&self, class_identifier: &str) -> bool {
        (**self).can_create(class_identifier)
    }
}
