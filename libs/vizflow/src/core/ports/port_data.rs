// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

use std::any::{Any, TypeId};
use std::fmt;
use std::sync::Arc;

/// Shared, read-only payload held by an outport.
///
/// Cloning is an `Arc` clone: downstream inports keep the payload alive after
/// the upstream processor replaces it.
#[derive(Clone)]
pub struct PortData {
    inner: Arc<dyn Any + Send + Sync>,
    type_id: TypeId,
    type_name: &'static str,
}

impl PortData {
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self::from_arc(Arc::new(value))
    }

    pub fn from_arc<T: Any + Send + Sync>(value: Arc<T>) -> Self {
        Self {
            inner: value,
            type_id: TypeId::of::<T>(),
            type_name: std::any::type_name::<T>(),
        }
    }

    /// Typed handle to the payload, `None` on type mismatch.
    pub fn downcast<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
        Arc::clone(&self.inner).downcast::<T>().ok()
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl fmt::Debug for PortData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PortData")
            .field("type", &self.type_name)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_downcast() {
        let data = PortData::new(42u32);
        assert_eq!(*data.downcast::<u32>().unwrap(), 42);
        assert!(data.downcast::<String>().is_none());
        assert_eq!(data.type_name(), "u32");
        assert_eq!(data.type_id(), TypeId::of::<u32>());
    }

    #[test]
    fn test_shared_payload_outlives_holder() {
        let data = PortData::new(String::from("volume"));
        let held = data.downcast::<String>().unwrap();
        drop(data);
        assert_eq!(held.as_str(), "volume");
    }
}
