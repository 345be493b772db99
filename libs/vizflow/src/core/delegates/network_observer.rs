// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Observer trait for network lifecycle notifications.

use std::sync::Arc;

use crate::core::execution::ProcessOutcome;
use crate::core::graph::{Connection, ProcessorId, PropertyLink, PropertyPath};
use crate::core::processors::ValidityLevel;
use crate::core::properties::PropertyValue;

/// Observer of a [`ProcessorNetwork`](crate::core::ProcessorNetwork).
///
/// Provides hooks for:
/// - Processors: will/did add, will/did remove, rename
/// - Connections and links: add, remove
/// - Properties and validity: did_change_property, did_invalidate
/// - Evaluation: did_request_evaluation, will_process, did_process
///
/// All methods have default no-op implementations, so you only need
/// to override the ones you care about. Hooks run after the network has
/// released its internal borrows and must not assume a particular thread.
pub trait NetworkObserver: Send + Sync {
    fn will_add_processor(&self, _id: &ProcessorId) {}

    fn did_add_processor(&self, _id: &ProcessorId) {}

    fn will_remove_processor(&self, _id: &ProcessorId) {}

    fn did_remove_processor(&self, _id: &ProcessorId) {}

    fn did_rename_processor(&self, _old_id: &ProcessorId, _new_id: &ProcessorId) {}

    fn did_add_connection(&self, _connection: &Connection) {}

    fn will_remove_connection(&self, _connection: &Connection) {}

    fn did_remove_connection(&self, _connection: &Connection) {}

    fn did_add_link(&self, _link: &PropertyLink) {}

    fn did_remove_link(&self, _link: &PropertyLink) {}

    /// Called for the directly set property and for every property a link
    /// propagation pass changed.
    fn did_change_property(&self, _path: &PropertyPath, _value: &PropertyValue) {}

    /// Called once per processor whose validity got worse during a wave.
    fn did_invalidate(&self, _id: &ProcessorId, _level: ValidityLevel) {}

    /// Called once at the end of each invalidation wave.
    fn did_request_evaluation(&self) {}

    fn will_process(&self, _id: &ProcessorId) {}

    fn did_process(&self, _id: &ProcessorId, _outcome: &ProcessOutcome) {}
}

// =============================================================================
// Blanket implementation for Arc wrapper
// =============================================================================

impl NetworkObserver for Arc<dyn NetworkObserver> {
    fn will_add_processor(&self, id: &ProcessorId) {
        (**self).will_add_processor(id)
    }

    fn did_add_processor(&self, id: &ProcessorId) {
        (**self).did_add_processor(id)
    }

    fn will_remove_processor(&self, id: &ProcessorId) {
        (**self).will_remove_processor(id)
    }

    fn did_remove_processor(&self, id: &ProcessorId) {
        (**self).did_remove_processor(id)
    }

    fn did_rename_processor(&self, old_id: &ProcessorId, new_id: &ProcessorId) {
        (**self).did_rename_processor(old_id, new_id)
    }

    fn did_add_connection(&self, connection: &Connection) {
        (**self).did_add_connection(connection)
    }

    fn will_remove_connection(&self, connection: &Connection) {
        (**self).will_remove_connection(connection)
    }

    fn did_remove_connection(&self, connection: &Connection) {
        (**self).did_remove_connection(connection)
    }

    fn did_add_link(&self, link: &PropertyLink) {
        (**self).did_add_link(link)
    }

    fn did_remove_link(&self, link: &PropertyLink) {
        (**self).did_remove_link(link)
    }

    fn did_change_property(&self, path: &PropertyPath, value: &PropertyValue) {
        (**self).did_change_property(path, value)
    }

    fn did_invalidate(&self, id: &ProcessorId, level: ValidityLevel) {
        (**self).did_invalidate(id, level)
    }

    fn did_request_evaluation(&self) {
        (**self).did_request_evaluation()
    }

    fn will_process(&self, id: &ProcessorId) {
        (**self).will_process(id)
    }

    fn did_process(&self, id: &ProcessorId, outcome: &ProcessOutcome) {
        (**self).did_process(id, outcome)
    }
}
