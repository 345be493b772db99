// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Document model for saving and restoring networks.

mod document;

pub use document::{DOCUMENT_VERSION, NetworkDocument, ProcessorEntry};
