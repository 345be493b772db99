// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Processor network execution core.
//!
//! A [`ProcessorNetwork`](core::ProcessorNetwork) owns processors, the typed
//! port connections between them and the property links that keep their
//! settings in sync. A [`NetworkEvaluator`](core::NetworkEvaluator) walks the
//! network in dependency order and runs the processors whose validity requires
//! it. Image and volume reuse caches hand out pooled buffers so processors do
//! not reallocate on every pass.

#![allow(clippy::type_complexity)] // Complex types are clear in context

pub mod core;

pub use core::{
    BoxedProcessor, CodeState, Connection, DOCUMENT_VERSION, DataFormat, DataType,
    EvaluationReport, EvaluationSettings, FactoryDelegate, Image, ImageReuseCache, InportSpec,
    IntoAddress, LinkUniqueId, NetworkChecksum, NetworkConfig, NetworkDocument, NetworkError,
    NetworkEvaluator, NetworkLock, NetworkObserver, OutportSpec, PortAddress, PortData,
    ProcessContext, ProcessOutcome, Processor, ProcessorEntry, ProcessorFactory, ProcessorId,
    ProcessorInfo, ProcessorNetwork, ProcessorNode, Property, PropertyKind, PropertyLink,
    PropertyPath, PropertyValue, Result, ReusePool, Tags, ValidityLevel, Volume, VolumeConfig,
    VolumeReuseCache, init_logging,
};
