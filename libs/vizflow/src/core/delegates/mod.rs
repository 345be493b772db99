// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Delegate traits for extensible network behavior.
//!
//! - Factory: how processors are instantiated during deserialization
//! - Observer: structural, property, validity and evaluation notifications

mod factory;
mod network_observer;

pub use factory::FactoryDelegate;
pub use network_observer::NetworkObserver;
