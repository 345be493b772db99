// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Network configuration.

mod network_config;

pub use network_config::{EvaluationSettings, LoggingSettings, NetworkConfig};
