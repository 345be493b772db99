// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

pub mod cache;
pub mod config;
pub mod data;
pub mod delegates;
pub mod error;
pub mod execution;
pub mod graph;
pub mod logging;
pub mod ports;
pub mod processors;
pub mod properties;
pub mod serialization;

pub use cache::*;
pub use config::{EvaluationSettings, LoggingSettings, NetworkConfig};
pub use data::*;
pub use delegates::*;
pub use error::*;
pub use execution::*;
pub use graph::*;
pub use logging::init_logging;
pub use ports::*;
pub use processors::*;
pub use properties::*;
pub use serialization::*;
