// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

mod context;
mod factory;
mod processor;
mod validity;

pub use context::ProcessContext;
pub use factory::{ProcessorFactory, ProcessorRegistration};
pub use processor::{BoxedProcessor, Processor, ProcessorInfo};
pub use validity::{CodeState, Tags, ValidityLevel};
