// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Test processors shared by the integration tests.

#![allow(dead_code)]

use parking_lot::Mutex;
use std::sync::Arc;

use vizflow::core::error::{NetworkError, Result};
use vizflow::{
    InportSpec, OutportSpec, ProcessContext, Processor, ProcessorFactory, ProcessorInfo,
    Property, Tags,
};

/// Ids of processors in the order their `process()` ran.
#[derive(Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<String>>>);

impl CallLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, id: &str) {
        self.0.lock().push(id.to_string());
    }

    pub fn calls(&self) -> Vec<String> {
        self.0.lock().clone()
    }

    pub fn count(&self, id: &str) -> usize {
        self.0.lock().iter().filter(|c| c.as_str() == id).count()
    }

    pub fn clear(&self) {
        self.0.lock().clear();
    }
}

// =============================================================================
// Test Processors
// =============================================================================

/// Emits its `value` property.
pub struct Source {
    log: CallLog,
}

impl Source {
    pub const CLASS: &'static str = "org.vizflow.test.Source";

    pub fn new(log: &CallLog) -> Self {
        Self { log: log.clone() }
    }
}

impl Processor for Source {
    fn info(&self) -> ProcessorInfo {
        ProcessorInfo::new(Self::CLASS, "Source")
            .category("Data Input")
            .tags(Tags::cpu())
    }

    fn outports(&self) -> Vec<OutportSpec> {
        vec![OutportSpec::of::<u32>("outport")]
    }

    fn properties(&self) -> Vec<Property> {
        vec![Property::new("value", "Value", 1)]
    }

    fn process(&mut self, ctx: &mut ProcessContext<'_>) -> Result<()> {
        self.log.record(ctx.processor_id());
        let value = ctx.property("value").and_then(|v| v.as_int()).unwrap_or(0);
        ctx.set_output("outport", value as u32)
    }
}

/// Multiplies its input by the `factor` property.
pub struct Scale {
    log: CallLog,
}

impl Scale {
    pub const CLASS: &'static str = "org.vizflow.test.Scale";

    pub fn new(log: &CallLog) -> Self {
        Self { log: log.clone() }
    }
}

impl Processor for Scale {
    fn info(&self) -> ProcessorInfo {
        ProcessorInfo::new(Self::CLASS, "Scale").tags(Tags::cpu())
    }

    fn inports(&self) -> Vec<InportSpec> {
        vec![InportSpec::of::<u32>("inport")]
    }

    fn outports(&self) -> Vec<OutportSpec> {
        vec![OutportSpec::of::<u32>("outport")]
    }

    fn properties(&self) -> Vec<Property> {
        vec![Property::new("factor", "Factor", 2)]
    }

    fn process(&mut self, ctx: &mut ProcessContext<'_>) -> Result<()> {
        self.log.record(ctx.processor_id());
        let input = ctx
            .input::<u32>("inport")
            .ok_or_else(|| NetworkError::Processing("missing input".into()))?;
        let factor = ctx.property("factor").and_then(|v| v.as_int()).unwrap_or(1);
        ctx.set_output("outport", *input * factor as u32)
    }
}

/// Adds two inputs; `right` is optional.
pub struct Add {
    log: CallLog,
}

impl Add {
    pub const CLASS: &'static str = "org.vizflow.test.Add";

    pub fn new(log: &CallLog) -> Self {
        Self { log: log.clone() }
    }
}

impl Processor for Add {
    fn info(&self) -> ProcessorInfo {
        ProcessorInfo::new(Self::CLASS, "Add").tags(Tags::cpu())
    }

    fn inports(&self) -> Vec<InportSpec> {
        vec![
            InportSpec::of::<u32>("left"),
            InportSpec::of::<u32>("right").optional(),
        ]
    }

    fn outports(&self) -> Vec<OutportSpec> {
        vec![OutportSpec::of::<u32>("outport")]
    }

    fn process(&mut self, ctx: &mut ProcessContext<'_>) -> Result<()> {
        self.log.record(ctx.processor_id());
        let left = ctx.input::<u32>("left").map(|v| *v).unwrap_or(0);
        let right = ctx.input::<u32>("right").map(|v| *v).unwrap_or(0);
        ctx.set_output("outport", left + right)
    }
}

/// Records every value it receives.
pub struct Sink {
    log: CallLog,
    received: Arc<Mutex<Vec<u32>>>,
}

impl Sink {
    pub const CLASS: &'static str = "org.vizflow.test.Sink";

    pub fn new(log: &CallLog) -> (Self, Arc<Mutex<Vec<u32>>>) {
        let received = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                log: log.clone(),
                received: Arc::clone(&received),
            },
            received,
        )
    }
}

impl Processor for Sink {
    fn info(&self) -> ProcessorInfo {
        ProcessorInfo::new(Self::CLASS, "Sink").tags(Tags::cpu())
    }

    fn inports(&self) -> Vec<InportSpec> {
        vec![InportSpec::of::<u32>("inport")]
    }

    fn process(&mut self, ctx: &mut ProcessContext<'_>) -> Result<()> {
        self.log.record(ctx.processor_id());
        if let Some(value) = ctx.input::<u32>("inport") {
            self.received.lock().push(*value);
        }
        Ok(())
    }
}

/// Passes `input + 1` through, or fails on demand.
///
/// `mode` is `"ok"`, `"error"`, `"panic"` or `"wrong_type"`.
pub struct Flaky {
    log: CallLog,
}

impl Flaky {
    pub const CLASS: &'static str = "org.vizflow.test.Flaky";

    pub fn new(log: &CallLog) -> Self {
        Self { log: log.clone() }
    }
}

impl Processor for Flaky {
    fn info(&self) -> ProcessorInfo {
        ProcessorInfo::new(Self::CLASS, "Flaky").tags(Tags::cpu())
    }

    fn inports(&self) -> Vec<InportSpec> {
        vec![InportSpec::of::<u32>("inport")]
    }

    fn outports(&self) -> Vec<OutportSpec> {
        vec![OutportSpec::of::<u32>("outport")]
    }

    fn properties(&self) -> Vec<Property> {
        vec![Property::new("mode", "Mode", "ok")]
    }

    fn process(&mut self, ctx: &mut ProcessContext<'_>) -> Result<()> {
        self.log.record(ctx.processor_id());
        let input = ctx.input::<u32>("inport").map(|v| *v).unwrap_or(0);

        // Stage first so a failure has to discard it.
        ctx.set_output("outport", input + 1)?;

        match ctx.property("mode").and_then(|v| v.as_str()) {
            Some("error") => Err(NetworkError::Processing("requested failure".into())),
            Some("panic") => panic!("requested panic"),
            Some("wrong_type") => ctx.set_output("outport", String::from("oops")),
            _ => Ok(()),
        }
    }
}

/// GL-tagged processor used to exercise tag filtering.
#[derive(Default)]
pub struct Raycaster;

impl Raycaster {
    pub const CLASS: &'static str = "org.vizflow.test.Raycaster";
}

impl Processor for Raycaster {
    fn info(&self) -> ProcessorInfo {
        ProcessorInfo::new(Self::CLASS, "Raycaster").tags(Tags::gl())
    }

    fn inports(&self) -> Vec<InportSpec> {
        vec![InportSpec::of::<u32>("inport").optional()]
    }

    fn process(&mut self, _ctx: &mut ProcessContext<'_>) -> Result<()> {
        Ok(())
    }
}

/// Factory knowing every test processor, all sharing `log`.
pub fn factory(log: &CallLog) -> ProcessorFactory {
    let mut factory = ProcessorFactory::new();

    let l = log.clone();
    factory
        .register_with(Source::new(log).info(), move || Box::new(Source::new(&l)))
        .unwrap();
    let l = log.clone();
    factory
        .register_with(Scale::new(log).info(), move || Box::new(Scale::new(&l)))
        .unwrap();
    let l = log.clone();
    factory
        .register_with(Add::new(log).info(), move || Box::new(Add::new(&l)))
        .unwrap();
    let l = log.clone();
    factory
        .register_with(Sink::new(log).0.info(), move || Box::new(Sink::new(&l).0))
        .unwrap();
    let l = log.clone();
    factory
        .register_with(Flaky::new(log).info(), move || Box::new(Flaky::new(&l)))
        .unwrap();
    factory.register::<Raycaster>().unwrap();

    factory
}
