// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! `vizflow.yaml` loading tests.

mod common;

use std::fs;

use common::{CallLog, Flaky, Raycaster, Source};
use tempfile::TempDir;
use vizflow::{NetworkConfig, NetworkError, ProcessOutcome, ProcessorNetwork};

fn write_config(content: &str) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(NetworkConfig::FILE_NAME), content).unwrap();
    dir
}

#[test]
fn test_load_full_config() {
    let dir = write_config(
        r#"
supported_tags: [CPU]
evaluation:
  catch_panics: false
logging:
  filter: "vizflow=debug"
"#,
    );

    let config = NetworkConfig::load(dir.path()).unwrap();
    assert_eq!(config.supported_tags, Some(vec!["CPU".to_string()]));
    assert!(!config.evaluation.catch_panics);
    assert_eq!(config.logging.filter, "vizflow=debug");
}

#[test]
fn test_load_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        NetworkConfig::load(dir.path()),
        Err(NetworkError::Configuration(_))
    ));
    assert_eq!(NetworkConfig::load_or_default(dir.path()), NetworkConfig::default());
}

#[test]
fn test_invalid_file_falls_back_to_defaults() {
    let dir = write_config("supported_tags: {not: [a list\n");
    assert!(NetworkConfig::load(dir.path()).is_err());
    assert_eq!(NetworkConfig::load_or_default(dir.path()), NetworkConfig::default());
}

#[test]
fn test_supported_tags_gate_processors() {
    let dir = write_config("supported_tags: [CPU]\n");
    let config = NetworkConfig::load(dir.path()).unwrap();
    let log = CallLog::new();

    let mut network = ProcessorNetwork::with_config(config);
    network.add_processor("source", Source::new(&log)).unwrap();
    assert!(matches!(
        network.add_processor("raycaster", Raycaster),
        Err(NetworkError::UnsupportedTags { .. })
    ));
    assert!(!network.contains_processor("raycaster"));
}

#[test]
fn test_network_evaluates_with_configured_settings() {
    let dir = write_config("evaluation:\n  catch_panics: true\n");
    let config = NetworkConfig::load(dir.path()).unwrap();
    let log = CallLog::new();

    let mut network = ProcessorNetwork::with_config(config);
    network.add_processor("source", Source::new(&log)).unwrap();
    network.add_processor("flaky", Flaky::new(&log)).unwrap();
    network.add_connection("source.outport", "flaky.inport").unwrap();
    network.set_property("flaky.mode", "panic").unwrap();

    let report = network.evaluate();
    assert!(matches!(report.outcome("flaky"), Some(ProcessOutcome::Failed(_))));
}

#[test]
fn test_configured_logging_installs_once() {
    let dir = write_config("logging:\n  filter: \"vizflow=trace\"\n");
    let config = NetworkConfig::load(dir.path()).unwrap();

    config.logging.init();
    assert!(!config.logging.init());

    let log = CallLog::new();
    let mut network = ProcessorNetwork::with_config(config);
    network.add_processor("source", Source::new(&log)).unwrap();
    assert_eq!(network.evaluate().processed_count(), 1);
}
