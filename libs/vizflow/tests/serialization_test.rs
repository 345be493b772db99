// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Network document round-trip tests.

mod common;

use common::{Add, CallLog, Raycaster, Scale, Source, factory};
use vizflow::{
    Connection, DOCUMENT_VERSION, NetworkConfig, NetworkDocument, NetworkError, PortAddress,
    ProcessorFactory, ProcessorNetwork, PropertyLink, PropertyPath,
};

fn sample(log: &CallLog) -> ProcessorNetwork {
    let mut network = ProcessorNetwork::new();
    network.add_processor("volume", Source::new(log)).unwrap();
    network.add_processor("left", Scale::new(log)).unwrap();
    network.add_processor("right", Scale::new(log)).unwrap();
    network.add_processor("sum", Add::new(log)).unwrap();
    network.add_connection("volume.outport", "left.inport").unwrap();
    network.add_connection("volume.outport", "right.inport").unwrap();
    network.add_connection("left.outport", "sum.left").unwrap();
    network.add_connection("right.outport", "sum.right").unwrap();
    network.add_link("left.factor", "right.factor").unwrap();
    network.set_property("left.factor", 5).unwrap();
    network.set_property("volume.value", 3).unwrap();
    network
}

#[test]
fn test_json_round_trip() {
    let log = CallLog::new();
    let original = sample(&log);

    let json = original.serialize().unwrap().to_json().unwrap();
    let document = NetworkDocument::from_json(&json).unwrap();
    assert_eq!(document.version, DOCUMENT_VERSION);
    assert_eq!(document.processors.len(), 4);
    assert_eq!(document.connections.len(), 4);
    assert_eq!(document.links.len(), 1);

    let restored =
        ProcessorNetwork::deserialize(&document, &factory(&log), NetworkConfig::default())
            .unwrap();
    assert_eq!(restored.checksum(), original.checksum());
    assert_eq!(restored.processor_ids(), original.processor_ids());
    assert!(!restored.is_modified());
    assert_eq!(
        restored.property_value("right.factor").unwrap().as_int(),
        Some(5)
    );
}

#[test]
fn test_yaml_round_trip_evaluates() {
    let log = CallLog::new();
    let original = sample(&log);

    let yaml = original.serialize().unwrap().to_yaml().unwrap();
    let document = NetworkDocument::from_yaml(&yaml).unwrap();
    let mut restored =
        ProcessorNetwork::deserialize(&document, &factory(&log), NetworkConfig::default())
            .unwrap();
    assert_eq!(restored.checksum(), original.checksum());

    let report = restored.evaluate();
    assert_eq!(report.processed_count(), 4);
    let sum = restored
        .port_data("sum.outport")
        .and_then(|d| d.downcast::<u32>())
        .map(|v| *v);
    assert_eq!(sum, Some(30));
}

#[test]
fn test_document_shape() {
    let log = CallLog::new();
    let document = sample(&log).serialize().unwrap();
    let value: serde_json::Value = serde_json::from_str(&document.to_json().unwrap()).unwrap();

    assert_eq!(value["processors"][0]["identifier"], "volume");
    assert_eq!(value["processors"][0]["class_identifier"], Source::CLASS);
    assert_eq!(value["processors"][0]["properties"]["value"]["type"], "int");
    assert_eq!(value["processors"][0]["properties"]["value"]["value"], 3);
    assert_eq!(value["connections"][0]["outport"], "left.outport");
    assert_eq!(value["links"][0]["source"], "left.factor");
    assert!(value["links"][0].get("id").is_none());
}

#[test]
fn test_unknown_class_fails_load() {
    let log = CallLog::new();
    let document = sample(&log).serialize().unwrap();

    let empty = ProcessorFactory::new();
    assert!(matches!(
        ProcessorNetwork::deserialize(&document, &empty, NetworkConfig::default()),
        Err(NetworkError::UnknownProcessorClass(_))
    ));
}

#[test]
fn test_stale_connections_and_links_are_skipped() {
    let log = CallLog::new();
    let original = sample(&log);
    let mut document = original.serialize().unwrap();
    document.connections.push(Connection::new(
        PortAddress::new("volume", "outport"),
        PortAddress::new("sum", "gone"),
    ));
    document.links.push(PropertyLink::new(
        PropertyPath::new("left", "factor"),
        PropertyPath::new("missing", "factor"),
    ));

    let mut restored =
        ProcessorNetwork::deserialize(&document, &factory(&log), NetworkConfig::default())
            .unwrap();
    assert_eq!(restored.connections().len(), 4);
    assert_eq!(restored.links().len(), 1);
    assert_eq!(restored.checksum(), original.checksum());
    assert_eq!(restored.evaluate().processed_count(), 4);
}

#[test]
fn test_unsupported_tags_fail_load() {
    let log = CallLog::new();
    let mut network = ProcessorNetwork::new();
    network.add_processor("raycaster", Raycaster).unwrap();
    let document = network.serialize().unwrap();

    let config = NetworkConfig {
        supported_tags: Some(vec!["CPU".to_string()]),
        ..NetworkConfig::default()
    };
    assert!(matches!(
        ProcessorNetwork::deserialize(&document, &factory(&log), config),
        Err(NetworkError::UnsupportedTags { .. })
    ));
}

#[test]
fn test_newer_version_rejected() {
    let document = NetworkDocument::from_json(
        r#"{ "version": 99, "processors": [], "connections": [], "links": [] }"#,
    )
    .unwrap();
    let factory = ProcessorFactory::new();
    assert!(matches!(
        ProcessorNetwork::deserialize(&document, &factory, NetworkConfig::default()),
        Err(NetworkError::Serialization(_))
    ));
}

#[test]
fn test_malformed_address_rejected() {
    let result = NetworkDocument::from_json(
        r#"{ "version": 1, "connections": [{ "outport": "nodot", "inport": "a.b" }] }"#,
    );
    assert!(matches!(result, Err(NetworkError::Serialization(_))));
}
