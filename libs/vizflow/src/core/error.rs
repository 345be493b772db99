// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

use thiserror::Error;

/// Errors raised by the processor network core.
///
/// Structural variants are returned synchronously by the mutating call and
/// leave the network unchanged. Processing variants come out of a processor's
/// `process()` and are recovered by the evaluator.
#[derive(Error, Debug)]
pub enum NetworkError {
    #[error("Processor already exists: {0}")]
    DuplicateProcessor(String),

    #[error("Processor not found: {0}")]
    ProcessorNotFound(String),

    #[error("Port not found: {0}")]
    PortNotFound(String),

    #[error("Invalid address '{0}', expected 'processor.name'")]
    InvalidAddress(String),

    #[error("Inport {0} is already connected")]
    InportAlreadyConnected(String),

    #[error("Incompatible ports: {outport} ({outport_type}) cannot feed {inport} ({inport_type})")]
    IncompatiblePorts {
        outport: String,
        outport_type: String,
        inport: String,
        inport_type: String,
    },

    #[error("Connection already exists: {0}")]
    DuplicateConnection(String),

    #[error("Connection not found: {0}")]
    ConnectionNotFound(String),

    #[error("Connection {0} would create a cycle")]
    WouldCreateCycle(String),

    #[error("Link already exists: {0}")]
    DuplicateLink(String),

    #[error("Link not found: {0}")]
    LinkNotFound(String),

    #[error("Invalid link: {0}")]
    InvalidLink(String),

    #[error("Property not found: {0}")]
    PropertyNotFound(String),

    #[error("Property {property} holds {expected} values, got {actual}")]
    PropertyTypeMismatch {
        property: String,
        expected: String,
        actual: String,
    },

    #[error("Processor '{processor}' uses unsupported tags: {tags}")]
    UnsupportedTags { processor: String, tags: String },

    #[error("Unknown processor class: {0}")]
    UnknownProcessorClass(String),

    #[error("Processor class already registered: {0}")]
    DuplicateProcessorClass(String),

    #[error("Processing failed: {0}")]
    Processing(String),

    #[error("Port type mismatch on {port}: expected {expected}, got {actual}")]
    PortTypeMismatch {
        port: String,
        expected: String,
        actual: String,
    },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Invalid configuration: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<serde_json::Error> for NetworkError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e.to_string())
    }
}

impl From<serde_yaml::Error> for NetworkError {
    fn from(e: serde_yaml::Error) -> Self {
        Self::Serialization(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, NetworkError>;
