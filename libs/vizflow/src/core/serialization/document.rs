// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

use serde::{Deserialize, Serialize};

use crate::core::config::NetworkConfig;
use crate::core::delegates::FactoryDelegate;
use crate::core::error::{NetworkError, Result};
use crate::core::graph::{Connection, ProcessorId, ProcessorNetwork, PropertyLink, PropertyPath};
use crate::core::properties::PropertyValue;

/// Current document format version.
pub const DOCUMENT_VERSION: u32 = 1;

/// A processor as stored in a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessorEntry {
    pub identifier: ProcessorId,
    pub class_identifier: String,
    /// Property values by identifier, in declaration order.
    #[serde(default)]
    pub properties: serde_json::Map<String, serde_json::Value>,
}

/// Serializable snapshot of a network's structure and property values.
///
/// Validity, port data and evaluation stamps are runtime state and are not
/// stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkDocument {
    pub version: u32,
    #[serde(default)]
    pub processors: Vec<ProcessorEntry>,
    #[serde(default)]
    pub connections: Vec<Connection>,
    #[serde(default)]
    pub links: Vec<PropertyLink>,
}

impl NetworkDocument {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }
}

impl ProcessorNetwork {
    /// Snapshot processors (insertion order), connections and links.
    pub fn serialize(&self) -> Result<NetworkDocument> {
        let mut processors = Vec::with_capacity(self.len());
        for node in self.processors() {
            let mut properties = serde_json::Map::new();
            for property in node.properties() {
                properties.insert(
                    property.identifier.clone(),
                    serde_json::to_value(property.value())?,
                );
            }
            processors.push(ProcessorEntry {
                identifier: node.id().clone(),
                class_identifier: node.info().class_identifier.clone(),
                properties,
            });
        }

        Ok(NetworkDocument {
            version: DOCUMENT_VERSION,
            processors,
            connections: self.connections(),
            links: self.links().to_vec(),
        })
    }

    /// Rebuild a network from a document.
    ///
    /// Processors are created through `factory`; an unknown class fails the
    /// whole load. Connections and links that can no longer be established
    /// are logged and skipped. Stored property values are applied without
    /// link propagation. The result is unmodified and fully invalid.
    pub fn deserialize(
        document: &NetworkDocument,
        factory: &dyn FactoryDelegate,
        config: NetworkConfig,
    ) -> Result<Self> {
        if document.version > DOCUMENT_VERSION {
            return Err(NetworkError::Serialization(format!(
                "Unsupported document version {} (newest supported is {})",
                document.version, DOCUMENT_VERSION
            )));
        }

        let mut network = ProcessorNetwork::with_config(config);

        for entry in &document.processors {
            if !factory.can_create(&entry.class_identifier) {
                return Err(NetworkError::UnknownProcessorClass(
                    entry.class_identifier.clone(),
                ));
            }
            let processor = factory.create(&entry.class_identifier)?;
            network.add_boxed_processor(entry.identifier.clone(), processor)?;

            for (identifier, value) in &entry.properties {
                let value: PropertyValue = serde_json::from_value(value.clone())?;
                let path = PropertyPath::new(entry.identifier.clone(), identifier.clone());
                network.apply_property_value(&path, value)?;
            }
        }

        let mut skipped = 0;
        for (i, connection) in document.connections.iter().enumerate() {
            if let Err(e) = network.add_connection(&connection.outport, &connection.inport) {
                tracing::warn!("Unable to restore connection #{} ({}): {}", i, connection, e);
                skipped += 1;
            }
        }

        for (i, link) in document.links.iter().enumerate() {
            if let Err(e) = network.add_link(&link.source, &link.destination) {
                tracing::warn!("Unable to restore link #{} ({}): {}", i, link, e);
                skipped += 1;
            }
        }

        network.set_modified(false);
        tracing::debug!(
            "Deserialized network with {} processors, {} connections, {} links ({} skipped)",
            network.len(),
            network.connections().len(),
            network.links().len(),
            skipped
        );

        Ok(network)
    }
}
