// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

use std::hash::{BuildHasher, Hash, Hasher};
use std::sync::Arc;

use ahash::AHashMap;
use petgraph::Direction;
use petgraph::algo::has_path_connecting;
use petgraph::dot::Dot;
use petgraph::stable_graph::{EdgeIndex, NodeIndex, StableDiGraph};
use petgraph::visit::EdgeRef;

use super::{Connection, IntoAddress, PortAddress, ProcessorId, ProcessorNode, PropertyLink};
use crate::core::config::NetworkConfig;
use crate::core::delegates::NetworkObserver;
use crate::core::error::{NetworkError, Result};
use crate::core::ports::{Outport, PortData};
use crate::core::processors::{BoxedProcessor, Processor, ValidityLevel};

/// Fixed seeds so checksums are comparable across networks and runs.
const CHECKSUM_SEEDS: (u64, u64, u64, u64) = (
    0x243f_6a88_85a3_08d3,
    0x1319_8a2e_0370_7344,
    0xa409_3822_299f_31d0,
    0x082e_fa98_ec4e_6c89,
);

/// Checksum of a network's structure and property values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NetworkChecksum(pub u64);

/// Owner of processors, connections and property links.
///
/// The network is the single invalidation authority: every structural or
/// property mutation goes through it, leaves the graph structurally valid, and
/// pushes the resulting validity changes downstream. Connections form a DAG;
/// property links form a separate graph that may contain cycles.
pub struct ProcessorNetwork {
    pub(crate) graph: StableDiGraph<ProcessorNode, Connection>,
    pub(crate) index: AHashMap<ProcessorId, NodeIndex>,
    pub(crate) links: Vec<PropertyLink>,
    observers: Vec<Arc<dyn NetworkObserver>>,
    config: NetworkConfig,
    modified: bool,
    next_seq: u64,
    evaluation_counter: u64,
    pub(crate) lock_depth: u32,
    pub(crate) evaluation_pending: bool,
}

impl ProcessorNetwork {
    pub fn new() -> Self {
        Self::with_config(NetworkConfig::default())
    }

    pub fn with_config(config: NetworkConfig) -> Self {
        Self {
            graph: StableDiGraph::new(),
            index: AHashMap::new(),
            links: Vec::new(),
            observers: Vec::new(),
            config,
            modified: false,
            next_seq: 0,
            evaluation_counter: 0,
            lock_depth: 0,
            evaluation_pending: false,
        }
    }

    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    // =========================================================================
    // Observers
    // =========================================================================

    pub fn add_observer(&mut self, observer: Arc<dyn NetworkObserver>) {
        self.observers.push(observer);
    }

    /// Remove a previously added observer (compared by pointer).
    pub fn remove_observer(&mut self, observer: &Arc<dyn NetworkObserver>) -> bool {
        let before = self.observers.len();
        self.observers.retain(|o| !Arc::ptr_eq(o, observer));
        before != self.observers.len()
    }

    pub(crate) fn notify(&self, f: impl Fn(&dyn NetworkObserver)) {
        for observer in &self.observers {
            f(observer.as_ref());
        }
    }

    // =========================================================================
    // Processors
    // =========================================================================

    /// Add a processor under `id`. It starts at `InvalidResources`.
    pub fn add_processor<P: Processor>(
        &mut self,
        id: impl Into<ProcessorId>,
        processor: P,
    ) -> Result<&ProcessorNode> {
        self.add_boxed_processor(id, Box::new(processor))
    }

    pub fn add_boxed_processor(
        &mut self,
        id: impl Into<ProcessorId>,
        processor: BoxedProcessor,
    ) -> Result<&ProcessorNode> {
        let id = id.into();
        if !id.is_valid() {
            return Err(NetworkError::InvalidAddress(id.to_string()));
        }
        if self.index.contains_key(&id) {
            return Err(NetworkError::DuplicateProcessor(id.to_string()));
        }

        let info = processor.info();
        let unsupported = self.config.unsupported_tags(&info.tags);
        if !unsupported.is_empty() {
            return Err(NetworkError::UnsupportedTags {
                processor: id.to_string(),
                tags: unsupported.join(", "),
            });
        }

        self.notify(|o| o.will_add_processor(&id));

        let node = ProcessorNode::new(id.clone(), processor, self.next_seq);
        self.next_seq += 1;
        let idx = self.graph.add_node(node);
        self.index.insert(id.clone(), idx);
        self.modified = true;

        tracing::debug!("Added processor '{}' ({})", id, info.class_identifier);
        self.notify(|o| o.did_add_processor(&id));
        self.notify(|o| o.did_invalidate(&id, ValidityLevel::InvalidResources));
        self.request_evaluation();

        Ok(&self.graph[idx])
    }

    /// Remove a processor with all its connections and links, returning its
    /// behavior to the caller.
    pub fn remove_processor(&mut self, id: &str) -> Result<BoxedProcessor> {
        let idx = self.node_index(id)?;
        let id = self.graph[idx].id.clone();

        self.notify(|o| o.will_remove_processor(&id));

        let connections: Vec<Connection> = self
            .graph
            .edges_directed(idx, Direction::Incoming)
            .chain(self.graph.edges_directed(idx, Direction::Outgoing))
            .map(|e| e.weight().clone())
            .collect();
        for connection in &connections {
            self.sever_connection(connection);
        }

        let links: Vec<PropertyLink> = self
            .links
            .iter()
            .filter(|l| l.involves_processor(&id))
            .cloned()
            .collect();
        for link in &links {
            self.sever_link(link);
        }

        let node = self
            .graph
            .remove_node(idx)
            .ok_or_else(|| NetworkError::ProcessorNotFound(id.to_string()))?;
        self.index.remove(&id);
        self.modified = true;

        tracing::debug!(
            "Removed processor '{}' ({} connections, {} links)",
            id,
            connections.len(),
            links.len()
        );
        self.notify(|o| o.did_remove_processor(&id));

        Ok(node.processor)
    }

    /// Re-key a processor, rewriting every connection and link endpoint.
    pub fn rename_processor(&mut self, old_id: &str, new_id: impl Into<ProcessorId>) -> Result<()> {
        let new_id = new_id.into();
        let idx = self.node_index(old_id)?;
        let old_id = self.graph[idx].id.clone();

        if old_id == new_id {
            return Ok(());
        }
        if !new_id.is_valid() {
            return Err(NetworkError::InvalidAddress(new_id.to_string()));
        }
        if self.index.contains_key(&new_id) {
            return Err(NetworkError::DuplicateProcessor(new_id.to_string()));
        }

        self.graph[idx].id = new_id.clone();
        self.index.remove(&old_id);
        self.index.insert(new_id.clone(), idx);

        let incoming: Vec<EdgeIndex> = self
            .graph
            .edges_directed(idx, Direction::Incoming)
            .map(|e| e.id())
            .collect();
        for edge in incoming {
            self.graph[edge].rename_processor(&old_id, &new_id);
        }

        let outgoing: Vec<(EdgeIndex, NodeIndex)> = self
            .graph
            .edges_directed(idx, Direction::Outgoing)
            .map(|e| (e.id(), e.target()))
            .collect();
        for (edge, target) in outgoing {
            self.graph[edge].rename_processor(&old_id, &new_id);
            let connection = self.graph[edge].clone();
            if let Some(inport) = self.graph[target].inport_mut(&connection.inport.port) {
                inport.retarget(connection.outport);
            }
        }

        for link in &mut self.links {
            link.rename_processor(&old_id, &new_id);
        }

        self.modified = true;
        tracing::debug!("Renamed processor '{}' to '{}'", old_id, new_id);
        self.notify(|o| o.did_rename_processor(&old_id, &new_id));

        Ok(())
    }

    /// Remove every processor, in insertion order.
    pub fn clear(&mut self) -> Result<()> {
        let ids: Vec<ProcessorId> = self.processors().iter().map(|n| n.id.clone()).collect();
        for id in ids {
            self.remove_processor(&id)?;
        }
        Ok(())
    }

    pub fn processor(&self, id: &str) -> Option<&ProcessorNode> {
        self.index.get(id).map(|&idx| &self.graph[idx])
    }

    pub fn contains_processor(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// All processors in insertion order.
    pub fn processors(&self) -> Vec<&ProcessorNode> {
        let mut nodes: Vec<&ProcessorNode> = self.graph.node_weights().collect();
        nodes.sort_by_key(|n| n.seq);
        nodes
    }

    pub fn processor_ids(&self) -> Vec<ProcessorId> {
        self.processors().into_iter().map(|n| n.id.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.graph.node_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    pub(crate) fn node_index(&self, id: &str) -> Result<NodeIndex> {
        self.index
            .get(id)
            .copied()
            .ok_or_else(|| NetworkError::ProcessorNotFound(id.to_string()))
    }

    pub(crate) fn node_mut(&mut self, id: &str) -> Option<&mut ProcessorNode> {
        let idx = *self.index.get(id)?;
        self.graph.node_weight_mut(idx)
    }

    // =========================================================================
    // Connections
    // =========================================================================

    /// Connect `outport` to `inport`, invalidating the inport's processor.
    pub fn add_connection<O, I>(&mut self, outport: O, inport: I) -> Result<()>
    where
        O: IntoAddress<PortAddress>,
        I: IntoAddress<PortAddress>,
    {
        let outport = outport.into_address()?;
        let inport = inport.into_address()?;

        let out_idx = self.node_index(&outport.processor)?;
        let in_idx = self.node_index(&inport.processor)?;

        let out_type = self.graph[out_idx]
            .outport(&outport.port)
            .ok_or_else(|| NetworkError::PortNotFound(outport.to_address()))?
            .data_type()
            .clone();
        let target = self.graph[in_idx]
            .inport(&inport.port)
            .ok_or_else(|| NetworkError::PortNotFound(inport.to_address()))?;

        let connection = Connection::new(outport, inport);

        if let Some(existing) = target.connected_outport() {
            if existing == &connection.outport {
                return Err(NetworkError::DuplicateConnection(connection.to_string()));
            }
            return Err(NetworkError::InportAlreadyConnected(
                connection.inport.to_address(),
            ));
        }

        if !out_type.can_feed(target.data_type()) {
            return Err(NetworkError::IncompatiblePorts {
                outport: connection.outport.to_address(),
                outport_type: out_type.to_string(),
                inport: connection.inport.to_address(),
                inport_type: target.data_type().to_string(),
            });
        }

        if out_idx == in_idx || has_path_connecting(&self.graph, in_idx, out_idx, None) {
            return Err(NetworkError::WouldCreateCycle(connection.to_string()));
        }

        if let Some(port) = self.graph[in_idx].inport_mut(&connection.inport.port) {
            port.connect(connection.outport.clone());
        }
        self.graph.add_edge(out_idx, in_idx, connection.clone());
        self.modified = true;

        tracing::debug!("Added connection {}", connection);
        self.notify(|o| o.did_add_connection(&connection));
        self.invalidate_index(in_idx, ValidityLevel::InvalidOutput);

        Ok(())
    }

    /// Disconnect `outport` from `inport`, invalidating the inport's processor.
    pub fn remove_connection<O, I>(&mut self, outport: O, inport: I) -> Result<()>
    where
        O: IntoAddress<PortAddress>,
        I: IntoAddress<PortAddress>,
    {
        let connection = Connection::new(outport.into_address()?, inport.into_address()?);

        if self.find_edge(&connection).is_none() {
            return Err(NetworkError::ConnectionNotFound(connection.to_string()));
        }

        self.sever_connection(&connection);
        Ok(())
    }

    pub fn is_connected<O, I>(&self, outport: O, inport: I) -> bool
    where
        O: IntoAddress<PortAddress>,
        I: IntoAddress<PortAddress>,
    {
        match (outport.into_address(), inport.into_address()) {
            (Ok(outport), Ok(inport)) => self.find_edge(&Connection::new(outport, inport)).is_some(),
            _ => false,
        }
    }

    /// All connections, sorted by address.
    pub fn connections(&self) -> Vec<Connection> {
        let mut connections: Vec<Connection> = self.graph.edge_weights().cloned().collect();
        connections.sort();
        connections
    }

    /// Connections touching a processor, sorted by address.
    pub fn connections_of(&self, id: &str) -> Vec<Connection> {
        let Some(&idx) = self.index.get(id) else {
            return Vec::new();
        };
        let mut connections: Vec<Connection> = self
            .graph
            .edges_directed(idx, Direction::Incoming)
            .chain(self.graph.edges_directed(idx, Direction::Outgoing))
            .map(|e| e.weight().clone())
            .collect();
        connections.sort();
        connections
    }

    /// Current payload of an outport.
    pub fn port_data<A: IntoAddress<PortAddress>>(&self, outport: A) -> Option<&PortData> {
        let address = outport.into_address().ok()?;
        self.outport(&address)?.data()
    }

    pub(crate) fn outport(&self, address: &PortAddress) -> Option<&Outport> {
        self.processor(&address.processor)?.outport(&address.port)
    }

    fn find_edge(&self, connection: &Connection) -> Option<EdgeIndex> {
        let from = *self.index.get(connection.source().as_str())?;
        self.graph
            .edges_directed(from, Direction::Outgoing)
            .find(|e| e.weight() == connection)
            .map(|e| e.id())
    }

    /// Remove an existing connection with notifications and invalidation.
    fn sever_connection(&mut self, connection: &Connection) {
        let Some(edge) = self.find_edge(connection) else {
            return;
        };

        self.notify(|o| o.will_remove_connection(connection));

        let target = self.graph.edge_endpoints(edge).map(|(_, target)| target);
        self.graph.remove_edge(edge);
        if let Some(target) = target {
            if let Some(inport) = self.graph[target].inport_mut(&connection.inport.port) {
                inport.disconnect();
            }
        }
        self.modified = true;

        tracing::debug!("Removed connection {}", connection);
        self.notify(|o| o.did_remove_connection(connection));

        if let Some(target) = target {
            self.invalidate_index(target, ValidityLevel::InvalidOutput);
        }
    }

    // =========================================================================
    // Modification tracking and diagnostics
    // =========================================================================

    /// True after any structural change since the last `set_modified(false)`.
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    pub fn set_modified(&mut self, modified: bool) {
        self.modified = modified;
    }

    /// Number of successful `process()` calls stamped so far.
    pub fn evaluation_count(&self) -> u64 {
        self.evaluation_counter
    }

    pub(crate) fn next_evaluation_stamp(&self) -> u64 {
        self.evaluation_counter + 1
    }

    pub(crate) fn advance_evaluation_counter(&mut self) -> u64 {
        self.evaluation_counter += 1;
        self.evaluation_counter
    }

    /// Compute deterministic checksum of processors, property values,
    /// connections and links. Independent of insertion order.
    pub fn checksum(&self) -> NetworkChecksum {
        let (k0, k1, k2, k3) = CHECKSUM_SEEDS;
        let mut hasher = ahash::RandomState::with_seeds(k0, k1, k2, k3).build_hasher();

        let mut nodes: Vec<&ProcessorNode> = self.graph.node_weights().collect();
        nodes.sort_by(|a, b| a.id.cmp(&b.id));
        for node in nodes {
            node.id.hash(&mut hasher);
            node.info.class_identifier.hash(&mut hasher);
            for property in &node.properties {
                property.identifier.hash(&mut hasher);
                format!("{:?}", property.value()).hash(&mut hasher);
            }
        }

        for connection in self.connections() {
            connection.hash(&mut hasher);
        }

        let mut links: Vec<_> = self
            .links
            .iter()
            .map(|l| (&l.source, &l.destination))
            .collect();
        links.sort();
        for (source, destination) in links {
            source.hash(&mut hasher);
            destination.hash(&mut hasher);
        }

        NetworkChecksum(hasher.finish())
    }

    /// Graphviz rendering of the connection graph.
    pub fn to_dot(&self) -> String {
        format!("{}", Dot::with_config(&self.graph, &[]))
    }
}

impl Default for ProcessorNetwork {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ProcessorNetwork {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ProcessorNetwork {{ processors: {}, connections: {}, links: {} }}",
            self.graph.node_count(),
            self.graph.edge_count(),
            self.links.len()
        )
    }
}
