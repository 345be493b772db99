// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Processor network topology: processors, connections and property links.

mod connection;
mod invalidation;
mod link_evaluator;
mod link_unique_id;
mod network;
mod network_lock;
mod node;
mod port_address;
mod processor_id;
mod property_link;
mod traversal;

pub use connection::Connection;
pub use link_unique_id::LinkUniqueId;
pub use network::{NetworkChecksum, ProcessorNetwork};
pub use network_lock::NetworkLock;
pub use node::ProcessorNode;
pub use port_address::{IntoAddress, PortAddress, PropertyPath};
pub use processor_id::ProcessorId;
pub use property_link::PropertyLink;
