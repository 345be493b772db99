// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Property access, property links and link propagation.

use std::collections::VecDeque;

use ahash::AHashSet;

use super::{IntoAddress, LinkUniqueId, ProcessorNetwork, PropertyLink, PropertyPath};
use crate::core::error::{NetworkError, Result};
use crate::core::properties::{Property, PropertyKind, PropertyValue};

impl ProcessorNetwork {
    // =========================================================================
    // Properties
    // =========================================================================

    pub fn property<P: IntoAddress<PropertyPath>>(&self, path: P) -> Result<&Property> {
        let path = path.into_address()?;
        self.processor(&path.processor)
            .and_then(|node| node.property(&path.property))
            .ok_or_else(|| NetworkError::PropertyNotFound(path.to_address()))
    }

    pub fn property_value<P: IntoAddress<PropertyPath>>(&self, path: P) -> Result<&PropertyValue> {
        self.property(path).map(Property::value)
    }

    /// Assign a property value.
    ///
    /// When the value changes, the owner is invalidated at the property's
    /// invalidation level and the change is propagated along links; every
    /// property changed by propagation invalidates its own owner the same way.
    /// The whole wave sends a single evaluation request. Returns whether the
    /// value changed.
    pub fn set_property<P, V>(&mut self, path: P, value: V) -> Result<bool>
    where
        P: IntoAddress<PropertyPath>,
        V: Into<PropertyValue>,
    {
        let path = path.into_address()?;
        if !self.apply_property_value(&path, value.into())? {
            return Ok(false);
        }

        tracing::debug!("Set property {}", path);
        let mut network = self.batch();
        network.property_changed(&path);
        network.evaluate_links_from(&path);

        Ok(true)
    }

    /// Push the value of `origin` along its outgoing links and invalidate the
    /// owners of every property that changed.
    fn evaluate_links_from(&mut self, origin: &PropertyPath) {
        for changed in self.propagate_links(origin) {
            self.property_changed(&changed);
        }
    }

    /// Assign without invalidation or link propagation.
    pub(crate) fn apply_property_value(
        &mut self,
        path: &PropertyPath,
        value: PropertyValue,
    ) -> Result<bool> {
        self.node_mut(&path.processor)
            .and_then(|node| node.property_mut(&path.property))
            .ok_or_else(|| NetworkError::PropertyNotFound(path.to_address()))?
            .set_value(value)
    }

    fn property_changed(&mut self, path: &PropertyPath) {
        let Ok(idx) = self.node_index(&path.processor) else {
            return;
        };
        let Some(property) = self.graph[idx].property(&path.property) else {
            return;
        };
        let level = property.invalidation_level;
        let value = property.value().clone();

        self.notify(|o| o.did_change_property(path, &value));
        self.invalidate_index(idx, level);
    }

    /// Breadth-first propagation from `origin` along outgoing links.
    ///
    /// Each property is visited at most once per pass, which keeps mutual and
    /// cyclic links finite. A destination of a different kind is skipped along
    /// with everything only reachable through it. Returns the properties whose
    /// value changed.
    fn propagate_links(&mut self, origin: &PropertyPath) -> Vec<PropertyPath> {
        let mut changed = Vec::new();
        let mut visited = AHashSet::new();
        visited.insert(origin.clone());
        let mut queue = VecDeque::from([origin.clone()]);

        while let Some(source) = queue.pop_front() {
            let Ok(value) = self.property_value(&source).cloned() else {
                continue;
            };

            let destinations: Vec<PropertyPath> = self
                .links
                .iter()
                .filter(|l| l.source == source)
                .map(|l| l.destination.clone())
                .collect();

            for destination in destinations {
                if !visited.insert(destination.clone()) {
                    continue;
                }
                match self.apply_property_value(&destination, value.clone()) {
                    Ok(true) => {
                        changed.push(destination.clone());
                        queue.push_back(destination);
                    }
                    Ok(false) => queue.push_back(destination),
                    Err(e) => {
                        tracing::trace!("Skipping link {} => {}: {}", source, destination, e);
                    }
                }
            }
        }

        changed
    }

    // =========================================================================
    // Links
    // =========================================================================

    /// Link `source` to `destination`. Cycles and mutual links are allowed.
    pub fn add_link<S, D>(&mut self, source: S, destination: D) -> Result<LinkUniqueId>
    where
        S: IntoAddress<PropertyPath>,
        D: IntoAddress<PropertyPath>,
    {
        let source = source.into_address()?;
        let destination = destination.into_address()?;

        if source == destination {
            return Err(NetworkError::InvalidLink(format!(
                "{} cannot link to itself",
                source
            )));
        }
        self.property(&source)?;
        self.property(&destination)?;

        if self.is_linked(&source, &destination) {
            return Err(NetworkError::DuplicateLink(format!(
                "{} => {}",
                source, destination
            )));
        }

        let link = PropertyLink::new(source, destination);
        let id = link.id.clone();
        self.links.push(link.clone());
        self.set_modified(true);

        tracing::debug!("Added link {}", link);
        self.notify(|o| o.did_add_link(&link));

        Ok(id)
    }

    pub fn remove_link<S, D>(&mut self, source: S, destination: D) -> Result<()>
    where
        S: IntoAddress<PropertyPath>,
        D: IntoAddress<PropertyPath>,
    {
        let source = source.into_address()?;
        let destination = destination.into_address()?;

        let link = self
            .links
            .iter()
            .find(|l| l.joins(&source, &destination))
            .cloned()
            .ok_or_else(|| NetworkError::LinkNotFound(format!("{} => {}", source, destination)))?;

        self.sever_link(&link);
        Ok(())
    }

    pub(crate) fn sever_link(&mut self, link: &PropertyLink) {
        let before = self.links.len();
        self.links.retain(|l| l != link);
        if self.links.len() == before {
            return;
        }

        self.set_modified(true);
        tracing::debug!("Removed link {}", link);
        self.notify(|o| o.did_remove_link(link));
    }

    pub fn is_linked<S, D>(&self, source: S, destination: D) -> bool
    where
        S: IntoAddress<PropertyPath>,
        D: IntoAddress<PropertyPath>,
    {
        match (source.into_address(), destination.into_address()) {
            (Ok(source), Ok(destination)) => {
                self.links.iter().any(|l| l.joins(&source, &destination))
            }
            _ => false,
        }
    }

    /// True when links exist in both directions between `a` and `b`.
    pub fn is_linked_bidirectional<A, B>(&self, a: A, b: B) -> bool
    where
        A: IntoAddress<PropertyPath>,
        B: IntoAddress<PropertyPath>,
    {
        match (a.into_address(), b.into_address()) {
            (Ok(a), Ok(b)) => self.is_linked(&a, &b) && self.is_linked(&b, &a),
            _ => false,
        }
    }

    /// All links in creation order.
    pub fn links(&self) -> &[PropertyLink] {
        &self.links
    }

    /// Links joining properties of `a` and `b`, in either direction.
    pub fn links_between_processors(&self, a: &str, b: &str) -> Vec<&PropertyLink> {
        self.links
            .iter()
            .filter(|l| {
                let (src, dst) = (l.source.processor.as_str(), l.destination.processor.as_str());
                (src == a && dst == b) || (src == b && dst == a)
            })
            .collect()
    }

    /// Link the properties of processor `id` to matching properties of the
    /// other processors.
    ///
    /// A property matches when identifier and kind are equal; the first match
    /// in processor insertion order wins. Each match is linked in both
    /// directions and the existing value is copied into the new processor.
    /// Returns the created links.
    pub fn auto_link_processor(&mut self, id: &str) -> Result<Vec<LinkUniqueId>> {
        let idx = self.node_index(id)?;
        let owner = self.graph[idx].id.clone();
        let targets: Vec<(String, PropertyKind)> = self.graph[idx]
            .properties()
            .iter()
            .map(|p| (p.identifier.clone(), p.kind()))
            .collect();

        let mut network = self.batch();
        let mut created = Vec::new();
        for (identifier, kind) in targets {
            let candidate = network
                .processors()
                .into_iter()
                .filter(|node| node.id() != &owner)
                .find(|node| {
                    node.property(&identifier)
                        .is_some_and(|p| p.kind() == kind)
                })
                .map(|node| PropertyPath::new(node.id().clone(), identifier.clone()));
            let Some(source) = candidate else {
                continue;
            };
            let destination = PropertyPath::new(owner.clone(), identifier);

            if !network.is_linked(&source, &destination) {
                created.push(network.add_link(&source, &destination)?);
            }
            network.evaluate_links_from(&source);
            if !network.is_linked(&destination, &source) {
                created.push(network.add_link(&destination, &source)?);
            }
        }

        if !created.is_empty() {
            tracing::debug!("Auto-linked {} properties of '{}'", created.len(), owner);
        }
        Ok(created)
    }

    /// Properties a change of `path` would reach through links, transitively.
    pub fn properties_linked_to<P: IntoAddress<PropertyPath>>(&self, path: P) -> Vec<PropertyPath> {
        let Ok(origin) = path.into_address() else {
            return Vec::new();
        };

        let mut reached = Vec::new();
        let mut visited = AHashSet::new();
        visited.insert(origin.clone());
        let mut queue = VecDeque::from([origin]);

        while let Some(source) = queue.pop_front() {
            for link in self.links.iter().filter(|l| l.source == source) {
                if visited.insert(link.destination.clone()) {
                    reached.push(link.destination.clone());
                    queue.push_back(link.destination.clone());
                }
            }
        }

        reached
    }
}
