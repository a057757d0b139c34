//! Vertex and edge storage for the road graph

use crate::error::{GraphError, Result};
use crate::graph::algos::dijkstra_path;
use crate::graph::types::{PathOutcome, Road, RoadKey, Town};
use crate::graph::GraphProvider;
use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

/// Undirected weighted graph of towns and roads.
///
/// Each town maps to the set of its neighbors; every road is stored exactly
/// once, keyed by its unordered endpoint pair. Removing a town removes all
/// of its roads.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adjacency: HashMap<Town, HashSet<Town>>,
    roads: HashMap<RoadKey, Road>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `town` if absent. Returns false for a repeat or a blank name.
    pub fn add_vertex(&mut self, town: Town) -> bool {
        if !town.is_valid() {
            tracing::warn!(town = %town, "rejected blank town name");
            return false;
        }

        match self.adjacency.entry(town) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                tracing::debug!(town = %slot.key(), "add_vertex");
                slot.insert(HashSet::new());
                true
            }
        }
    }

    pub fn contains_vertex(&self, town: &Town) -> bool {
        self.adjacency.contains_key(town)
    }

    /// The stored vertex equal to `town`
    pub fn get_vertex(&self, town: &Town) -> Option<&Town> {
        self.adjacency.get_key_value(town).map(|(stored, _)| stored)
    }

    /// Remove `town` and every road touching it
    pub fn remove_vertex(&mut self, town: &Town) -> bool {
        let Some(neighbors) = self.adjacency.remove(town) else {
            return false;
        };

        for neighbor in &neighbors {
            if let Some(theirs) = self.adjacency.get_mut(neighbor) {
                theirs.remove(town);
            }
            self.roads.remove(&RoadKey::new(town, neighbor));
        }

        tracing::debug!(town = %town, roads_removed = neighbors.len(), "remove_vertex");
        true
    }

    pub fn vertex_set(&self) -> HashSet<&Town> {
        self.adjacency.keys().collect()
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Connect two existing, distinct towns.
    ///
    /// Fails on a blank road name, a negative weight, a self-loop, a missing
    /// endpoint, or when the pair is already connected.
    pub fn add_edge(
        &mut self,
        town1: &Town,
        town2: &Town,
        weight: i64,
        name: &str,
    ) -> Result<&Road> {
        if name.trim().is_empty() {
            return Err(GraphError::invalid_name("road", name));
        }
        if weight < 0 {
            return Err(GraphError::NegativeWeight { weight });
        }
        let weight = u32::try_from(weight).map_err(|_| GraphError::WeightOutOfRange { weight })?;

        if town1 == town2 {
            return Err(GraphError::SelfLoop {
                town: town1.name().to_string(),
            });
        }
        for town in [town1, town2] {
            if !self.contains_vertex(town) {
                return Err(GraphError::MissingVertex {
                    town: town.name().to_string(),
                });
            }
        }

        match self.roads.entry(RoadKey::new(town1, town2)) {
            Entry::Occupied(existing) => Err(GraphError::DuplicateEdge {
                town1: town1.name().to_string(),
                town2: town2.name().to_string(),
                existing: existing.get().name().to_string(),
            }),
            Entry::Vacant(slot) => {
                if let Some(neighbors) = self.adjacency.get_mut(town1) {
                    neighbors.insert(town2.clone());
                }
                if let Some(neighbors) = self.adjacency.get_mut(town2) {
                    neighbors.insert(town1.clone());
                }
                tracing::debug!(from = %town1, to = %town2, weight, road = name, "add_edge");
                Ok(slot.insert(Road::new(town1.clone(), town2.clone(), weight, name)))
            }
        }
    }

    /// The road joining the pair in either order
    pub fn get_edge(&self, town1: &Town, town2: &Town) -> Option<&Road> {
        self.roads.get(&RoadKey::new(town1, town2))
    }

    pub fn contains_edge(&self, town1: &Town, town2: &Town) -> bool {
        self.get_edge(town1, town2).is_some()
    }

    /// Remove the road joining the pair. `weight` and `name` must match the
    /// stored road; they are checked, not used to pick among roads.
    pub fn remove_edge(&mut self, town1: &Town, town2: &Town, weight: i64, name: &str) -> bool {
        let key = RoadKey::new(town1, town2);
        let Some(road) = self.roads.get(&key) else {
            return false;
        };

        if i64::from(road.weight()) != weight || road.name() != name {
            tracing::warn!(
                from = %town1,
                to = %town2,
                stored_weight = road.weight(),
                stored_name = road.name(),
                weight,
                name,
                "remove_edge arguments do not match stored road"
            );
            return false;
        }

        self.roads.remove(&key);
        if let Some(neighbors) = self.adjacency.get_mut(town1) {
            neighbors.remove(town2);
        }
        if let Some(neighbors) = self.adjacency.get_mut(town2) {
            neighbors.remove(town1);
        }
        tracing::debug!(from = %town1, to = %town2, road = name, "remove_edge");
        true
    }

    pub fn edge_set(&self) -> HashSet<&Road> {
        self.roads.values().collect()
    }

    pub fn edge_count(&self) -> usize {
        self.roads.len()
    }

    /// Roads incident to `town`; empty when it is isolated or absent
    pub fn edges_of(&self, town: &Town) -> HashSet<&Road> {
        self.roads_from(town).into_iter().map(|(_, road)| road).collect()
    }

    /// Full path search result, keeping the reason when there is no path
    pub fn find_path(&self, source: &Town, destination: &Town) -> PathOutcome {
        dijkstra_path(self, source, destination)
    }

    /// Hop descriptions of the shortest route, or `None` when there is none
    pub fn shortest_path(&self, source: &Town, destination: &Town) -> Option<Vec<String>> {
        match self.find_path(source, destination) {
            found @ PathOutcome::Found(_) => Some(found.into_descriptions()),
            _ => None,
        }
    }
}

impl GraphProvider for Graph {
    fn lookup(&self, town: &Town) -> Option<&Town> {
        self.get_vertex(town)
    }

    fn roads_from(&self, town: &Town) -> Vec<(&Town, &Road)> {
        let Some(neighbors) = self.adjacency.get(town) else {
            return Vec::new();
        };

        neighbors
            .iter()
            .filter_map(|neighbor| {
                self.roads
                    .get(&RoadKey::new(town, neighbor))
                    .map(|road| (neighbor, road))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests;
