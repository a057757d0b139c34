//! Name-based façade over the road graph
//!
//! Callers pass plain town and road names; the manager turns them into
//! graph lookups and hands back strings and sorted lists. It holds no state
//! of its own beyond the graph.

use std::io::BufRead;
use std::path::Path;

use crate::error::Result;
use crate::graph::{Graph, PathOutcome, Road, Town};
use crate::loader::{self, LoadOptions, LoadSummary};

#[derive(Debug, Clone, Default)]
pub struct TownGraphManager {
    graph: Graph,
}

impl TownGraphManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only access to the underlying graph
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Add a road, creating either town if needed. Returns whether the road
    /// was created; an existing connection, self-loop, negative weight or
    /// blank name all yield false.
    pub fn add_road(&mut self, town1: &str, town2: &str, weight: i64, road_name: &str) -> bool {
        let source = Town::new(town1);
        let destination = Town::new(town2);
        self.graph.add_vertex(source.clone());
        self.graph.add_vertex(destination.clone());

        match self.graph.add_edge(&source, &destination, weight, road_name) {
            Ok(_) => true,
            Err(err) => {
                tracing::debug!(%source, %destination, error = %err, "add_road rejected");
                false
            }
        }
    }

    /// Name of the road connecting the two towns
    pub fn get_road(&self, town1: &str, town2: &str) -> Option<String> {
        self.graph
            .get_edge(&Town::new(town1), &Town::new(town2))
            .map(|road| road.name().to_string())
    }

    pub fn add_town(&mut self, name: &str) -> bool {
        self.graph.add_vertex(Town::new(name))
    }

    pub fn get_town(&self, name: &str) -> Option<&Town> {
        self.graph.get_vertex(&Town::new(name))
    }

    pub fn contains_town(&self, name: &str) -> bool {
        self.graph.contains_vertex(&Town::new(name))
    }

    pub fn contains_road_connection(&self, town1: &str, town2: &str) -> bool {
        self.graph.contains_edge(&Town::new(town1), &Town::new(town2))
    }

    /// Every road name, sorted; shared names appear once per road
    pub fn all_roads(&self) -> Vec<String> {
        let mut roads: Vec<String> = self
            .graph
            .edge_set()
            .into_iter()
            .map(|road| road.name().to_string())
            .collect();
        roads.sort();
        roads
    }

    /// Remove whatever road connects the pair. `road_name` is not used to
    /// choose a road since a pair has at most one.
    pub fn delete_road_connection(&mut self, town1: &str, town2: &str, road_name: &str) -> bool {
        let source = Town::new(town1);
        let destination = Town::new(town2);
        let Some((weight, stored_name)) = self
            .graph
            .get_edge(&source, &destination)
            .map(|road| (i64::from(road.weight()), road.name().to_string()))
        else {
            return false;
        };

        if stored_name != road_name {
            tracing::debug!(
                requested = road_name,
                stored = %stored_name,
                "deleting road under its stored name"
            );
        }
        self.graph
            .remove_edge(&source, &destination, weight, &stored_name)
    }

    pub fn delete_town(&mut self, name: &str) -> bool {
        self.graph.remove_vertex(&Town::new(name))
    }

    /// Every town name, sorted
    pub fn all_towns(&self) -> Vec<String> {
        let mut towns: Vec<String> = self
            .graph
            .vertex_set()
            .into_iter()
            .map(|town| town.name().to_string())
            .collect();
        towns.sort();
        towns
    }

    /// Roads incident to a town, sorted by road name
    pub fn roads_of(&self, name: &str) -> Vec<&Road> {
        let mut roads: Vec<&Road> = self.graph.edges_of(&Town::new(name)).into_iter().collect();
        roads.sort_by(|a, b| a.name().cmp(b.name()).then_with(|| a.weight().cmp(&b.weight())));
        roads
    }

    /// Shortest path with the reason kept when there is none
    pub fn path_outcome(&self, town1: &str, town2: &str) -> PathOutcome {
        self.graph.find_path(&Town::new(town1), &Town::new(town2))
    }

    /// Hop descriptions of the shortest path. Empty whenever there is no
    /// path: a missing or isolated town, or disjoint components.
    pub fn get_path(&self, town1: &str, town2: &str) -> Vec<String> {
        self.path_outcome(town1, town2).into_descriptions()
    }

    /// Bulk-load `roadName,weight;town1;town2` lines
    pub fn populate_from_reader<R: BufRead>(
        &mut self,
        reader: R,
        options: &LoadOptions,
    ) -> Result<LoadSummary> {
        loader::load_into(&mut self.graph, reader, options)
    }

    /// Bulk-load road data from a file
    pub fn populate_town_graph(
        &mut self,
        path: &Path,
        options: &LoadOptions,
    ) -> Result<LoadSummary> {
        loader::load_file(&mut self.graph, path, options)
    }
}
