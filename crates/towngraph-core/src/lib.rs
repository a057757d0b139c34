//! Towngraph Core Library
//!
//! Weighted, undirected road graph between named towns, with Dijkstra
//! shortest paths and a name-based management façade.

pub mod config;
pub mod error;
pub mod graph;
pub mod loader;
pub mod logging;
pub mod manager;

pub use graph::{Graph, PathOutcome, Road, Town};
pub use manager::TownGraphManager;
