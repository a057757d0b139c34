//! Undirected weighted road graph
//!
//! Provides the graph engine and its algorithms:
//! - `Graph`: vertex/edge storage keyed by town name
//! - Dijkstra path-finding for minimum-distance routes
//! - Graph provider trait decoupling algorithms from storage

pub mod algos;
pub mod engine;
pub mod path;
pub mod traversal;
pub mod types;

pub use algos::dijkstra_path;
pub use engine::Graph;
pub use traversal::GraphProvider;
pub use types::{Hop, PathOutcome, Road, Town, DISTANCE_UNIT};
