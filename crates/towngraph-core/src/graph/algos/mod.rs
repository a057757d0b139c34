//! Graph traversal algorithms

pub mod dijkstra;

pub use dijkstra::dijkstra_path;
