use crate::graph::types::{Road, Town};

/// Trait for providing graph adjacency to path algorithms
pub trait GraphProvider {
    /// The stored instance equal to `town`, if it is a vertex
    fn lookup(&self, town: &Town) -> Option<&Town>;
    /// Every `(neighbor, road)` pair incident to `town`
    fn roads_from(&self, town: &Town) -> Vec<(&Town, &Road)>;
}
