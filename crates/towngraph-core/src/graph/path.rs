//! Path reconstruction from a predecessor map

use crate::graph::types::{Hop, Road, Town};
use std::collections::HashMap;

/// How a vertex was first reached at its final distance
pub struct PredecessorInfo<'a> {
    pub previous: &'a Town,
    pub road: &'a Road,
}

/// Walk predecessors back from `to` until `from`, returning hops in
/// traversal order. Returns `None` if the chain breaks before reaching `from`.
pub fn reconstruct_path(
    from: &Town,
    to: &Town,
    predecessors: &HashMap<&Town, PredecessorInfo<'_>>,
) -> Option<Vec<Hop>> {
    let mut hops = Vec::new();
    let mut current = to;

    while current != from {
        let pred = predecessors.get(current)?;
        hops.push(Hop {
            from: pred.previous.name().to_string(),
            road: pred.road.name().to_string(),
            to: current.name().to_string(),
            weight: pred.road.weight(),
        });
        current = pred.previous;
    }

    hops.reverse();
    Some(hops)
}
