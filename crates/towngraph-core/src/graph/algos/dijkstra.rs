use crate::graph::path::{reconstruct_path, PredecessorInfo};
use crate::graph::types::{PathOutcome, Town};
use crate::graph::GraphProvider;
use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap, HashSet};

/// Wrapper for BinaryHeap to use as min-heap (ordered by distance, then name)
#[derive(Debug, Clone)]
pub struct HeapEntry<'a> {
    pub town: &'a Town,
    pub distance: u64,
}

impl PartialEq for HeapEntry<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry<'_> {}

impl PartialOrd for HeapEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .cmp(&other.distance)
            .then_with(|| self.town.cmp(other.town))
    }
}

/// State tracked during Dijkstra search
struct DijkstraState<'a> {
    distances: HashMap<&'a Town, u64>,
    visited: HashSet<&'a Town>,
    predecessors: HashMap<&'a Town, PredecessorInfo<'a>>,
    heap: BinaryHeap<Reverse<HeapEntry<'a>>>,
}

impl<'a> DijkstraState<'a> {
    fn new(source: &'a Town) -> Self {
        let mut state = Self {
            distances: HashMap::new(),
            visited: HashSet::new(),
            predecessors: HashMap::new(),
            heap: BinaryHeap::new(),
        };
        state.distances.insert(source, 0);
        state.heap.push(Reverse(HeapEntry {
            town: source,
            distance: 0,
        }));
        state
    }

    /// Pop the closest unvisited town, skipping stale heap entries
    fn next_unvisited(&mut self) -> Option<HeapEntry<'a>> {
        while let Some(Reverse(entry)) = self.heap.pop() {
            if self.visited.insert(entry.town) {
                return Some(entry);
            }
        }
        None
    }
}

/// Minimum-total-weight path from `source` to `destination`.
///
/// Unknown or isolated endpoints and disconnected pairs are ordinary
/// outcomes, not errors. Ties between equally distant towns resolve by
/// name, so the result is deterministic.
#[tracing::instrument(skip(provider), fields(source = %source, destination = %destination))]
pub fn dijkstra_path(
    provider: &dyn GraphProvider,
    source: &Town,
    destination: &Town,
) -> PathOutcome {
    let Some(source) = provider.lookup(source) else {
        return PathOutcome::UnknownTown(source.name().to_string());
    };
    let Some(destination) = provider.lookup(destination) else {
        return PathOutcome::UnknownTown(destination.name().to_string());
    };

    for endpoint in [source, destination] {
        if provider.roads_from(endpoint).is_empty() {
            return PathOutcome::Isolated(endpoint.name().to_string());
        }
    }

    if source == destination {
        return PathOutcome::Found(Vec::new());
    }

    let mut state = DijkstraState::new(source);

    while let Some(current) = state.next_unvisited() {
        if current.town == destination {
            break;
        }

        for (neighbor, road) in provider.roads_from(current.town) {
            if state.visited.contains(neighbor) {
                continue;
            }

            let candidate = current.distance + u64::from(road.weight());
            let improved = state
                .distances
                .get(neighbor)
                .map_or(true, |&known| candidate < known);

            if improved {
                tracing::trace!(town = %neighbor, distance = candidate, via = road.name(), "relax");
                state.distances.insert(neighbor, candidate);
                state.predecessors.insert(
                    neighbor,
                    PredecessorInfo {
                        previous: current.town,
                        road,
                    },
                );
                state.heap.push(Reverse(HeapEntry {
                    town: neighbor,
                    distance: candidate,
                }));
            }
        }
    }

    if !state.visited.contains(destination) {
        tracing::debug!(visited = state.visited.len(), "destination unreachable");
        return PathOutcome::Unreachable;
    }

    match reconstruct_path(source, destination, &state.predecessors) {
        Some(hops) => PathOutcome::Found(hops),
        None => PathOutcome::Unreachable,
    }
}
