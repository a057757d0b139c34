use serde::Serialize;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Unit label appended to every hop description
pub const DISTANCE_UNIT: &str = "mi";

/// A named vertex. Identity is the name alone, so two `Town`s built from
/// the same string are the same vertex.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Town {
    name: String,
}

impl Town {
    pub fn new(name: impl Into<String>) -> Self {
        Town { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Blank names are never admitted as vertices
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
    }
}

impl fmt::Display for Town {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl From<&str> for Town {
    fn from(name: &str) -> Self {
        Town::new(name)
    }
}

impl From<String> for Town {
    fn from(name: String) -> Self {
        Town::new(name)
    }
}

/// Unordered pair of endpoints, stored low-then-high so that `(a, b)` and
/// `(b, a)` produce the same key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct RoadKey(Town, Town);

impl RoadKey {
    pub(crate) fn new(a: &Town, b: &Town) -> Self {
        if a <= b {
            RoadKey(a.clone(), b.clone())
        } else {
            RoadKey(b.clone(), a.clone())
        }
    }
}

/// An undirected, weighted connection between two distinct towns.
///
/// Equality and hashing only look at the endpoint pair, in either order:
/// the graph keeps at most one road per pair, so the pair is the road's
/// identity. The name is a label and need not be unique.
#[derive(Debug, Clone, Serialize)]
pub struct Road {
    name: String,
    weight: u32,
    endpoints: (Town, Town),
}

impl Road {
    pub(crate) fn new(first: Town, second: Town, weight: u32, name: impl Into<String>) -> Self {
        Road {
            name: name.into(),
            weight,
            endpoints: (first, second),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn weight(&self) -> u32 {
        self.weight
    }

    /// Endpoints in the order they were given when the road was added
    pub fn endpoints(&self) -> (&Town, &Town) {
        (&self.endpoints.0, &self.endpoints.1)
    }

    /// The endpoint opposite `town`, or `None` if `town` is not on this road
    pub fn other_end(&self, town: &Town) -> Option<&Town> {
        if &self.endpoints.0 == town {
            Some(&self.endpoints.1)
        } else if &self.endpoints.1 == town {
            Some(&self.endpoints.0)
        } else {
            None
        }
    }

    pub fn connects(&self, a: &Town, b: &Town) -> bool {
        self.other_end(a) == Some(b)
    }

    pub(crate) fn key(&self) -> RoadKey {
        RoadKey::new(&self.endpoints.0, &self.endpoints.1)
    }
}

impl PartialEq for Road {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Road {}

impl Hash for Road {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl fmt::Display for Road {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} - {}, {} {})",
            self.name, self.endpoints.0, self.endpoints.1, self.weight, DISTANCE_UNIT
        )
    }
}

/// One step of a shortest path, in traversal order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hop {
    pub from: String,
    pub road: String,
    pub to: String,
    pub weight: u32,
}

impl fmt::Display for Hop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} via {} to {} {} {}",
            self.from, self.road, self.to, self.weight, DISTANCE_UNIT
        )
    }
}

/// Result of a shortest-path query.
///
/// Every variant other than `Found` means "no path"; they are kept apart so
/// callers and tests can tell why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "detail", rename_all = "snake_case")]
pub enum PathOutcome {
    /// Hops from source to destination. Empty when they are the same town.
    Found(Vec<Hop>),
    /// The named town is not a vertex
    UnknownTown(String),
    /// The named town has no roads
    Isolated(String),
    /// Both towns exist but lie in different components
    Unreachable,
}

impl PathOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, PathOutcome::Found(_))
    }

    pub fn hops(&self) -> Option<&[Hop]> {
        match self {
            PathOutcome::Found(hops) => Some(hops),
            _ => None,
        }
    }

    /// Summed weight of a found path
    pub fn total_distance(&self) -> Option<u64> {
        self.hops()
            .map(|hops| hops.iter().map(|h| u64::from(h.weight)).sum())
    }

    /// Collapse to hop descriptions; every non-`Found` outcome becomes empty
    pub fn into_descriptions(self) -> Vec<String> {
        match self {
            PathOutcome::Found(hops) => hops.iter().map(Hop::to_string).collect(),
            _ => Vec::new(),
        }
    }
}
