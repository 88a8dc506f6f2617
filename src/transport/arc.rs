//!
//! Arc of the transportation network and constant cost trait `ConstCost`
//!
//! `ArcEdge` is the edge weight of the network graph. It has
//! * `key`: identity of the arc, `(origin, destination)`
//! * `cost`: cost per unit flow
//!
//! Arcs are capacity-unconstrained, the only bounds on their flow come from
//! the constraints of the endpoint nodes.
//!
use super::amount::Cost;
use serde::{Deserialize, Serialize};

/// Identity of an arc, the ordered pair of node ids.
///
/// Flows and costs are keyed by this, so any consumer of the result
/// can look them up without knowing the internal graph indices.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ArcKey {
    pub origin: String,
    pub destination: String,
}

impl ArcKey {
    pub fn new(origin: impl Into<String>, destination: impl Into<String>) -> ArcKey {
        ArcKey {
            origin: origin.into(),
            destination: destination.into(),
        }
    }
}

impl std::fmt::Display for ArcKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.origin, self.destination)
    }
}

impl<A: Into<String>, B: Into<String>> From<(A, B)> for ArcKey {
    fn from((origin, destination): (A, B)) -> ArcKey {
        ArcKey::new(origin, destination)
    }
}

/// Edge of the network graph with constant cost
///
/// * `cost()`: cost per unit flow `c(e)`
pub trait ConstCost {
    /// constant Cost-per-unit-flow of the edge
    fn cost(&self) -> Cost;
}

/// Edge attributes used in the network graph
#[derive(Debug, Clone, PartialEq)]
pub struct ArcEdge {
    pub key: ArcKey,
    /// cost per unit flow
    pub cost: Cost,
}

impl ArcEdge {
    pub fn new(key: ArcKey, cost: Cost) -> ArcEdge {
        ArcEdge { key, cost }
    }
}

impl ConstCost for ArcEdge {
    fn cost(&self) -> Cost {
        self.cost
    }
}

impl std::fmt::Display for ArcEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.key, self.cost)
    }
}
