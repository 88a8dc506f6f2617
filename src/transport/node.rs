//!
//! Node of the transportation network
//!
//! Each node has exactly one role, fixed at construction:
//! * Supply node: maximum outflow `capacity`
//! * Transshipment node: inflow equals outflow
//! * Demand node: exact inflow `requirement`
//!
use super::amount::Amount;
use serde::{Deserialize, Serialize};

/// Role of a node in the network
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum NodeRole {
    Supply,
    Transshipment,
    Demand,
}

impl NodeRole {
    /// prefix of the constraint name generated for a node of this role
    pub fn prefix(&self) -> &'static str {
        match self {
            NodeRole::Supply => "supply",
            NodeRole::Transshipment => "transshipment",
            NodeRole::Demand => "demand",
        }
    }
}

impl std::fmt::Display for NodeRole {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            NodeRole::Supply => write!(f, "Supply"),
            NodeRole::Transshipment => write!(f, "Transshipment"),
            NodeRole::Demand => write!(f, "Demand"),
        }
    }
}

/// Node attributes used as the node weight of the network graph
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    id: String,
    role: NodeRole,
    /// upper limit of the outflow, only for supply nodes
    capacity: Option<Amount>,
    /// exact inflow, only for demand nodes
    requirement: Option<Amount>,
}

impl Node {
    pub fn supply(id: impl Into<String>, capacity: Amount) -> Node {
        Node {
            id: id.into(),
            role: NodeRole::Supply,
            capacity: Some(capacity),
            requirement: None,
        }
    }
    pub fn transshipment(id: impl Into<String>) -> Node {
        Node {
            id: id.into(),
            role: NodeRole::Transshipment,
            capacity: None,
            requirement: None,
        }
    }
    pub fn demand(id: impl Into<String>, requirement: Amount) -> Node {
        Node {
            id: id.into(),
            role: NodeRole::Demand,
            capacity: None,
            requirement: Some(requirement),
        }
    }
    pub fn id(&self) -> &str {
        &self.id
    }
    pub fn role(&self) -> NodeRole {
        self.role
    }
    pub fn capacity(&self) -> Option<Amount> {
        self.capacity
    }
    pub fn requirement(&self) -> Option<Amount> {
        self.requirement
    }
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.role {
            NodeRole::Supply => write!(f, "{} <= {}", self.id, self.capacity.unwrap_or(0.0)),
            NodeRole::Transshipment => write!(f, "{}", self.id),
            NodeRole::Demand => write!(f, "{} == {}", self.id, self.requirement.unwrap_or(0.0)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_constructors() {
        let s = Node::supply("I1", 300.0);
        assert_eq!(s.id(), "I1");
        assert_eq!(s.role(), NodeRole::Supply);
        assert_eq!(s.capacity(), Some(300.0));
        assert_eq!(s.requirement(), None);

        let t = Node::transshipment("J1");
        assert_eq!(t.role(), NodeRole::Transshipment);
        assert_eq!(t.capacity(), None);
        assert_eq!(t.requirement(), None);

        let d = Node::demand("K1", 120.0);
        assert_eq!(d.role(), NodeRole::Demand);
        assert_eq!(d.requirement(), Some(120.0));
        assert_eq!(d.capacity(), None);
    }

    #[test]
    fn node_display() {
        assert_eq!(Node::supply("I1", 300.0).to_string(), "I1 <= 300");
        assert_eq!(Node::transshipment("J1").to_string(), "J1");
        assert_eq!(Node::demand("K1", 120.0).to_string(), "K1 == 120");
        assert_eq!(NodeRole::Demand.prefix(), "demand");
    }
}
