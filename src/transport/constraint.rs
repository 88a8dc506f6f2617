//!
//! Constraint generation
//!
//! For each node n, by role:
//! * Supply: `Σ x(n, j) <= capacity(n)`
//! * Demand: `Σ x(j, n) == requirement(n)`
//! * Transshipment: `Σ x(n, j) - Σ x(j, n) == 0`
//!
//! Demand is an exact equality, supply an upper bound only.
//!
//! A supply node without outgoing arcs gets the vacuous `0 <= capacity`, a demand
//! node without incoming arcs gets `0 == requirement`. The latter is infeasible for
//! a positive requirement, which is left for the solver to report.
//!
use super::amount::{sim_eq, sim_le, Amount};
use super::expr::LinearExpr;
use super::network::TransportNetwork;
use super::node::{Node, NodeRole};
use log::{debug, warn};
use petgraph::graph::EdgeIndex;

/// Relation between the left-hand side and the right-hand side of a constraint
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Relation {
    /// `<=`
    LessEqual,
    /// `==`
    Equal,
    /// `>=`
    GreaterEqual,
}

impl Relation {
    /// check `lhs (relation) rhs` allowing the floating error
    pub fn holds(&self, lhs: f64, rhs: f64) -> bool {
        match self {
            Relation::LessEqual => sim_le(lhs, rhs),
            Relation::Equal => sim_eq(lhs, rhs),
            Relation::GreaterEqual => sim_le(rhs, lhs),
        }
    }
}

impl std::fmt::Display for Relation {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Relation::LessEqual => write!(f, "<="),
            Relation::Equal => write!(f, "=="),
            Relation::GreaterEqual => write!(f, ">="),
        }
    }
}

/// Linear constraint `lhs (relation) rhs` generated for a node
#[derive(Debug, Clone, PartialEq)]
pub struct Constraint {
    /// e.g. `supply_I1`
    pub name: String,
    /// id of the node this constraint belongs to
    pub node: String,
    pub role: NodeRole,
    pub lhs: LinearExpr,
    pub relation: Relation,
    pub rhs: Amount,
}

impl Constraint {
    /// Constraint without any variable. It holds or fails regardless of the flow.
    pub fn is_vacuous(&self) -> bool {
        self.lhs.is_empty()
    }
    /// check if the constraint holds when each `x(e)` takes `value(e)`
    pub fn is_satisfied_by<F: Fn(EdgeIndex) -> f64>(&self, value: F) -> bool {
        self.relation.holds(self.lhs.evaluate(value), self.rhs)
    }
}

///
/// Generate one constraint per node of the network, in node declaration order.
///
pub fn generate_constraints(network: &TransportNetwork) -> Vec<Constraint> {
    network
        .nodes()
        .map(|node| {
            let c = node_constraint(network, node);
            debug!(
                "{}: {} {} {}",
                c.name,
                c.lhs.format_with(|e| format!("x{}", e.index())),
                c.relation,
                c.rhs
            );
            c
        })
        .collect()
}

///
/// Constraint appropriate to the role of the node
///
pub fn node_constraint(network: &TransportNetwork, node: &Node) -> Constraint {
    match node.role() {
        NodeRole::Supply => supply_constraint(network, node),
        NodeRole::Demand => demand_constraint(network, node),
        NodeRole::Transshipment => transshipment_constraint(network, node),
    }
}

/// `Σ x(n, j) <= capacity(n)`
fn supply_constraint(network: &TransportNetwork, node: &Node) -> Constraint {
    let lhs = outflow(network, node);
    if lhs.is_empty() {
        warn!("supply node {} has no outgoing arcs", node.id());
    }
    Constraint {
        name: constraint_name(node),
        node: node.id().to_string(),
        role: NodeRole::Supply,
        lhs,
        relation: Relation::LessEqual,
        rhs: node.capacity().unwrap_or(0.0),
    }
}

/// `Σ x(j, n) == requirement(n)`
fn demand_constraint(network: &TransportNetwork, node: &Node) -> Constraint {
    let lhs = inflow(network, node);
    let rhs = node.requirement().unwrap_or(0.0);
    if lhs.is_empty() && rhs > 0.0 {
        warn!(
            "demand node {} requires {} but has no incoming arcs",
            node.id(),
            rhs
        );
    }
    Constraint {
        name: constraint_name(node),
        node: node.id().to_string(),
        role: NodeRole::Demand,
        lhs,
        relation: Relation::Equal,
        rhs,
    }
}

/// `Σ x(n, j) - Σ x(j, n) == 0`
fn transshipment_constraint(network: &TransportNetwork, node: &Node) -> Constraint {
    Constraint {
        name: constraint_name(node),
        node: node.id().to_string(),
        role: NodeRole::Transshipment,
        lhs: outflow(network, node) - inflow(network, node),
        relation: Relation::Equal,
        rhs: 0.0,
    }
}

fn outflow(network: &TransportNetwork, node: &Node) -> LinearExpr {
    LinearExpr::sum_of(network.outgoing(node.id()).map(|(e, _)| e))
}

fn inflow(network: &TransportNetwork, node: &Node) -> LinearExpr {
    LinearExpr::sum_of(network.incoming(node.id()).map(|(e, _)| e))
}

fn constraint_name(node: &Node) -> String {
    format!("{}_{}", node.role().prefix(), node.id())
}
