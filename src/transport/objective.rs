//!
//! Objective: total transportation cost `Σ c(i,j) x(i,j)` over all arcs, minimized
//!
use super::amount::Cost;
use super::arc::ConstCost;
use super::expr::LinearExpr;
use super::network::TransportNetwork;
use petgraph::graph::EdgeIndex;

/// Optimization direction
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Sense {
    Minimize,
    Maximize,
}

impl std::fmt::Display for Sense {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Sense::Minimize => write!(f, "minimize"),
            Sense::Maximize => write!(f, "maximize"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Objective {
    pub sense: Sense,
    pub expr: LinearExpr,
}

impl Objective {
    /// objective value when each `x(e)` takes `value(e)`
    pub fn evaluate<F: Fn(EdgeIndex) -> f64>(&self, value: F) -> Cost {
        self.expr.evaluate(value)
    }
}

///
/// Build the cost minimization objective of the network.
///
/// Every arc has a cost (checked when the network was built), so no arc is
/// silently free. Zero-cost arcs contribute no term.
///
pub fn build_objective(network: &TransportNetwork) -> Objective {
    let mut expr = LinearExpr::new();
    for (e, arc) in network.arcs() {
        expr.add_term(e, arc.cost());
    }
    Objective {
        sense: Sense::Minimize,
        expr,
    }
}
