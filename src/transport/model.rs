//!
//! Linear program assembled from a network
//!
//! `Model` has
//! * one non-negative continuous variable per arc, keyed by the arc
//! * one constraint per node
//! * the cost minimization objective
//!
//! It is built fresh for every solve and dropped after the result is extracted.
//!
use super::amount::Amount;
use super::arc::ArcKey;
use super::constraint::{generate_constraints, Constraint};
use super::network::TransportNetwork;
use super::objective::{build_objective, Objective};
use petgraph::graph::EdgeIndex;

/// Flow variable `x(i,j)` of an arc
#[derive(Debug, Clone, PartialEq)]
pub struct ArcVariable {
    pub edge: EdgeIndex,
    pub key: ArcKey,
    /// always 0, flows are non-negative
    pub lower_bound: Amount,
}

impl ArcVariable {
    pub fn name(&self) -> String {
        format!("x{}", self.key)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    pub variables: Vec<ArcVariable>,
    pub constraints: Vec<Constraint>,
    pub objective: Objective,
}

impl Model {
    pub fn build(network: &TransportNetwork) -> Model {
        let variables = network
            .arcs()
            .map(|(e, arc)| ArcVariable {
                edge: e,
                key: arc.key.clone(),
                lower_bound: 0.0,
            })
            .collect();
        Model {
            variables,
            constraints: generate_constraints(network),
            objective: build_objective(network),
        }
    }
    /// Variable of the arc. Edge indices of a network are contiguous, so this is a lookup by position.
    pub fn variable(&self, e: EdgeIndex) -> Option<&ArcVariable> {
        self.variables.get(e.index()).filter(|v| v.edge == e)
    }
    pub fn variable_name(&self, e: EdgeIndex) -> String {
        match self.variable(e) {
            Some(v) => v.name(),
            None => format!("x{}", e.index()),
        }
    }
    pub fn nr_variables(&self) -> usize {
        self.variables.len()
    }
    pub fn nr_constraints(&self) -> usize {
        self.constraints.len()
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = |e: EdgeIndex| self.variable_name(e);
        writeln!(f, "{}", self.objective.sense)?;
        writeln!(f, "  cost: {}", self.objective.expr.format_with(name))?;
        writeln!(f, "subject to")?;
        for c in self.constraints.iter() {
            writeln!(
                f,
                "  {}: {} {} {}",
                c.name,
                c.lhs.format_with(name),
                c.relation,
                c.rhs
            )?;
        }
        writeln!(f, "bounds")?;
        for v in self.variables.iter() {
            writeln!(f, "  {} >= {}", v.name(), v.lower_bound)?;
        }
        Ok(())
    }
}
