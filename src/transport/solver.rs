//!
//! Solver boundary
//!
//! `LpSolver` takes an assembled `Model` and returns a `SolverOutput`: a status and,
//! when optimal, a value for every variable keyed by its arc (`EdgeIndex`).
//! The call blocks until the solver finishes; there is no timeout or cancellation.
//!
//! `MinilpSolver` is the default backend.
//!
use super::constraint::Relation;
use super::model::Model;
use super::objective::Sense;
use log::{debug, warn};
use minilp::{ComparisonOp, OptimizationDirection, Problem};
use petgraph::graph::EdgeIndex;
use std::collections::HashMap;

/// Terminal status of a solve
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum SolveStatus {
    Optimal,
    Infeasible,
    Unbounded,
    /// the solver did not finish, or could not accept the model
    NotSolved,
}

impl SolveStatus {
    pub fn is_optimal(self) -> bool {
        matches!(self, SolveStatus::Optimal)
    }
    pub fn as_str(self) -> &'static str {
        match self {
            SolveStatus::Optimal => "Optimal",
            SolveStatus::Infeasible => "Infeasible",
            SolveStatus::Unbounded => "Unbounded",
            SolveStatus::NotSolved => "Not Solved",
        }
    }
}

impl std::fmt::Display for SolveStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Raw answer of a solver
#[derive(Debug, Clone, PartialEq)]
pub struct SolverOutput {
    pub status: SolveStatus,
    /// value of each variable, only for `Optimal`
    pub values: HashMap<EdgeIndex, f64>,
    /// objective value reported by the solver, only for `Optimal`
    pub objective_value: Option<f64>,
}

impl SolverOutput {
    pub fn optimal(values: HashMap<EdgeIndex, f64>, objective_value: f64) -> SolverOutput {
        SolverOutput {
            status: SolveStatus::Optimal,
            values,
            objective_value: Some(objective_value),
        }
    }
    /// output without any values, for every status other than `Optimal`
    pub fn without_solution(status: SolveStatus) -> SolverOutput {
        SolverOutput {
            status,
            values: HashMap::new(),
            objective_value: None,
        }
    }
}

///
/// Linear program solver accepting non-negative continuous variables,
/// linear (in)equality constraints and a linear objective with a sense.
///
pub trait LpSolver {
    fn name(&self) -> &str;
    fn solve(&self, model: &Model) -> SolverOutput;
}

/// Solver backed by the `minilp` simplex implementation
#[derive(Debug, Default, Copy, Clone)]
pub struct MinilpSolver;

impl MinilpSolver {
    pub fn new() -> MinilpSolver {
        MinilpSolver
    }
}

impl LpSolver for MinilpSolver {
    fn name(&self) -> &str {
        "minilp"
    }

    fn solve(&self, model: &Model) -> SolverOutput {
        // constraints without variables are decided here, minilp has no use for empty rows
        for c in model.constraints.iter().filter(|c| c.is_vacuous()) {
            if !c.relation.holds(0.0, c.rhs) {
                debug!("{}: 0 {} {} cannot hold", c.name, c.relation, c.rhs);
                return SolverOutput::without_solution(SolveStatus::Infeasible);
            }
        }
        if model.variables.is_empty() {
            return SolverOutput::optimal(HashMap::new(), 0.0);
        }

        let direction = match model.objective.sense {
            Sense::Minimize => OptimizationDirection::Minimize,
            Sense::Maximize => OptimizationDirection::Maximize,
        };
        let mut problem = Problem::new(direction);
        let vars: HashMap<EdgeIndex, minilp::Variable> = model
            .variables
            .iter()
            .map(|v| {
                let cost = model.objective.expr.coefficient(v.edge);
                (v.edge, problem.add_var(cost, (v.lower_bound, f64::INFINITY)))
            })
            .collect();

        for c in model.constraints.iter().filter(|c| !c.is_vacuous()) {
            let terms: Option<Vec<(minilp::Variable, f64)>> = c
                .lhs
                .terms()
                .map(|(e, coeff)| vars.get(&e).map(|&v| (v, coeff)))
                .collect();
            let mut terms = match terms {
                Some(terms) => terms,
                None => {
                    warn!("{} refers to a variable missing from the model", c.name);
                    return SolverOutput::without_solution(SolveStatus::NotSolved);
                }
            };
            // minilp needs each row sorted by variable
            terms.sort_by_key(|&(v, _)| v);
            let op = match c.relation {
                Relation::LessEqual => ComparisonOp::Le,
                Relation::Equal => ComparisonOp::Eq,
                Relation::GreaterEqual => ComparisonOp::Ge,
            };
            problem.add_constraint(&terms[..], op, c.rhs);
        }

        match problem.solve() {
            Ok(solution) => {
                let values = vars.iter().map(|(&e, &v)| (e, solution[v])).collect();
                SolverOutput::optimal(values, solution.objective())
            }
            Err(minilp::Error::Infeasible) => SolverOutput::without_solution(SolveStatus::Infeasible),
            Err(minilp::Error::Unbounded) => SolverOutput::without_solution(SolveStatus::Unbounded),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::amount::sim_eq;
    use super::super::arc::ArcKey;
    use super::super::config::NetworkConfig;
    use super::super::expr::LinearExpr;
    use super::super::mocks::mock_small_network;
    use super::super::network::TransportNetwork;
    use super::*;

    #[test]
    fn status_basic() {
        assert!(SolveStatus::Optimal.is_optimal());
        assert!(!SolveStatus::Infeasible.is_optimal());
        assert!(!SolveStatus::NotSolved.is_optimal());
        assert_eq!(SolveStatus::Unbounded.to_string(), "Unbounded");
        assert_eq!(SolveStatus::NotSolved.to_string(), "Not Solved");
    }

    #[test]
    fn minilp_solves_small_network() {
        let n = TransportNetwork::new(&mock_small_network(12.0)).unwrap();
        let m = Model::build(&n);
        let out = MinilpSolver::new().solve(&m);
        assert_eq!(out.status, SolveStatus::Optimal);
        assert!(sim_eq(out.objective_value.unwrap(), 26.0));
        assert_eq!(out.values.len(), 3);
        let x = |o: &str, d: &str| out.values[&n.edge_index(&ArcKey::new(o, d)).unwrap()];
        assert!(sim_eq(x("S1", "T"), 10.0));
        assert!(sim_eq(x("S2", "T"), 2.0));
        assert!(sim_eq(x("T", "D"), 12.0));
    }

    #[test]
    fn minilp_reports_infeasible() {
        let n = TransportNetwork::new(&mock_small_network(20.0)).unwrap();
        let out = MinilpSolver::new().solve(&Model::build(&n));
        assert_eq!(out.status, SolveStatus::Infeasible);
        assert!(out.values.is_empty());
        assert_eq!(out.objective_value, None);
    }

    #[test]
    fn unreachable_demand_is_infeasible() {
        let config = mock_small_network(12.0).demand("D2", 1.0);
        let n = TransportNetwork::new(&config).unwrap();
        let out = MinilpSolver::new().solve(&Model::build(&n));
        assert_eq!(out.status, SolveStatus::Infeasible);
    }

    #[test]
    fn unreachable_zero_demand_is_fine() {
        let config = mock_small_network(12.0).demand("D2", 0.0).supply("S3", 7.0);
        let n = TransportNetwork::new(&config).unwrap();
        let out = MinilpSolver::new().solve(&Model::build(&n));
        assert_eq!(out.status, SolveStatus::Optimal);
        assert!(sim_eq(out.objective_value.unwrap(), 26.0));
    }

    #[test]
    fn network_without_arcs() {
        let config = NetworkConfig::new().supply("S", 3.0).demand("D", 0.0);
        let n = TransportNetwork::new(&config).unwrap();
        let out = MinilpSolver::new().solve(&Model::build(&n));
        assert_eq!(out.status, SolveStatus::Optimal);
        assert_eq!(out.objective_value, Some(0.0));
        assert!(out.values.is_empty());
    }

    #[test]
    fn maximizing_cost_is_unbounded() {
        // a self-loop cancels out of the transshipment row, so no constraint bounds it
        let config = NetworkConfig::new()
            .supply("S", 1.0)
            .transshipment("T")
            .demand("D", 0.0)
            .arc("S", "T", 1.0)
            .arc("T", "T", 1.0)
            .arc("T", "D", 1.0);
        let n = TransportNetwork::new(&config).unwrap();
        let mut m = Model::build(&n);
        m.objective.sense = Sense::Maximize;
        let out = MinilpSolver::new().solve(&m);
        assert_eq!(out.status, SolveStatus::Unbounded);
        assert_eq!(out.objective_value, None);

        // minimizing the same model leaves the arc empty
        m.objective.sense = Sense::Minimize;
        let out = MinilpSolver::new().solve(&m);
        assert_eq!(out.status, SolveStatus::Optimal);
        assert!(sim_eq(out.objective_value.unwrap(), 0.0));
    }

    #[test]
    fn broken_model_is_not_solved() {
        let n = TransportNetwork::new(&mock_small_network(12.0)).unwrap();
        let mut m = Model::build(&n);
        m.constraints[0].lhs = LinearExpr::sum_of(vec![EdgeIndex::new(99)]);
        let out = MinilpSolver::new().solve(&m);
        assert_eq!(out.status, SolveStatus::NotSolved);
    }
}
