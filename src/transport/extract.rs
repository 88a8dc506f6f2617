//!
//! Result extraction
//!
//! Turns a raw `SolverOutput` into a `SolveOutcome`. For an optimal output,
//! only arcs with strictly positive flow are kept, and the total cost is
//! re-evaluated from those flows and checked against the solver's own objective.
//!
use super::amount::{cost_sim_eq, is_positive, sim_le, Amount, Cost};
use super::arc::ArcKey;
use super::error::TransportError;
use super::flow::{FlowAssignment, FlowGraph};
use super::model::Model;
use super::solver::{SolveStatus, SolverOutput};
use log::{error, warn};

/// Solution of a network solved to optimality
#[derive(Debug, Clone)]
pub struct FlowSolution {
    flows: FlowAssignment,
    total_cost: Cost,
    reported_objective: Cost,
    graph: FlowGraph,
}

impl FlowSolution {
    pub fn status(&self) -> SolveStatus {
        SolveStatus::Optimal
    }
    /// total transportation cost of the flows
    pub fn total_cost(&self) -> Cost {
        self.total_cost
    }
    /// objective value as reported by the solver
    pub fn reported_objective(&self) -> Cost {
        self.reported_objective
    }
    /// arcs carrying strictly positive flow
    pub fn flows(&self) -> &FlowAssignment {
        &self.flows
    }
    pub fn flow(&self, origin: &str, destination: &str) -> Amount {
        self.flows.flow(origin, destination)
    }
    /// subgraph induced by the arcs carrying flow
    pub fn flow_graph(&self) -> &FlowGraph {
        &self.graph
    }
}

impl std::fmt::Display for FlowSolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Status: {}", self.status())?;
        writeln!(f, "Total Cost: {}", self.total_cost)?;
        for (key, amount) in self.flows.iter() {
            writeln!(f, "{} -> {} = {}", key.origin, key.destination, amount)?;
        }
        Ok(())
    }
}

/// Result of a solve. Only `Optimal` carries flows and a cost.
#[derive(Debug, Clone)]
pub enum SolveOutcome {
    Optimal(FlowSolution),
    Infeasible,
    Unbounded,
    NotSolved,
}

impl SolveOutcome {
    pub fn status(&self) -> SolveStatus {
        match self {
            SolveOutcome::Optimal(_) => SolveStatus::Optimal,
            SolveOutcome::Infeasible => SolveStatus::Infeasible,
            SolveOutcome::Unbounded => SolveStatus::Unbounded,
            SolveOutcome::NotSolved => SolveStatus::NotSolved,
        }
    }
    pub fn is_optimal(&self) -> bool {
        self.status().is_optimal()
    }
    pub fn solution(&self) -> Option<&FlowSolution> {
        match self {
            SolveOutcome::Optimal(s) => Some(s),
            _ => None,
        }
    }
    pub fn into_solution(self) -> Option<FlowSolution> {
        match self {
            SolveOutcome::Optimal(s) => Some(s),
            _ => None,
        }
    }
}

impl std::fmt::Display for SolveOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolveOutcome::Optimal(s) => write!(f, "{}", s),
            other => writeln!(f, "Status: {}", other.status()),
        }
    }
}

///
/// Convert the solver output on `model` into a `SolveOutcome`.
///
/// * non-optimal statuses carry no flows
/// * an optimal output must have a non-negative value for every variable of the model,
///   and an objective value
/// * the cost re-evaluated from the kept flows must agree with the reported objective
///
pub fn extract(model: &Model, output: &SolverOutput) -> Result<SolveOutcome, TransportError> {
    match output.status {
        SolveStatus::Optimal => {}
        SolveStatus::Infeasible => {
            warn!("no flow satisfies every constraint");
            return Ok(SolveOutcome::Infeasible);
        }
        SolveStatus::Unbounded => {
            warn!("objective is unbounded");
            return Ok(SolveOutcome::Unbounded);
        }
        SolveStatus::NotSolved => {
            warn!("solver did not finish");
            return Ok(SolveOutcome::NotSolved);
        }
    }

    let mut values: Vec<(ArcKey, Amount)> = Vec::with_capacity(model.nr_variables());
    for v in model.variables.iter() {
        match output.values.get(&v.edge) {
            Some(&x) if sim_le(0.0, x) => values.push((v.key.clone(), x)),
            Some(&x) => {
                error!("solver returned {} for {}", x, v.name());
                return Err(TransportError::NegativeFlow {
                    arc: v.key.clone(),
                    value: x,
                });
            }
            None => return Err(TransportError::MissingValue(v.key.clone())),
        }
    }
    let reported_objective = output
        .objective_value
        .ok_or(TransportError::MissingObjective)?;
    let flows = FlowAssignment::from_positive(values);

    // re-evaluate the objective on the kept flows only
    let total_cost = model.objective.evaluate(|e| match output.values.get(&e) {
        Some(&x) if is_positive(x) => x,
        _ => 0.0,
    });

    if !cost_sim_eq(total_cost, reported_objective) {
        error!(
            "cost of the extracted flows {} differs from the solver objective {}",
            total_cost, reported_objective
        );
        return Err(TransportError::SolverInconsistency {
            extracted: total_cost,
            reported: reported_objective,
        });
    }

    let graph = flows.to_flow_graph();
    Ok(SolveOutcome::Optimal(FlowSolution {
        flows,
        total_cost,
        reported_objective,
        graph,
    }))
}
