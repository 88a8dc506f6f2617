//!
//! Multi-echelon transportation problem
//!
//! Material moves from supply nodes through transshipment nodes to demand nodes
//! along directed arcs with a constant per-unit cost. The minimum cost flow is
//! found by assembling a linear program, handing it to an `LpSolver` and
//! extracting the positive flows from its answer.
//!
pub mod amount;
pub mod arc;
pub mod config;
pub mod constraint;
pub mod error;
pub mod expr;
pub mod extract;
pub mod flow;
pub mod mocks;
pub mod model;
pub mod network;
pub mod node;
pub mod objective;
pub mod solver;
pub mod utils;

pub use config::NetworkConfig;
pub use error::{ConfigError, TransportError, ValidationError};
pub use extract::{FlowSolution, SolveOutcome};
pub use flow::{is_valid_flow, FlowAssignment};
pub use network::TransportNetwork;
pub use solver::{LpSolver, MinilpSolver, SolveStatus};

use extract::extract;
use log::{debug, info};
use model::Model;
use utils::{draw, draw_with_flow};

//
// public functions
//

///
/// Find the minimum cost flow of the network with the default solver
///
pub fn solve(network: &TransportNetwork) -> Result<SolveOutcome, TransportError> {
    solve_with(network, &MinilpSolver::new())
}

///
/// Find the minimum cost flow of the network with the given solver
///
/// The model is built for this call only, and dropped once the result is extracted.
///
pub fn solve_with<S: LpSolver>(
    network: &TransportNetwork,
    solver: &S,
) -> Result<SolveOutcome, TransportError> {
    draw(network);
    let model = Model::build(network);
    info!(
        "solving {} variables and {} constraints with {}",
        model.nr_variables(),
        model.nr_constraints(),
        solver.name()
    );
    debug!("model:\n{}", model);

    let output = solver.solve(&model);
    info!("solver finished: {}", output.status);
    for v in model.variables.iter() {
        if let Some(x) = output.values.get(&v.edge) {
            debug!("{} = {}", v.name(), x);
        }
    }

    let outcome = extract(&model, &output)?;
    if let Some(solution) = outcome.solution() {
        info!("total cost {}", solution.total_cost());
        draw_with_flow(solution.flow_graph());
    }
    Ok(outcome)
}

///
/// Validate the network description and solve it
///
pub fn solve_config(config: &NetworkConfig) -> Result<SolveOutcome, TransportError> {
    let network = TransportNetwork::new(config)?;
    solve(&network)
}
