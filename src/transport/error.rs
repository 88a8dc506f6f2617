//!
//! Error definitions
//!
//! Infeasible and unbounded networks are not errors, they are reported as
//! `SolveOutcome` variants.
//!
use super::amount::{Amount, Cost};
use super::arc::ArcKey;
use thiserror::Error;

/// Malformed network description, detected before any solve attempt.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("node {0} is declared more than once")]
    DuplicateNode(String),
    #[error("arc {arc} references unknown node {node}")]
    UnknownNode { arc: ArcKey, node: String },
    #[error("arc {0} is declared more than once")]
    DuplicateArc(ArcKey),
    #[error("supply node {0} has no capacity entry")]
    MissingCapacity(String),
    #[error("demand node {0} has no requirement entry")]
    MissingRequirement(String),
    #[error("arc {0} leaves a demand node")]
    ArcFromDemand(ArcKey),
    #[error("arc {0} has no cost entry")]
    MissingCost(ArcKey),
    #[error("capacity given for {0}, which is not a supply node")]
    UnexpectedCapacity(String),
    #[error("requirement given for {0}, which is not a demand node")]
    UnexpectedRequirement(String),
    #[error("cost given for undeclared arc {0}")]
    UnexpectedCost(ArcKey),
    #[error("cost of arc {0} is given more than once")]
    DuplicateCost(ArcKey),
    #[error("quantity {value} of node {node} must be finite and non-negative")]
    InvalidQuantity { node: String, value: Amount },
    #[error("cost {value} of arc {arc} must be finite and non-negative")]
    InvalidCost { arc: ArcKey, value: Cost },
    #[error("demand scale {0} must be finite and non-negative")]
    InvalidDemandScale(f64),
    #[error("capacity override given for {0}, which is not a supply node")]
    CapacityOverrideOnNonSupply(String),
}

/// Failure to load a network description from a file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read network file: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot parse network file: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors that stop a solve before a flow assignment is produced.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("invalid network: {0}")]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("extracted cost {extracted} disagrees with solver objective {reported}")]
    SolverInconsistency { extracted: Cost, reported: Cost },
    #[error("solver reported optimal but returned no value for arc {0}")]
    MissingValue(ArcKey),
    #[error("solver reported optimal but returned no objective value")]
    MissingObjective,
    #[error("solver returned negative flow {value} on arc {arc}")]
    NegativeFlow { arc: ArcKey, value: Amount },
}
