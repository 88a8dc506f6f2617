//!
//! Network description as supplied by the caller
//!
//! `NetworkConfig` is plain data: node ids per role, the arc list, and the
//! capacity / requirement / cost mappings, as separate tables. Nothing is checked
//! here, `TransportNetwork::new` validates it.
//!
//! It can be built in code with the chainable methods, or loaded from JSON:
//!
//! ```text
//! {
//!   "supply_nodes": ["S1", "S2"],
//!   "transshipment_nodes": ["T"],
//!   "demand_nodes": ["D"],
//!   "arcs": [["S1", "T"], ["S2", "T"], ["T", "D"]],
//!   "capacities": {"S1": 10, "S2": 5},
//!   "requirements": {"D": 12},
//!   "costs": [{"origin": "S1", "destination": "T", "cost": 1}, ...],
//!   "adjustments": {"demand_scale": 1.25, "capacity_overrides": {"S1": 8}}
//! }
//! ```
//!
use super::amount::{Amount, Cost};
use super::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Cost entry of an arc
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArcCost {
    pub origin: String,
    pub destination: String,
    pub cost: Cost,
}

/// Variations of a base network, applied while the network is constructed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Adjustments {
    /// Every requirement is multiplied by this factor and truncated toward zero,
    /// so scaled requirements are whole numbers. A factor of 1 leaves them as given.
    pub demand_scale: Option<f64>,
    /// Replaces the capacity of the named supply nodes.
    pub capacity_overrides: BTreeMap<String, Amount>,
}

impl Adjustments {
    /// requirement after demand scaling
    pub fn scaled_requirement(&self, requirement: Amount) -> Amount {
        match self.demand_scale {
            Some(scale) if scale != 1.0 => (requirement * scale).trunc(),
            _ => requirement,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    pub supply_nodes: Vec<String>,
    pub transshipment_nodes: Vec<String>,
    pub demand_nodes: Vec<String>,
    /// `(origin, destination)` pairs, in declaration order
    pub arcs: Vec<(String, String)>,
    /// supply node id -> capacity
    pub capacities: BTreeMap<String, Amount>,
    /// demand node id -> requirement
    pub requirements: BTreeMap<String, Amount>,
    pub costs: Vec<ArcCost>,
    pub adjustments: Adjustments,
}

impl NetworkConfig {
    pub fn new() -> NetworkConfig {
        NetworkConfig::default()
    }

    ///
    /// Load the description from a JSON file
    ///
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<NetworkConfig, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        NetworkConfig::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<NetworkConfig, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Add a supply node with its capacity
    pub fn supply(mut self, id: &str, capacity: Amount) -> NetworkConfig {
        self.supply_nodes.push(id.to_string());
        self.capacities.insert(id.to_string(), capacity);
        self
    }

    /// Add a transshipment node
    pub fn transshipment(mut self, id: &str) -> NetworkConfig {
        self.transshipment_nodes.push(id.to_string());
        self
    }

    /// Add a demand node with its requirement
    pub fn demand(mut self, id: &str, requirement: Amount) -> NetworkConfig {
        self.demand_nodes.push(id.to_string());
        self.requirements.insert(id.to_string(), requirement);
        self
    }

    /// Add an arc with its cost per unit flow
    pub fn arc(mut self, origin: &str, destination: &str, cost: Cost) -> NetworkConfig {
        self.arcs.push((origin.to_string(), destination.to_string()));
        self.costs.push(ArcCost {
            origin: origin.to_string(),
            destination: destination.to_string(),
            cost,
        });
        self
    }

    pub fn with_demand_scale(mut self, scale: f64) -> NetworkConfig {
        self.adjustments.demand_scale = Some(scale);
        self
    }

    pub fn with_capacity_override(mut self, id: &str, capacity: Amount) -> NetworkConfig {
        self.adjustments
            .capacity_overrides
            .insert(id.to_string(), capacity);
        self
    }
}
