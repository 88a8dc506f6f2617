//!
//! Network descriptor
//!
//! `TransportNetwork` is a validated, immutable `DiGraph<Node, ArcEdge>`.
//! Adjacency (arcs leaving / entering a node) is answered by petgraph's
//! per-node edge lists, so it never scans the whole arc list.
//!
use super::amount::{is_valid_quantity, Amount, Cost};
use super::arc::{ArcEdge, ArcKey};
use super::config::NetworkConfig;
use super::error::ValidationError;
use super::node::{Node, NodeRole};
use log::debug;
use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use std::collections::HashMap;

/// Network graph definition
pub type NetworkGraph = DiGraph<Node, ArcEdge>;

#[derive(Debug, Clone)]
pub struct TransportNetwork {
    graph: NetworkGraph,
    node_index: HashMap<String, NodeIndex>,
    arc_index: HashMap<ArcKey, EdgeIndex>,
}

impl TransportNetwork {
    ///
    /// Validate the description and build the network.
    ///
    /// Checks that
    /// - node ids are unique across all roles
    /// - every supply node has a capacity, every demand node has a requirement
    /// - every arc endpoint is a declared node, and no arc is declared twice
    /// - no arc leaves a demand node (demand self-loops included)
    /// - every arc has exactly one cost, and no cost is given for an undeclared arc
    /// - all quantities and costs are finite and non-negative
    ///
    /// Demand scaling and capacity overrides in `config.adjustments` are applied here.
    ///
    pub fn new(config: &NetworkConfig) -> Result<TransportNetwork, ValidationError> {
        let adjustments = &config.adjustments;
        if let Some(scale) = adjustments.demand_scale {
            if !is_valid_quantity(scale) {
                return Err(ValidationError::InvalidDemandScale(scale));
            }
        }

        let mut network = TransportNetwork {
            graph: NetworkGraph::new(),
            node_index: HashMap::new(),
            arc_index: HashMap::new(),
        };

        // nodes
        for id in config.supply_nodes.iter() {
            let capacity = *config
                .capacities
                .get(id)
                .ok_or_else(|| ValidationError::MissingCapacity(id.clone()))?;
            check_quantity(id, capacity)?;
            let capacity = match adjustments.capacity_overrides.get(id) {
                Some(&c) => {
                    check_quantity(id, c)?;
                    c
                }
                None => capacity,
            };
            network.add_node(Node::supply(id.as_str(), capacity))?;
        }
        for id in config.transshipment_nodes.iter() {
            network.add_node(Node::transshipment(id.as_str()))?;
        }
        for id in config.demand_nodes.iter() {
            let requirement = *config
                .requirements
                .get(id)
                .ok_or_else(|| ValidationError::MissingRequirement(id.clone()))?;
            check_quantity(id, requirement)?;
            let requirement = adjustments.scaled_requirement(requirement);
            network.add_node(Node::demand(id.as_str(), requirement))?;
        }

        // no stray entries in the per-role tables
        for id in config.capacities.keys() {
            if network.role_of(id) != Some(NodeRole::Supply) {
                return Err(ValidationError::UnexpectedCapacity(id.clone()));
            }
        }
        for id in config.requirements.keys() {
            if network.role_of(id) != Some(NodeRole::Demand) {
                return Err(ValidationError::UnexpectedRequirement(id.clone()));
            }
        }
        for id in adjustments.capacity_overrides.keys() {
            if network.role_of(id) != Some(NodeRole::Supply) {
                return Err(ValidationError::CapacityOverrideOnNonSupply(id.clone()));
            }
        }

        // costs
        let mut costs: HashMap<ArcKey, Cost> = HashMap::new();
        for entry in config.costs.iter() {
            let key = ArcKey::new(entry.origin.as_str(), entry.destination.as_str());
            if costs.insert(key.clone(), entry.cost).is_some() {
                return Err(ValidationError::DuplicateCost(key));
            }
        }

        // arcs
        for (origin, destination) in config.arcs.iter() {
            let key = ArcKey::new(origin.as_str(), destination.as_str());
            let v = network.endpoint(&key, origin)?;
            let w = network.endpoint(&key, destination)?;
            // demand rows bound only the inflow
            if network.graph[v].role() == NodeRole::Demand {
                return Err(ValidationError::ArcFromDemand(key));
            }
            if network.arc_index.contains_key(&key) {
                return Err(ValidationError::DuplicateArc(key));
            }
            let cost = *costs
                .get(&key)
                .ok_or_else(|| ValidationError::MissingCost(key.clone()))?;
            if !is_valid_quantity(cost) {
                return Err(ValidationError::InvalidCost { arc: key, value: cost });
            }
            let e = network.graph.add_edge(v, w, ArcEdge::new(key.clone(), cost));
            network.arc_index.insert(key, e);
        }
        for entry in config.costs.iter() {
            let key = ArcKey::new(entry.origin.as_str(), entry.destination.as_str());
            if !network.arc_index.contains_key(&key) {
                return Err(ValidationError::UnexpectedCost(key));
            }
        }

        debug!(
            "network: {} supply, {} transshipment, {} demand nodes, {} arcs",
            config.supply_nodes.len(),
            config.transshipment_nodes.len(),
            config.demand_nodes.len(),
            network.arc_count()
        );
        Ok(network)
    }

    fn add_node(&mut self, node: Node) -> Result<NodeIndex, ValidationError> {
        if self.node_index.contains_key(node.id()) {
            return Err(ValidationError::DuplicateNode(node.id().to_string()));
        }
        let id = node.id().to_string();
        let v = self.graph.add_node(node);
        self.node_index.insert(id, v);
        Ok(v)
    }

    fn endpoint(&self, key: &ArcKey, id: &str) -> Result<NodeIndex, ValidationError> {
        self.node_index
            .get(id)
            .copied()
            .ok_or_else(|| ValidationError::UnknownNode {
                arc: key.clone(),
                node: id.to_string(),
            })
    }

    fn role_of(&self, id: &str) -> Option<NodeRole> {
        self.node(id).map(|n| n.role())
    }

    //
    // accessors
    //

    pub fn graph(&self) -> &NetworkGraph {
        &self.graph
    }
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.node_index.get(id).map(|&v| &self.graph[v])
    }
    pub fn node_index(&self, id: &str) -> Option<NodeIndex> {
        self.node_index.get(id).copied()
    }
    /// All nodes, in declaration order (supply, transshipment, demand)
    pub fn nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.graph.node_indices().map(move |v| &self.graph[v])
    }
    pub fn nodes_with_role(&self, role: NodeRole) -> impl Iterator<Item = &Node> + '_ {
        self.nodes().filter(move |n| n.role() == role)
    }
    /// All arcs, in declaration order
    pub fn arcs(&self) -> impl Iterator<Item = (EdgeIndex, &ArcEdge)> + '_ {
        self.graph.edge_indices().map(move |e| (e, &self.graph[e]))
    }
    pub fn arc(&self, key: &ArcKey) -> Option<&ArcEdge> {
        self.arc_index.get(key).map(|&e| &self.graph[e])
    }
    pub fn arc_edge(&self, e: EdgeIndex) -> Option<&ArcEdge> {
        self.graph.edge_weight(e)
    }
    pub fn edge_index(&self, key: &ArcKey) -> Option<EdgeIndex> {
        self.arc_index.get(key).copied()
    }
    /// Arcs `(id, j)` leaving the node. Empty for an unknown id.
    pub fn outgoing<'a>(&'a self, id: &str) -> impl Iterator<Item = (EdgeIndex, &'a ArcEdge)> + 'a {
        self.adjacent(id, Direction::Outgoing)
    }
    /// Arcs `(j, id)` entering the node. Empty for an unknown id.
    pub fn incoming<'a>(&'a self, id: &str) -> impl Iterator<Item = (EdgeIndex, &'a ArcEdge)> + 'a {
        self.adjacent(id, Direction::Incoming)
    }
    fn adjacent<'a>(
        &'a self,
        id: &str,
        direction: Direction,
    ) -> impl Iterator<Item = (EdgeIndex, &'a ArcEdge)> + 'a {
        self.node_index(id).into_iter().flat_map(move |v| {
            self.graph
                .edges_directed(v, direction)
                .map(|er| (er.id(), er.weight()))
        })
    }
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }
    pub fn arc_count(&self) -> usize {
        self.graph.edge_count()
    }
    /// sum of the capacities of all supply nodes
    pub fn total_capacity(&self) -> Amount {
        self.nodes().filter_map(|n| n.capacity()).sum()
    }
    /// sum of the requirements of all demand nodes
    pub fn total_requirement(&self) -> Amount {
        self.nodes().filter_map(|n| n.requirement()).sum()
    }
}

impl TryFrom<&NetworkConfig> for TransportNetwork {
    type Error = ValidationError;
    fn try_from(config: &NetworkConfig) -> Result<Self, Self::Error> {
        TransportNetwork::new(config)
    }
}

fn check_quantity(id: &str, value: Amount) -> Result<(), ValidationError> {
    if is_valid_quantity(value) {
        Ok(())
    } else {
        Err(ValidationError::InvalidQuantity {
            node: id.to_string(),
            value,
        })
    }
}

//
// tests
//
#[cfg(test)]
mod tests {
    use super::super::config::ArcCost;
    use super::super::mocks::{mock_small_network, mock_tech_hardware_network};
    use super::*;
    use rstest::rstest;

    #[test]
    fn build_small_network() {
        let n = TransportNetwork::new(&mock_small_network(12.0)).unwrap();
        assert_eq!(n.node_count(), 4);
        assert_eq!(n.arc_count(), 3);
        assert_eq!(n.node("S1").unwrap().capacity(), Some(10.0));
        assert_eq!(n.node("T").unwrap().role(), NodeRole::Transshipment);
        assert_eq!(n.node("D").unwrap().requirement(), Some(12.0));
        assert!(n.node("X").is_none());
        assert_eq!(n.total_capacity(), 15.0);
        assert_eq!(n.total_requirement(), 12.0);
        assert_eq!(n.arc(&ArcKey::new("S2", "T")).unwrap().cost, 2.0);

        // declaration order is kept
        let keys: Vec<String> = n.arcs().map(|(_, a)| a.key.to_string()).collect();
        assert_eq!(keys, vec!["(S1,T)", "(S2,T)", "(T,D)"]);
        let roles: Vec<NodeRole> = n.nodes().map(|v| v.role()).collect();
        assert_eq!(
            roles,
            vec![
                NodeRole::Supply,
                NodeRole::Supply,
                NodeRole::Transshipment,
                NodeRole::Demand
            ]
        );
    }

    #[test]
    fn adjacency() {
        let n = TransportNetwork::new(&mock_small_network(12.0)).unwrap();
        let mut into_t: Vec<String> = n.incoming("T").map(|(_, a)| a.key.origin.clone()).collect();
        into_t.sort();
        assert_eq!(into_t, vec!["S1", "S2"]);
        let out_t: Vec<String> = n
            .outgoing("T")
            .map(|(_, a)| a.key.destination.clone())
            .collect();
        assert_eq!(out_t, vec!["D"]);
        assert_eq!(n.incoming("S1").count(), 0);
        assert_eq!(n.outgoing("D").count(), 0);
        assert_eq!(n.outgoing("unknown").count(), 0);

        let e = n.edge_index(&ArcKey::new("T", "D")).unwrap();
        assert_eq!(n.arc_edge(e).unwrap().cost, 1.0);
    }

    #[test]
    fn tech_hardware_network() {
        let n = TransportNetwork::new(&mock_tech_hardware_network()).unwrap();
        assert_eq!(n.nodes_with_role(NodeRole::Supply).count(), 7);
        assert_eq!(n.nodes_with_role(NodeRole::Transshipment).count(), 4);
        assert_eq!(n.nodes_with_role(NodeRole::Demand).count(), 10);
        assert_eq!(n.arc_count(), 34);
        assert_eq!(n.total_capacity(), 2270.0);
        assert_eq!(n.total_requirement(), 1080.0);
        assert_eq!(n.incoming("K1").count(), 5);
        assert_eq!(n.outgoing("J1").count(), 6);
    }

    #[test]
    fn adjustments_are_applied() {
        let config = mock_small_network(12.0)
            .with_demand_scale(1.25)
            .with_capacity_override("S2", 8.0);
        let n = TransportNetwork::new(&config).unwrap();
        assert_eq!(n.node("D").unwrap().requirement(), Some(15.0));
        assert_eq!(n.node("S2").unwrap().capacity(), Some(8.0));
        assert_eq!(n.node("S1").unwrap().capacity(), Some(10.0));

        let n = TransportNetwork::new(&mock_small_network(9.0).with_demand_scale(1.25)).unwrap();
        // 11.25 truncated
        assert_eq!(n.node("D").unwrap().requirement(), Some(11.0));

        let n = TransportNetwork::new(&mock_small_network(11.5).with_demand_scale(1.0)).unwrap();
        assert_eq!(n.node("D").unwrap().requirement(), Some(11.5));
    }

    fn with_costs(mut config: NetworkConfig, costs: Vec<ArcCost>) -> NetworkConfig {
        config.costs = costs;
        config
    }

    #[rstest]
    #[case::duplicate_node(
        mock_small_network(12.0).demand("S1", 1.0),
        ValidationError::DuplicateNode("S1".to_string())
    )]
    #[case::unknown_origin(
        mock_small_network(12.0).arc("X", "D", 1.0),
        ValidationError::UnknownNode { arc: ArcKey::new("X", "D"), node: "X".to_string() }
    )]
    #[case::unknown_destination(
        mock_small_network(12.0).arc("T", "Y", 1.0),
        ValidationError::UnknownNode { arc: ArcKey::new("T", "Y"), node: "Y".to_string() }
    )]
    #[case::duplicate_arc(
        { let mut c = mock_small_network(12.0); c.arcs.push(("T".to_string(), "D".to_string())); c },
        ValidationError::DuplicateArc(ArcKey::new("T", "D"))
    )]
    #[case::missing_capacity(
        { let mut c = mock_small_network(12.0); c.capacities.remove("S2"); c },
        ValidationError::MissingCapacity("S2".to_string())
    )]
    #[case::missing_requirement(
        { let mut c = mock_small_network(12.0); c.requirements.clear(); c },
        ValidationError::MissingRequirement("D".to_string())
    )]
    #[case::missing_cost(
        { let mut c = mock_small_network(12.0); c.costs.pop(); c },
        ValidationError::MissingCost(ArcKey::new("T", "D"))
    )]
    #[case::duplicate_cost(
        { let c = mock_small_network(12.0); let mut costs = c.costs.clone(); costs.push(costs[0].clone()); with_costs(c, costs) },
        ValidationError::DuplicateCost(ArcKey::new("S1", "T"))
    )]
    #[case::unexpected_cost(
        { let c = mock_small_network(12.0); let mut costs = c.costs.clone(); costs.push(ArcCost { origin: "S1".to_string(), destination: "D".to_string(), cost: 3.0 }); with_costs(c, costs) },
        ValidationError::UnexpectedCost(ArcKey::new("S1", "D"))
    )]
    #[case::capacity_on_demand_node(
        { let mut c = mock_small_network(12.0); c.capacities.insert("D".to_string(), 1.0); c },
        ValidationError::UnexpectedCapacity("D".to_string())
    )]
    #[case::requirement_on_supply_node(
        { let mut c = mock_small_network(12.0); c.requirements.insert("S1".to_string(), 1.0); c },
        ValidationError::UnexpectedRequirement("S1".to_string())
    )]
    #[case::negative_capacity(
        { let mut c = mock_small_network(12.0); c.capacities.insert("S1".to_string(), -1.0); c },
        ValidationError::InvalidQuantity { node: "S1".to_string(), value: -1.0 }
    )]
    #[case::negative_cost(
        mock_small_network(12.0).arc("S1", "D", -2.0),
        ValidationError::InvalidCost { arc: ArcKey::new("S1", "D"), value: -2.0 }
    )]
    #[case::negative_scale(
        mock_small_network(12.0).with_demand_scale(-1.0),
        ValidationError::InvalidDemandScale(-1.0)
    )]
    #[case::override_on_transshipment(
        mock_small_network(12.0).with_capacity_override("T", 3.0),
        ValidationError::CapacityOverrideOnNonSupply("T".to_string())
    )]
    #[case::arc_from_demand(
        mock_small_network(12.0).demand("D2", 3.0).arc("D", "D2", 0.0),
        ValidationError::ArcFromDemand(ArcKey::new("D", "D2"))
    )]
    #[case::demand_self_loop(
        mock_small_network(12.0).arc("D", "D", 0.0),
        ValidationError::ArcFromDemand(ArcKey::new("D", "D"))
    )]
    fn invalid_networks(#[case] config: NetworkConfig, #[case] expected: ValidationError) {
        assert_eq!(TransportNetwork::new(&config).unwrap_err(), expected);
    }

    #[test]
    fn self_loop_is_accepted() {
        let config = mock_small_network(12.0).arc("T", "T", 0.0);
        let n = TransportNetwork::try_from(&config).unwrap();
        assert_eq!(n.outgoing("T").count(), 2);
        assert_eq!(n.incoming("T").count(), 3);
    }
}
