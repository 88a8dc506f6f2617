//! Flow assignment definitions
//! - FlowAssignment
//! - FlowGraph, the subgraph induced by the arcs carrying flow
//! - feasibility checks of a flow against a network
use super::amount::{is_positive, sim_eq, sim_le, Amount};
use super::arc::ArcKey;
use super::network::TransportNetwork;
use super::node::NodeRole;
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::{BTreeMap, HashMap};

/// Graph of the arcs with positive flow. Nodes are node ids, edges are flow amounts.
pub type FlowGraph = DiGraph<String, Amount>;

/// Flow definitions
///
/// FlowAssignment is a mapping of arc `(i, j)` to its flow amount `x(i, j) > 0`.
/// Arcs without flow are not stored.
#[derive(PartialEq, Debug, Clone, Default)]
pub struct FlowAssignment(BTreeMap<ArcKey, Amount>);

impl FlowAssignment {
    pub fn empty() -> FlowAssignment {
        FlowAssignment(BTreeMap::new())
    }
    ///
    /// Keep only the strictly positive values. Values at or below `EPS` are solver noise.
    ///
    pub fn from_positive<I: IntoIterator<Item = (ArcKey, Amount)>>(values: I) -> FlowAssignment {
        FlowAssignment(values.into_iter().filter(|&(_, f)| is_positive(f)).collect())
    }
    pub fn from_vec(vec: &[(ArcKey, Amount)]) -> FlowAssignment {
        FlowAssignment::from_positive(vec.iter().cloned())
    }
    pub fn get(&self, key: &ArcKey) -> Option<Amount> {
        self.0.get(key).copied()
    }
    /// flow on the arc `(origin, destination)`, zero when it carries none
    pub fn flow(&self, origin: &str, destination: &str) -> Amount {
        self.get(&ArcKey::new(origin, destination)).unwrap_or(0.0)
    }
    pub fn has(&self, key: &ArcKey) -> bool {
        self.0.contains_key(key)
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// `(arc, flow)` pairs ordered by arc
    pub fn iter(&self) -> impl Iterator<Item = (&ArcKey, Amount)> + '_ {
        self.0.iter().map(|(k, &f)| (k, f))
    }
    /// total flow leaving the node
    pub fn outflow(&self, id: &str) -> Amount {
        self.iter()
            .filter(|(k, _)| k.origin == id)
            .map(|(_, f)| f)
            .sum()
    }
    /// total flow entering the node
    pub fn inflow(&self, id: &str) -> Amount {
        self.iter()
            .filter(|(k, _)| k.destination == id)
            .map(|(_, f)| f)
            .sum()
    }
    ///
    /// Build the subgraph induced by the arcs carrying flow.
    /// Only nodes touched by such an arc are included.
    ///
    pub fn to_flow_graph(&self) -> FlowGraph {
        let mut graph = FlowGraph::new();
        let mut index: HashMap<String, NodeIndex> = HashMap::new();
        for (key, f) in self.iter() {
            let v = node_of(&mut graph, &mut index, &key.origin);
            let w = node_of(&mut graph, &mut index, &key.destination);
            graph.add_edge(v, w, f);
        }
        graph
    }
}

fn node_of(graph: &mut FlowGraph, index: &mut HashMap<String, NodeIndex>, id: &str) -> NodeIndex {
    *index
        .entry(id.to_string())
        .or_insert_with(|| graph.add_node(id.to_string()))
}

///
/// Check if the flow is valid on the network, i.e. it satisfies
/// - flows are defined only on arcs of the network
/// - supply capacity constraint
/// - demand requirement constraint
/// - flow conservation at transshipment nodes
///
pub fn is_valid_flow(flow: &FlowAssignment, network: &TransportNetwork) -> bool {
    is_defined_on_network(flow, network)
        && is_within_supply_capacity(flow, network)
        && is_meeting_demand_requirements(flow, network)
        && is_conserving_at_transshipment(flow, network)
}

///
/// Every arc with flow is an arc of the network
///
pub fn is_defined_on_network(flow: &FlowAssignment, network: &TransportNetwork) -> bool {
    flow.iter().all(|(k, _)| network.arc(k).is_some())
}

///
/// For each supply node, `Σ x(n, j) <= capacity(n)`.
///
pub fn is_within_supply_capacity(flow: &FlowAssignment, network: &TransportNetwork) -> bool {
    network.nodes_with_role(NodeRole::Supply).all(|n| {
        let out_flow = network_outflow(flow, network, n.id());
        sim_le(out_flow, n.capacity().unwrap_or(0.0))
    })
}

///
/// For each demand node, `Σ x(j, n) == requirement(n)`.
///
pub fn is_meeting_demand_requirements(flow: &FlowAssignment, network: &TransportNetwork) -> bool {
    network.nodes_with_role(NodeRole::Demand).all(|n| {
        let in_flow = network_inflow(flow, network, n.id());
        sim_eq(in_flow, n.requirement().unwrap_or(0.0))
    })
}

///
/// For each transshipment node, `Σ x(n, j) == Σ x(j, n)`.
///
pub fn is_conserving_at_transshipment(flow: &FlowAssignment, network: &TransportNetwork) -> bool {
    network.nodes_with_role(NodeRole::Transshipment).all(|n| {
        let in_flow = network_inflow(flow, network, n.id());
        let out_flow = network_outflow(flow, network, n.id());
        sim_eq(in_flow, out_flow)
    })
}

fn network_outflow(flow: &FlowAssignment, network: &TransportNetwork, id: &str) -> Amount {
    network
        .outgoing(id)
        .map(|(_, a)| flow.get(&a.key).unwrap_or(0.0))
        .sum()
}

fn network_inflow(flow: &FlowAssignment, network: &TransportNetwork, id: &str) -> Amount {
    network
        .incoming(id)
        .map(|(_, a)| flow.get(&a.key).unwrap_or(0.0))
        .sum()
}

//
// tests
//
#[cfg(test)]
mod tests {
    use super::super::mocks::mock_small_network;
    use super::*;
    use petgraph::visit::EdgeRef;

    fn k(o: &str, d: &str) -> ArcKey {
        ArcKey::new(o, d)
    }

    #[test]
    fn zero_and_noise_are_dropped() {
        let f = FlowAssignment::from_vec(&[
            (k("S1", "T"), 10.0),
            (k("S2", "T"), 0.0),
            (k("T", "D"), 1e-11),
        ]);
        assert_eq!(f.len(), 1);
        assert!(f.has(&k("S1", "T")));
        assert!(!f.has(&k("S2", "T")));
        assert_eq!(f.get(&k("T", "D")), None);
        assert_eq!(f.flow("T", "D"), 0.0);
        assert!(FlowAssignment::empty().is_empty());
    }

    #[test]
    fn inflow_and_outflow() {
        let f = FlowAssignment::from_vec(&[
            (k("S1", "T"), 10.0),
            (k("S2", "T"), 2.0),
            (k("T", "D"), 12.0),
        ]);
        assert_eq!(f.inflow("T"), 12.0);
        assert_eq!(f.outflow("T"), 12.0);
        assert_eq!(f.outflow("S1"), 10.0);
        assert_eq!(f.inflow("S1"), 0.0);
        let arcs: Vec<String> = f.iter().map(|(k, _)| k.to_string()).collect();
        assert_eq!(arcs, vec!["(S1,T)", "(S2,T)", "(T,D)"]);
    }

    #[test]
    fn flow_valid_tests() {
        let n = TransportNetwork::new(&mock_small_network(12.0)).unwrap();

        // 26 units of cost, the cheapest way to deliver 12
        let f1 = FlowAssignment::from_vec(&[
            (k("S1", "T"), 10.0),
            (k("S2", "T"), 2.0),
            (k("T", "D"), 12.0),
        ]);
        assert!(is_defined_on_network(&f1, &n));
        assert!(is_within_supply_capacity(&f1, &n));
        assert!(is_meeting_demand_requirements(&f1, &n));
        assert!(is_conserving_at_transshipment(&f1, &n));
        assert!(is_valid_flow(&f1, &n));

        // S1 ships 12 with only 10 available
        let f2 = FlowAssignment::from_vec(&[(k("S1", "T"), 12.0), (k("T", "D"), 12.0)]);
        assert!(!is_within_supply_capacity(&f2, &n));
        assert!(is_meeting_demand_requirements(&f2, &n));
        assert!(is_conserving_at_transshipment(&f2, &n));
        assert!(!is_valid_flow(&f2, &n));

        // over-delivery is not allowed
        let f3 = FlowAssignment::from_vec(&[
            (k("S1", "T"), 10.0),
            (k("S2", "T"), 3.0),
            (k("T", "D"), 13.0),
        ]);
        assert!(is_within_supply_capacity(&f3, &n));
        assert!(!is_meeting_demand_requirements(&f3, &n));

        // T keeps 2 units
        let f4 = FlowAssignment::from_vec(&[
            (k("S1", "T"), 10.0),
            (k("S2", "T"), 4.0),
            (k("T", "D"), 12.0),
        ]);
        assert!(!is_conserving_at_transshipment(&f4, &n));
        assert!(!is_valid_flow(&f4, &n));

        // flow on an arc that does not exist
        let f5 = FlowAssignment::from_vec(&[(k("S1", "D"), 12.0)]);
        assert!(!is_defined_on_network(&f5, &n));
        assert!(!is_valid_flow(&f5, &n));
    }

    #[test]
    fn induced_flow_graph() {
        let f = FlowAssignment::from_vec(&[
            (k("S1", "T"), 10.0),
            (k("S2", "T"), 2.0),
            (k("T", "D"), 12.0),
            (k("S3", "D"), 0.0),
        ]);
        let g = f.to_flow_graph();
        assert_eq!(g.node_count(), 4);
        assert_eq!(g.edge_count(), 3);
        let t = g.node_indices().find(|&v| g[v] == "T").unwrap();
        let into_t: Amount = g
            .edges_directed(t, petgraph::Direction::Incoming)
            .map(|er| *er.weight())
            .sum();
        assert_eq!(into_t, 12.0);
    }
}
