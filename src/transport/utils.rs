//!
//! utils
//!
use super::flow::FlowGraph;
use super::network::TransportNetwork;
use log::debug;
use petgraph::dot::Dot;

///
/// Dump the network as a DOT graph into the debug log
///
pub fn draw(network: &TransportNetwork) {
    debug!("{}", to_dot(network));
}

///
/// Dump the arcs carrying flow as a DOT graph into the debug log
///
pub fn draw_with_flow(graph: &FlowGraph) {
    debug!("{}", Dot::with_config(graph, &[]));
}

/// DOT text of the network. Nodes are labeled `I1 <= 300`, arcs `(I1,J1) 230`.
pub fn to_dot(network: &TransportNetwork) -> String {
    format!("{}", Dot::with_config(network.graph(), &[]))
}
