//! Node derivation: one node per distinct edge endpoint, grouped by link type.
//!
//! Group assignment is last-writer-wins. A node seen as the target of a
//! `Field-Role` edge and later as the source of a `Field-Role` edge ends up
//! as whatever the final edge touching it implies; conflicts are not reported.

use indexmap::IndexMap;

use super::types::{Edge, GraphData, Node, NodeGroup};

/// Derive the node set from an edge list, in order of first appearance.
pub fn derive_nodes(edges: &[Edge]) -> Vec<Node> {
	let mut groups: IndexMap<&str, NodeGroup> = IndexMap::new();

	for edge in edges {
		groups.entry(&edge.source).or_default();
		groups.entry(&edge.target).or_default();

		if let Some((source_group, target_group)) = edge.link_type.endpoint_groups() {
			groups.insert(&edge.source, source_group);
			groups.insert(&edge.target, target_group);
		}
	}

	groups
		.into_iter()
		.map(|(id, group)| Node {
			id: id.to_string(),
			group,
			radius: group.radius(),
		})
		.collect()
}

/// Derive nodes and bundle them with the edges they came from.
pub fn derive_graph(edges: Vec<Edge>) -> GraphData {
	GraphData {
		nodes: derive_nodes(&edges),
		edges,
	}
}
