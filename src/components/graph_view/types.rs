use std::collections::HashSet;

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct GraphNode {
	pub id: String,
	pub label: String,
}

/// A directed link between two notes. Either end may name a node that is not
/// in the graph; such edges are skipped when drawing.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct GraphEdge {
	pub source: String,
	pub target: String,
}

/// Wire shape of `GET /graph`. The service may attach extra keys (scope,
/// limit) which are ignored.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct GraphPayload {
	#[serde(default)]
	pub nodes: Vec<GraphNode>,
	#[serde(default)]
	pub edges: Vec<GraphEdge>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(from = "GraphPayload")]
pub struct Graph {
	nodes: Vec<GraphNode>,
	edges: Vec<GraphEdge>,
}

impl Graph {
	/// Build a graph, keeping the first node seen for each id.
	pub fn new(nodes: Vec<GraphNode>, edges: Vec<GraphEdge>) -> Self {
		let mut seen = HashSet::new();
		let nodes = nodes
			.into_iter()
			.filter(|node| seen.insert(node.id.clone()))
			.collect();
		Self { nodes, edges }
	}

	pub fn nodes(&self) -> &[GraphNode] {
		&self.nodes
	}

	pub fn edges(&self) -> &[GraphEdge] {
		&self.edges
	}

	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}
}

impl From<GraphPayload> for Graph {
	fn from(payload: GraphPayload) -> Self {
		Self::new(payload.nodes, payload.edges)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn deserializes_service_payload() {
		let graph: Graph = serde_json::from_str(
			r#"{
				"nodes": [{"id": "a", "label": "Welcome"}, {"id": "b", "label": "Getting Started"}],
				"edges": [{"source": "a", "target": "b"}],
				"scope": null,
				"limit": 200
			}"#,
		)
		.unwrap();
		assert_eq!(graph.nodes().len(), 2);
		assert_eq!(graph.edges()[0].target, "b");
		assert_eq!(graph.nodes()[1].label, "Getting Started");
	}

	#[test]
	fn duplicate_ids_keep_first() {
		let graph = Graph::new(
			vec![
				GraphNode { id: "a".into(), label: "first".into() },
				GraphNode { id: "b".into(), label: "b".into() },
				GraphNode { id: "a".into(), label: "second".into() },
			],
			vec![],
		);
		let labels: Vec<_> = graph.nodes().iter().map(|n| n.label.as_str()).collect();
		assert_eq!(labels, ["first", "b"]);
	}

	#[test]
	fn missing_arrays_mean_empty_graph() {
		let graph: Graph = serde_json::from_str("{}").unwrap();
		assert!(graph.is_empty());
		assert!(graph.edges().is_empty());
	}
}
