use std::f64::consts::PI;

use super::types::Graph;

/// Centre and ring radius of the radial layout, in canvas units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadialLayout {
	pub cx: f64,
	pub cy: f64,
	pub radius: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PositionedNode {
	pub id: String,
	pub label: String,
	pub x: f64,
	pub y: f64,
	pub is_focus: bool,
}

impl RadialLayout {
	/// Position every node of `graph`.
	///
	/// When `focus` names a node of the graph it is emitted first, at the
	/// centre, and the remaining nodes share the ring in their original order.
	/// Otherwise all nodes share the ring and nothing is centred. The result
	/// depends only on node order and `focus`.
	pub fn layout(&self, graph: &Graph, focus: Option<&str>) -> Vec<PositionedNode> {
		let nodes = graph.nodes();
		let focus = focus.and_then(|id| nodes.iter().find(|n| n.id == id));

		let mut out = Vec::with_capacity(nodes.len());
		if let Some(focused) = focus {
			out.push(PositionedNode {
				id: focused.id.clone(),
				label: focused.label.clone(),
				x: self.cx,
				y: self.cy,
				is_focus: true,
			});
		}

		let ring: Vec<_> = nodes
			.iter()
			.filter(|n| focus.is_none_or(|f| f.id != n.id))
			.collect();
		let count = ring.len().max(1) as f64;
		for (i, node) in ring.into_iter().enumerate() {
			let angle = 2.0 * PI * i as f64 / count;
			out.push(PositionedNode {
				id: node.id.clone(),
				label: node.label.clone(),
				x: self.cx + self.radius * angle.cos(),
				y: self.cy + self.radius * angle.sin(),
				is_focus: false,
			});
		}
		out
	}
}
