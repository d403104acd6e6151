use std::collections::HashMap;

use super::layout::{PositionedNode, RadialLayout};
use super::types::Graph;
use crate::config::GraphConfig;

#[derive(Clone, Debug, PartialEq)]
pub struct Circle {
	pub id: String,
	pub x: f64,
	pub y: f64,
	pub r: f64,
	pub is_focus: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Label {
	pub text: String,
	pub x: f64,
	pub y: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Line {
	pub x1: f64,
	pub y1: f64,
	pub x2: f64,
	pub y2: f64,
}

/// Everything the canvas needs to draw one frame of the graph view.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
	pub lines: Vec<Line>,
	pub circles: Vec<Circle>,
	pub labels: Vec<Label>,
}

/// Lay out `graph` around `focus` and turn the result into drawables.
pub fn render_graph(graph: &Graph, focus: Option<&str>, config: &GraphConfig) -> Scene {
	let (cx, cy) = config.center();
	let positioned = RadialLayout { cx, cy, radius: config.radius }.layout(graph, focus);

	let circles = positioned
		.iter()
		.map(|p| Circle {
			id: p.id.clone(),
			x: p.x,
			y: p.y,
			r: if p.is_focus { config.focus_radius } else { config.node_radius },
			is_focus: p.is_focus,
		})
		.collect();
	let labels = positioned
		.iter()
		.map(|p| Label {
			text: p.label.clone(),
			x: p.x + config.focus_radius,
			y: p.y + 4.0,
		})
		.collect();

	Scene {
		lines: resolve_edges(graph, &positioned),
		circles,
		labels,
	}
}

/// Match each edge to positioned endpoints, dropping edges with a missing end.
pub fn resolve_edges(graph: &Graph, positioned: &[PositionedNode]) -> Vec<Line> {
	let by_id: HashMap<&str, &PositionedNode> =
		positioned.iter().map(|p| (p.id.as_str(), p)).collect();
	graph
		.edges()
		.iter()
		.filter_map(|edge| {
			let (s, t) = (by_id.get(edge.source.as_str())?, by_id.get(edge.target.as_str())?);
			Some(Line {
				x1: s.x,
				y1: s.y,
				x2: t.x,
				y2: t.y,
			})
		})
		.collect()
}

impl Scene {
	/// The topmost circle within `hit_radius` of `(x, y)`, in canvas units.
	pub fn node_at_position(&self, x: f64, y: f64, hit_radius: f64) -> Option<&str> {
		self.circles
			.iter()
			.rev()
			.find(|c| {
				let (dx, dy) = (c.x - x, c.y - y);
				(dx * dx + dy * dy).sqrt() < hit_radius.max(c.r)
			})
			.map(|c| c.id.as_str())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::graph_view::types::{GraphEdge, GraphNode};
	use crate::config::AppConfig;

	fn node(id: &str) -> GraphNode {
		GraphNode { id: id.into(), label: id.to_uppercase() }
	}

	fn edge(source: &str, target: &str) -> GraphEdge {
		GraphEdge { source: source.into(), target: target.into() }
	}

	fn sample() -> Graph {
		Graph::new(
			vec![node("a"), node("b"), node("c")],
			vec![edge("a", "b"), edge("b", "ghost"), edge("c", "a"), edge("nobody", "c")],
		)
	}

	fn position(scene: &Scene, id: &str) -> (f64, f64) {
		let circle = scene.circles.iter().find(|c| c.id == id).unwrap();
		(circle.x, circle.y)
	}

	#[test]
	fn dangling_edges_are_dropped() {
		let scene = render_graph(&sample(), None, &AppConfig::default().graph);
		assert_eq!(scene.lines.len(), 4 - 2);
		let ends: Vec<_> = scene.lines.iter().map(|l| ((l.x1, l.y1), (l.x2, l.y2))).collect();
		assert_eq!(
			ends,
			[
				(position(&scene, "a"), position(&scene, "b")),
				(position(&scene, "c"), position(&scene, "a")),
			]
		);
	}

	#[test]
	fn edges_without_any_nodes_render_nothing() {
		let graph = Graph::new(vec![], vec![edge("a", "b")]);
		assert!(render_graph(&graph, None, &AppConfig::default().graph).lines.is_empty());
	}

	#[test]
	fn lines_follow_node_positions() {
		let config = AppConfig::default().graph;
		let scene = render_graph(&sample(), Some("a"), &config);
		let ab = &scene.lines[0];
		assert_eq!((ab.x1, ab.y1), (200.0, 200.0));
		assert_eq!((ab.x2, ab.y2), position(&scene, "b"));
	}

	#[test]
	fn focused_circle_is_larger() {
		let config = AppConfig::default().graph;
		let scene = render_graph(&sample(), Some("b"), &config);
		let focus = scene.circles.iter().find(|c| c.is_focus).unwrap();
		assert_eq!(focus.id, "b");
		assert_eq!(focus.r, config.focus_radius);
		assert!(scene
			.circles
			.iter()
			.filter(|c| !c.is_focus)
			.all(|c| c.r == config.node_radius));
		assert_eq!(scene.labels.len(), 3);
		assert_eq!(scene.labels[0].text, "B");
		assert_eq!(scene.labels[0].x, 200.0 + config.focus_radius);
	}

	#[test]
	fn hit_test_finds_clicked_node() {
		let config = AppConfig::default().graph;
		let scene = render_graph(&sample(), Some("c"), &config);
		assert_eq!(scene.node_at_position(203.0, 198.0, config.hit_radius), Some("c"));
		assert_eq!(scene.node_at_position(0.0, 0.0, config.hit_radius), None);
	}

	#[test]
	fn empty_graph_empty_scene() {
		let scene = render_graph(&Graph::default(), None, &AppConfig::default().graph);
		assert_eq!(scene, Scene::default());
	}
}
