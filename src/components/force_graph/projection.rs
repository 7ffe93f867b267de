//! Simulation snapshot to drawable geometry. Called once per frame.

use crate::graph::{LayoutConfig, Node, link_stroke_width};

/// A node with its current simulated position.
#[derive(Clone, Debug)]
pub struct NodeView<'a> {
	pub node: &'a Node,
	pub x: f64,
	pub y: f64,
}

/// A link between two entries of the node snapshot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinkView {
	pub source: usize,
	pub target: usize,
	pub value: Option<f64>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Line {
	pub x1: f64,
	pub y1: f64,
	pub x2: f64,
	pub y2: f64,
	pub width: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Circle {
	pub cx: f64,
	pub cy: f64,
	pub r: f64,
	pub fill: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Label<'a> {
	pub x: f64,
	pub y: f64,
	pub text: &'a str,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RenderState<'a> {
	pub lines: Vec<Line>,
	pub circles: Vec<Circle>,
	pub labels: Vec<Label<'a>>,
}

pub fn project<'a>(
	nodes: &[NodeView<'a>],
	links: &[LinkView],
	config: &LayoutConfig,
) -> RenderState<'a> {
	let lines = links
		.iter()
		.map(|link| {
			let (s, t) = (&nodes[link.source], &nodes[link.target]);
			Line {
				x1: s.x,
				y1: s.y,
				x2: t.x,
				y2: t.y,
				width: link_stroke_width(link.value),
			}
		})
		.collect();

	let circles = nodes
		.iter()
		.map(|view| Circle {
			cx: view.x,
			cy: view.y,
			r: view.node.radius,
			fill: view.node.group.color(),
		})
		.collect();

	let labels = nodes
		.iter()
		.map(|view| {
			let node: &'a Node = view.node;
			let (x, y) = config.label_position(view.x, view.y, node.radius);
			Label {
				x,
				y,
				text: &node.id,
			}
		})
		.collect();

	RenderState {
		lines,
		circles,
		labels,
	}
}
