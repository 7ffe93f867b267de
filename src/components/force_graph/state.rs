use std::collections::HashMap;
use std::f64::consts::PI;

use force_graph::{DefaultNodeIdx, ForceGraph, NodeData, SimulationParameters};

use super::energy::SimulationEnergy;
use super::forces::{self, Body, Spring};
use super::interaction::{DragState, PanState, PinState, ZoomTransform};
use super::projection::{self, LinkView, NodeView, RenderState};
use crate::graph::{GraphData, LayoutConfig, Node};

const NODE_MASS: f32 = 10.0;
const SEED_RADIUS: f64 = 100.0;

/// Per-node payload stored in the engine: the node's slot in `ForceGraphState::nodes`.
#[derive(Clone, Copy, Debug, Default)]
pub struct NodeInfo {
	pub slot: usize,
}

/// Engine parameters. Link attraction is applied by the spring pass, so the
/// engine's own spring force is disabled and no edges are registered with it.
pub fn engine_parameters(config: &LayoutConfig) -> SimulationParameters {
	SimulationParameters {
		force_charge: config.charge_strength.abs() as f32,
		force_spring: 0.0,
		force_max: 100.0,
		node_speed: 3000.0,
		damping_factor: 0.9,
	}
}

pub struct ForceGraphState {
	pub graph: ForceGraph<NodeInfo, ()>,
	pub config: LayoutConfig,
	pub energy: SimulationEnergy,
	pub transform: ZoomTransform,
	pub drag: DragState,
	pub pan: PanState,
	nodes: Vec<Node>,
	slot_of: HashMap<DefaultNodeIdx, usize>,
	pins: Vec<PinState>,
	links: Vec<LinkView>,
	springs: Vec<Spring>,
}

impl ForceGraphState {
	pub fn new(data: &GraphData, config: LayoutConfig) -> Self {
		let mut graph = ForceGraph::new(engine_parameters(&config));
		let mut id_to_slot = HashMap::new();
		let mut slot_of = HashMap::new();
		let (cx, cy) = config.center();

		for (i, node) in data.nodes.iter().enumerate() {
			let angle = (i as f64) * 2.0 * PI / data.nodes.len() as f64;
			let idx = graph.add_node(NodeData {
				x: (cx + SEED_RADIUS * angle.cos()) as f32,
				y: (cy + SEED_RADIUS * angle.sin()) as f32,
				mass: NODE_MASS,
				is_anchor: false,
				user_data: NodeInfo { slot: i },
			});
			id_to_slot.insert(node.id.as_str(), i);
			slot_of.insert(idx, i);
		}

		let mut links = Vec::with_capacity(data.edges.len());
		let mut springs = Vec::with_capacity(data.edges.len());
		for edge in &data.edges {
			if let (Some(&source), Some(&target)) = (
				id_to_slot.get(edge.source.as_str()),
				id_to_slot.get(edge.target.as_str()),
			) {
				links.push(LinkView {
					source,
					target,
					value: edge.value,
				});
				springs.push(Spring {
					source,
					target,
					distance: config.link_distance(edge.value),
				});
			} else {
				log::warn!(
					"Skipping edge {} -> {} with unknown endpoint",
					edge.source, edge.target
				);
			}
		}

		Self {
			graph,
			transform: ZoomTransform::new(config.min_zoom, config.max_zoom),
			config,
			energy: SimulationEnergy::default(),
			drag: DragState::default(),
			pan: PanState::default(),
			pins: vec![PinState::Free; data.nodes.len()],
			nodes: data.nodes.clone(),
			slot_of,
			links,
			springs,
		}
	}

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		self.transform.invert(sx, sy)
	}

	/// Topmost node whose circle contains the screen point.
	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<DefaultNodeIdx> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		let mut found = None;
		self.graph.visit_nodes(|node| {
			let radius = self.nodes[node.data.user_data.slot].radius;
			let (dx, dy) = (node.x() as f64 - gx, node.y() as f64 - gy);
			if (dx * dx + dy * dy).sqrt() <= radius {
				found = Some(node.index());
			}
		});
		found
	}

	pub fn position(&self, idx: DefaultNodeIdx) -> Option<(f64, f64)> {
		let mut position = None;
		self.graph.visit_nodes(|node| {
			if node.index() == idx {
				position = Some((node.x() as f64, node.y() as f64));
			}
		});
		position
	}

	/// Pin or release a node. A pinned node is anchored in the engine and
	/// skipped by every positional pass.
	pub fn set_pin(&mut self, idx: DefaultNodeIdx, pin: PinState) {
		let Some(&slot) = self.slot_of.get(&idx) else {
			return;
		};
		self.pins[slot] = pin;
		self.graph.visit_nodes_mut(|node| {
			if node.index() != idx {
				return;
			}
			match pin {
				PinState::Pinned { x, y } => {
					node.data.x = x as f32;
					node.data.y = y as f32;
					node.data.is_anchor = true;
				}
				PinState::Free => node.data.is_anchor = false,
			}
		});
	}

	pub fn start_drag(&mut self, idx: DefaultNodeIdx) {
		let Some((x, y)) = self.position(idx) else {
			return;
		};
		if let Some(pin) = self.drag.start(
			idx,
			x,
			y,
			&mut self.energy,
			self.config.drag_alpha_target,
		) {
			self.set_pin(idx, pin);
		}
	}

	/// Move the dragged node to the screen point.
	pub fn drag_to(&mut self, sx: f64, sy: f64) {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		if let Some((idx, pin)) = self.drag.move_to(gx, gy) {
			self.set_pin(idx, pin);
		}
	}

	pub fn end_drag(&mut self) {
		if let Some(idx) = self.drag.end(&mut self.energy) {
			self.set_pin(idx, PinState::Free);
		}
	}

	fn bodies(&self) -> Vec<Body> {
		let mut bodies: Vec<Body> = self
			.nodes
			.iter()
			.zip(&self.pins)
			.map(|(node, pin)| Body {
				x: 0.0,
				y: 0.0,
				radius: self.config.collision_radius(node),
				pinned: pin.is_pinned(),
			})
			.collect();
		self.graph.visit_nodes(|node| {
			let body = &mut bodies[node.data.user_data.slot];
			body.x = node.x() as f64;
			body.y = node.y() as f64;
		});
		bodies
	}

	/// Advance the simulation by `dt` seconds. No-op while resting.
	pub fn tick(&mut self, dt: f32) {
		let Some(alpha) = self.energy.step() else {
			return;
		};
		self.graph.update(dt * alpha as f32);

		let mut bodies = self.bodies();
		let (cx, cy) = self.config.center();
		forces::apply_springs(&mut bodies, &self.springs, alpha);
		forces::apply_collisions(&mut bodies);
		forces::apply_centering(&mut bodies, cx, cy);

		self.graph.visit_nodes_mut(|node| {
			let body = &bodies[node.data.user_data.slot];
			if !body.pinned {
				node.data.x = body.x as f32;
				node.data.y = body.y as f32;
			}
		});
	}

	/// Current positions projected to drawable geometry.
	pub fn render_state(&self) -> RenderState<'_> {
		let mut positions = vec![(0.0, 0.0); self.nodes.len()];
		self.graph.visit_nodes(|node| {
			positions[node.data.user_data.slot] = (node.x() as f64, node.y() as f64);
		});
		let views: Vec<NodeView<'_>> = self
			.nodes
			.iter()
			.zip(positions)
			.map(|(node, (x, y))| NodeView { node, x, y })
			.collect();
		projection::project(&views, &self.links, &self.config)
	}
}
