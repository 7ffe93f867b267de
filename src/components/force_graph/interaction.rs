//! Pointer interaction state: node pinning during drags, pan and zoom.

use force_graph::DefaultNodeIdx;

use super::energy::SimulationEnergy;

const DEFAULT_MIN_K: f64 = 0.1;
const DEFAULT_MAX_K: f64 = 8.0;

/// Whether a node's position is held by the pointer or left to the simulation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum PinState {
	#[default]
	Free,
	Pinned {
		x: f64,
		y: f64,
	},
}

impl PinState {
	pub fn is_pinned(&self) -> bool {
		matches!(self, Self::Pinned { .. })
	}
}

/// Node drag in progress. A single pointer drags at most one node; a press
/// while a drag is active is ignored.
#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub node_idx: Option<DefaultNodeIdx>,
}

impl DragState {
	pub fn is_active(&self) -> bool {
		self.node_idx.is_some()
	}

	/// Begin dragging `idx`, pinned at its current position `(x, y)`.
	/// Returns `None` when another drag is already in progress.
	pub fn start(
		&mut self,
		idx: DefaultNodeIdx,
		x: f64,
		y: f64,
		energy: &mut SimulationEnergy,
		alpha_target: f64,
	) -> Option<PinState> {
		if self.is_active() {
			return None;
		}
		energy.heat(alpha_target);
		self.node_idx = Some(idx);
		Some(PinState::Pinned { x, y })
	}

	/// Pinned position following the pointer, if a drag is active.
	pub fn move_to(&self, x: f64, y: f64) -> Option<(DefaultNodeIdx, PinState)> {
		self.node_idx.map(|idx| (idx, PinState::Pinned { x, y }))
	}

	/// Release the dragged node. Returns it so its pin can be cleared.
	pub fn end(&mut self, energy: &mut SimulationEnergy) -> Option<DefaultNodeIdx> {
		let idx = self.node_idx.take()?;
		energy.cool();
		Some(idx)
	}
}

#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

/// Translate + scale applied to the whole drawing. Screen = graph * k + (x, y).
#[derive(Clone, Debug, PartialEq)]
pub struct ZoomTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
	min_k: f64,
	max_k: f64,
}

impl ZoomTransform {
	/// Identity transform with scale extent `[min_k, max_k]`. A reversed
	/// extent is swapped; a non-finite or non-positive bound falls back to
	/// `[0.1, 8]`.
	pub fn new(min_k: f64, max_k: f64) -> Self {
		let valid = |k: f64| k.is_finite() && k > 0.0;
		let (min_k, max_k) = if valid(min_k) && valid(max_k) {
			(min_k.min(max_k), min_k.max(max_k))
		} else {
			(DEFAULT_MIN_K, DEFAULT_MAX_K)
		};
		Self {
			x: 0.0,
			y: 0.0,
			k: 1.0_f64.clamp(min_k, max_k),
			min_k,
			max_k,
		}
	}

	/// Screen point to graph coordinates.
	pub fn invert(&self, sx: f64, sy: f64) -> (f64, f64) {
		((sx - self.x) / self.k, (sy - self.y) / self.k)
	}

	/// Set the scale, clamped to the extent, keeping `(px, py)` fixed on screen.
	/// Non-finite scales are ignored.
	pub fn scale_to(&mut self, k: f64, px: f64, py: f64) {
		if !k.is_finite() {
			return;
		}
		let new_k = k.clamp(self.min_k, self.max_k);
		let ratio = new_k / self.k;
		self.x = px - (px - self.x) * ratio;
		self.y = py - (py - self.y) * ratio;
		self.k = new_k;
	}

	pub fn scale_about(&mut self, factor: f64, px: f64, py: f64) {
		self.scale_to(self.k * factor, px, py);
	}

	pub fn translate_to(&mut self, x: f64, y: f64) {
		self.x = x;
		self.y = y;
	}
}

/// Zoom factor for a wheel event's vertical delta.
pub fn wheel_factor(delta_y: f64) -> f64 {
	2f64.powf(-delta_y * 0.002)
}

#[cfg(test)]
mod tests {
	use force_graph::{DefaultNodeIdx, ForceGraph, NodeData, SimulationParameters};

	use super::*;

	fn node_indices(n: usize) -> Vec<DefaultNodeIdx> {
		let mut graph: ForceGraph<(), ()> = ForceGraph::new(SimulationParameters {
			force_charge: 300.0,
			force_spring: 0.0,
			force_max: 100.0,
			node_speed: 3000.0,
			damping_factor: 0.9,
		});
		(0..n)
			.map(|i| {
				graph.add_node(NodeData {
					x: i as f32 * 10.0,
					y: 0.0,
					mass: 1.0,
					is_anchor: false,
					user_data: (),
				})
			})
			.collect()
	}

	fn node_idx() -> DefaultNodeIdx {
		node_indices(1)[0]
	}

	#[test]
	fn drag_pins_then_releases() {
		let mut energy = SimulationEnergy::default();
		let mut drag = DragState::default();
		let idx = node_idx();

		let pin = drag.start(idx, 10.0, 20.0, &mut energy, 0.3);
		assert_eq!(pin, Some(PinState::Pinned { x: 10.0, y: 20.0 }));
		assert!(drag.is_active());
		assert_eq!(energy.target(), 0.3);

		assert_eq!(
			drag.move_to(40.0, 50.0),
			Some((idx, PinState::Pinned { x: 40.0, y: 50.0 }))
		);

		assert_eq!(drag.end(&mut energy), Some(idx));
		assert!(!drag.is_active());
		assert_eq!(energy.target(), 0.0);
		assert_eq!(drag.move_to(1.0, 1.0), None);
	}

	#[test]
	fn end_without_start_is_noop() {
		let mut energy = SimulationEnergy::default();
		energy.heat(0.5);
		let mut drag = DragState::default();
		assert_eq!(drag.end(&mut energy), None);
		assert_eq!(energy.target(), 0.5);
	}

	#[test]
	fn drag_wakes_resting_simulation() {
		let mut energy = SimulationEnergy::default();
		while energy.step().is_some() {}
		let mut drag = DragState::default();
		drag.start(node_idx(), 0.0, 0.0, &mut energy, 0.3);
		assert!(energy.step().is_some());
	}

	#[test]
	fn zoom_scale_is_clamped() {
		let mut zoom = ZoomTransform::new(0.1, 8.0);
		zoom.scale_to(100.0, 0.0, 0.0);
		assert_eq!(zoom.k, 8.0);
		zoom.scale_to(0.0001, 0.0, 0.0);
		assert_eq!(zoom.k, 0.1);
		for _ in 0..200 {
			zoom.scale_about(wheel_factor(-500.0), 10.0, 10.0);
		}
		assert_eq!(zoom.k, 8.0);
	}

	#[test]
	fn second_press_during_drag_is_ignored() {
		let mut energy = SimulationEnergy::default();
		let mut drag = DragState::default();
		let nodes = node_indices(2);
		let (a, b) = (nodes[0], nodes[1]);
		assert_ne!(a, b);

		assert!(drag.start(a, 0.0, 0.0, &mut energy, 0.3).is_some());
		assert_eq!(drag.start(b, 5.0, 5.0, &mut energy, 0.3), None);
		assert_eq!(drag.node_idx, Some(a));

		assert_eq!(drag.end(&mut energy), Some(a));
		assert_eq!(energy.target(), 0.0);
		assert_eq!(drag.end(&mut energy), None);
	}

	#[test]
	fn reversed_zoom_extent_is_swapped() {
		let mut zoom = ZoomTransform::new(8.0, 0.1);
		zoom.scale_to(100.0, 0.0, 0.0);
		assert_eq!(zoom.k, 8.0);
		zoom.scale_to(0.0, 0.0, 0.0);
		assert_eq!(zoom.k, 0.1);
	}

	#[test]
	fn invalid_zoom_extent_uses_default() {
		let mut zoom = ZoomTransform::new(f64::NAN, 8.0);
		assert_eq!(zoom.k, 1.0);
		zoom.scale_to(0.0001, 0.0, 0.0);
		assert_eq!(zoom.k, 0.1);
	}

	#[test]
	fn non_finite_scale_is_ignored() {
		let mut zoom = ZoomTransform::new(0.1, 8.0);
		zoom.scale_to(2.0, 0.0, 0.0);
		zoom.scale_to(f64::NAN, 10.0, 10.0);
		zoom.scale_about(f64::INFINITY, 10.0, 10.0);
		assert_eq!(zoom.k, 2.0);
		assert_eq!((zoom.x, zoom.y), (0.0, 0.0));
	}

	#[test]
	fn zoom_keeps_pointer_fixed() {
		let mut zoom = ZoomTransform::new(0.1, 8.0);
		zoom.translate_to(30.0, -20.0);
		let before = zoom.invert(200.0, 150.0);
		zoom.scale_about(2.0, 200.0, 150.0);
		let after = zoom.invert(200.0, 150.0);
		assert!((before.0 - after.0).abs() < 1e-9);
		assert!((before.1 - after.1).abs() < 1e-9);
		assert_eq!(zoom.k, 2.0);
	}

	#[test]
	fn wheel_direction() {
		assert!(wheel_factor(100.0) < 1.0);
		assert!(wheel_factor(-100.0) > 1.0);
		assert_eq!(wheel_factor(0.0), 1.0);
	}
}
