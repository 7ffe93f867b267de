//! Simulation and drawing parameters derived from the graph.

use super::types::Node;

/// Tunables for the simulation and canvas.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutConfig {
	/// Logical viewbox width.
	pub width: f64,
	/// Logical viewbox height.
	pub height: f64,
	/// Many-body strength. Negative repels.
	pub charge_strength: f64,
	/// Link distance when an edge has no usable value.
	pub default_link_distance: f64,
	/// Lower bound of the value-based link distance.
	pub min_link_distance: f64,
	/// Added to a node's radius for collision.
	pub collision_padding: f64,
	/// Gap between a node's edge and its label.
	pub label_offset: f64,
	/// Zoom scale extent.
	pub min_zoom: f64,
	/// Upper bound of the zoom scale.
	pub max_zoom: f64,
	/// Energy target while a node is being dragged.
	pub drag_alpha_target: f64,
}

impl Default for LayoutConfig {
	fn default() -> Self {
		Self {
			width: 960.0,
			height: 600.0,
			charge_strength: -300.0,
			default_link_distance: 100.0,
			min_link_distance: 50.0,
			collision_padding: 5.0,
			label_offset: 10.0,
			min_zoom: 0.1,
			max_zoom: 8.0,
			drag_alpha_target: 0.3,
		}
	}
}

impl LayoutConfig {
	/// Target distance for a link. Higher values pull endpoints closer,
	/// bounded below by `min_link_distance`. Any present value counts,
	/// including zero; NaN and missing values fall back to
	/// `default_link_distance`.
	pub fn link_distance(&self, value: Option<f64>) -> f64 {
		match value {
			Some(v) if !v.is_nan() => self.min_link_distance.max(200.0 - v / 10.0),
			_ => self.default_link_distance,
		}
	}

	/// Collision radius: the node's radius plus padding.
	pub fn collision_radius(&self, node: &Node) -> f64 {
		node.radius + self.collision_padding
	}

	/// Centering target, the middle of the viewbox.
	pub fn center(&self) -> (f64, f64) {
		(self.width / 2.0, self.height / 2.0)
	}

	/// Label anchor below a node at `(x, y)`.
	pub fn label_position(&self, x: f64, y: f64, radius: f64) -> (f64, f64) {
		(x, y + radius + self.label_offset)
	}
}

/// Stroke width of a link line. Absent values draw at width 1.
pub fn link_stroke_width(value: Option<f64>) -> f64 {
	match value {
		Some(v) if v >= 0.0 => v.sqrt() / 5.0,
		_ => 1.0,
	}
}
