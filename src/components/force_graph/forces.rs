//! Positional passes layered on top of the engine's charge integration:
//! per-link target distance, collision and centering.

/// Position and extent of one simulated node.
#[derive(Clone, Debug, PartialEq)]
pub struct Body {
	pub x: f64,
	pub y: f64,
	/// Collision radius.
	pub radius: f64,
	pub pinned: bool,
}

/// A link between two body slots with its target distance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
	pub source: usize,
	pub target: usize,
	pub distance: f64,
}

const EPSILON: f64 = 1e-6;

fn jiggle(i: usize) -> f64 {
	// Deterministic offset for coincident bodies.
	((i % 7) as f64 - 3.0) * 1e-3 + 1e-4
}

fn nudge(body: &mut Body, dx: f64, dy: f64) {
	if !body.pinned {
		body.x += dx;
		body.y += dy;
	}
}

/// Pull or push each link's endpoints toward its target distance.
///
/// Strength is `1 / min(degree)`, and the correction is split so the
/// better-connected endpoint moves less.
pub fn apply_springs(bodies: &mut [Body], springs: &[Spring], alpha: f64) {
	let mut degree = vec![0usize; bodies.len()];
	for s in springs {
		degree[s.source] += 1;
		degree[s.target] += 1;
	}

	for (i, s) in springs.iter().enumerate() {
		if s.source == s.target {
			continue;
		}
		let (sx, sy) = (bodies[s.source].x, bodies[s.source].y);
		let (tx, ty) = (bodies[s.target].x, bodies[s.target].y);
		let (mut dx, mut dy) = (tx - sx, ty - sy);
		if dx.abs() < EPSILON && dy.abs() < EPSILON {
			dx = jiggle(i);
			dy = jiggle(i + 3);
		}
		let len = (dx * dx + dy * dy).sqrt();
		let strength = 1.0 / degree[s.source].min(degree[s.target]) as f64;
		let k = (len - s.distance) / len * alpha * strength;
		let bias =
			degree[s.source] as f64 / (degree[s.source] + degree[s.target]) as f64;

		nudge(&mut bodies[s.target], -dx * k * bias, -dy * k * bias);
		nudge(&mut bodies[s.source], dx * k * (1.0 - bias), dy * k * (1.0 - bias));
	}
}

/// Separate overlapping bodies so their radii no longer intersect.
pub fn apply_collisions(bodies: &mut [Body]) {
	for i in 0..bodies.len() {
		for j in (i + 1)..bodies.len() {
			let (mut dx, mut dy) = (bodies[j].x - bodies[i].x, bodies[j].y - bodies[i].y);
			let min_dist = bodies[i].radius + bodies[j].radius;
			if dx.abs() < EPSILON && dy.abs() < EPSILON {
				dx = jiggle(i + j);
				dy = jiggle(i * 3 + j);
			}
			let dist = (dx * dx + dy * dy).sqrt();
			if dist >= min_dist {
				continue;
			}
			let overlap = (min_dist - dist) / dist;
			let (ux, uy) = (dx * overlap, dy * overlap);
			let (a_free, b_free) = (!bodies[i].pinned, !bodies[j].pinned);
			let share = match (a_free, b_free) {
				(true, true) => 0.5,
				(false, false) => continue,
				_ => 1.0,
			};
			nudge(&mut bodies[i], -ux * share, -uy * share);
			nudge(&mut bodies[j], ux * share, uy * share);
		}
	}
}

/// Translate free bodies so their mean sits on `(cx, cy)`.
pub fn apply_centering(bodies: &mut [Body], cx: f64, cy: f64) {
	let free = bodies.iter().filter(|b| !b.pinned).count();
	if free == 0 {
		return;
	}
	let (sum_x, sum_y) = bodies
		.iter()
		.filter(|b| !b.pinned)
		.fold((0.0, 0.0), |(x, y), b| (x + b.x, y + b.y));
	let (shift_x, shift_y) = (cx - sum_x / free as f64, cy - sum_y / free as f64);
	for body in bodies.iter_mut() {
		nudge(body, shift_x, shift_y);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn body(x: f64, y: f64, radius: f64) -> Body {
		Body {
			x,
			y,
			radius,
			pinned: false,
		}
	}

	fn distance(a: &Body, b: &Body) -> f64 {
		((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
	}

	#[test]
	fn spring_converges_to_distance() {
		let mut bodies = vec![body(0.0, 0.0, 5.0), body(300.0, 0.0, 5.0)];
		let springs = [Spring {
			source: 0,
			target: 1,
			distance: 150.0,
		}];
		for _ in 0..50 {
			apply_springs(&mut bodies, &springs, 0.5);
		}
		assert!((distance(&bodies[0], &bodies[1]) - 150.0).abs() < 1e-3);
	}

	#[test]
	fn spring_pushes_close_bodies_apart() {
		let mut bodies = vec![body(0.0, 0.0, 5.0), body(10.0, 0.0, 5.0)];
		let springs = [Spring {
			source: 0,
			target: 1,
			distance: 100.0,
		}];
		apply_springs(&mut bodies, &springs, 1.0);
		assert!(distance(&bodies[0], &bodies[1]) > 10.0);
	}

	#[test]
	fn spring_moves_only_free_endpoint() {
		let mut bodies = vec![body(0.0, 0.0, 5.0), body(200.0, 0.0, 5.0)];
		bodies[0].pinned = true;
		let springs = [Spring {
			source: 0,
			target: 1,
			distance: 100.0,
		}];
		apply_springs(&mut bodies, &springs, 1.0);
		assert_eq!((bodies[0].x, bodies[0].y), (0.0, 0.0));
		assert!(bodies[1].x < 200.0);
	}

	#[test]
	fn collisions_resolve_overlap() {
		let mut bodies = vec![body(0.0, 0.0, 20.0), body(10.0, 0.0, 12.0)];
		apply_collisions(&mut bodies);
		assert!(distance(&bodies[0], &bodies[1]) >= 32.0 - 1e-9);
		assert!((bodies[0].x + bodies[1].x - 10.0).abs() < 1e-9);
	}

	#[test]
	fn coincident_bodies_are_separated() {
		let mut bodies = vec![body(5.0, 5.0, 10.0), body(5.0, 5.0, 10.0)];
		apply_collisions(&mut bodies);
		assert!(distance(&bodies[0], &bodies[1]) >= 20.0 - 1e-9);
	}

	#[test]
	fn pinned_body_does_not_yield() {
		let mut bodies = vec![body(0.0, 0.0, 10.0), body(5.0, 0.0, 10.0)];
		bodies[0].pinned = true;
		apply_collisions(&mut bodies);
		assert_eq!(bodies[0].x, 0.0);
		assert!((bodies[1].x - 20.0).abs() < 1e-9);
	}

	#[test]
	fn centering_moves_mean() {
		let mut bodies = vec![body(0.0, 0.0, 5.0), body(100.0, 50.0, 5.0)];
		apply_centering(&mut bodies, 480.0, 300.0);
		let mean_x = (bodies[0].x + bodies[1].x) / 2.0;
		let mean_y = (bodies[0].y + bodies[1].y) / 2.0;
		assert!((mean_x - 480.0).abs() < 1e-9);
		assert!((mean_y - 300.0).abs() < 1e-9);
		assert_eq!(bodies[1].x - bodies[0].x, 100.0);
	}
}
