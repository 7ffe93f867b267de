//! Simulation "temperature". Decays toward a target every step; the
//! simulation rests once it drops below the floor and the target is zero.

const ALPHA_MIN: f64 = 0.001;

#[derive(Clone, Debug, PartialEq)]
pub struct SimulationEnergy {
	alpha: f64,
	target: f64,
	decay: f64,
}

impl Default for SimulationEnergy {
	fn default() -> Self {
		Self {
			alpha: 1.0,
			target: 0.0,
			decay: 1.0 - ALPHA_MIN.powf(1.0 / 300.0),
		}
	}
}

impl SimulationEnergy {
	pub fn alpha(&self) -> f64 {
		self.alpha
	}

	pub fn target(&self) -> f64 {
		self.target
	}

	pub fn is_resting(&self) -> bool {
		self.alpha < ALPHA_MIN
	}

	/// Raise the target and wake the simulation.
	pub fn heat(&mut self, target: f64) {
		self.target = target.clamp(0.0, 1.0);
		if self.is_resting() {
			self.alpha = ALPHA_MIN;
		}
	}

	/// Let the simulation settle back to rest.
	pub fn cool(&mut self) {
		self.target = 0.0;
	}

	/// Advance one step. Returns the alpha to apply, or `None` while resting.
	pub fn step(&mut self) -> Option<f64> {
		if self.is_resting() && self.target < ALPHA_MIN {
			return None;
		}
		self.alpha += (self.target - self.alpha) * self.decay;
		self.alpha = self.alpha.clamp(0.0, 1.0);
		Some(self.alpha)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn cools_to_rest_in_about_300_steps() {
		let mut energy = SimulationEnergy::default();
		let mut steps = 0;
		while energy.step().is_some() {
			steps += 1;
			assert!(steps < 1000);
		}
		assert!((295..=305).contains(&steps));
		assert!(energy.is_resting());
	}

	#[test]
	fn heat_wakes_and_holds_target() {
		let mut energy = SimulationEnergy::default();
		while energy.step().is_some() {}
		energy.heat(0.3);
		for _ in 0..2000 {
			assert!(energy.step().is_some());
		}
		assert!((energy.alpha() - 0.3).abs() < 1e-3);
	}

	#[test]
	fn cool_returns_to_rest() {
		let mut energy = SimulationEnergy::default();
		energy.heat(0.3);
		for _ in 0..500 {
			energy.step();
		}
		energy.cool();
		assert_eq!(energy.target(), 0.0);
		let mut steps = 0;
		while energy.step().is_some() {
			steps += 1;
			assert!(steps < 1000);
		}
	}

	#[test]
	fn alpha_stays_in_unit_range() {
		let mut energy = SimulationEnergy::default();
		energy.heat(5.0);
		for _ in 0..100 {
			let alpha = energy.step().unwrap();
			assert!((0.0..=1.0).contains(&alpha));
		}
		assert_eq!(energy.target(), 1.0);
	}
}
