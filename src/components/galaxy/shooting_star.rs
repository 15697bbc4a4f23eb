//! Recycled shooting-star streaks.
//!
//! Stars are never dropped. A spent star (faded out, or past the far edges)
//! is re-rolled in place, and the pool only ever grows up to its maximum.

use std::f64::consts::FRAC_PI_4;

use fastrand::Rng;

use super::config::FieldConfig;

/// A single streak travelling roughly down and to the right.
#[derive(Clone, Debug, PartialEq)]
pub struct ShootingStar {
	/// Tail position
	pub x: f64,
	pub y: f64,
	pub length: f64,
	/// Pixels per update
	pub speed: f64,
	/// Direction of travel in radians
	pub angle: f64,
	pub opacity: f64,
}

impl ShootingStar {
	/// Random star starting left of the canvas or above it.
	pub fn spawn(rng: &mut Rng, config: &FieldConfig, width: f64, height: f64) -> Self {
		let (x, y) = if rng.bool() {
			(-rng.f64() * width * 0.5, rng.f64() * height)
		} else {
			(rng.f64() * width, -rng.f64() * height * 0.5)
		};

		Self {
			x,
			y,
			length: config.star_length_min
				+ rng.f64() * (config.star_length_max - config.star_length_min),
			speed: config.star_speed_min
				+ rng.f64() * (config.star_speed_max - config.star_speed_min),
			angle: FRAC_PI_4 + (rng.f64() * 2.0 - 1.0) * config.star_angle_jitter,
			opacity: 1.0,
		}
	}

	pub fn reset(&mut self, rng: &mut Rng, config: &FieldConfig, width: f64, height: f64) {
		*self = Self::spawn(rng, config, width, height);
	}

	/// True once the star is invisible or fully past the right/bottom edge.
	pub fn is_spent(&self, width: f64, height: f64) -> bool {
		self.opacity <= 0.0 || self.x > width + self.length || self.y > height + self.length
	}

	/// Move and fade one step, re-rolling if spent. Returns whether a reset happened.
	pub fn update(&mut self, rng: &mut Rng, config: &FieldConfig, width: f64, height: f64) -> bool {
		self.x += self.angle.cos() * self.speed;
		self.y += self.angle.sin() * self.speed;
		self.opacity = (self.opacity - config.shooting_star_fade).max(0.0);

		if self.is_spent(width, height) {
			self.reset(rng, config, width, height);
			true
		} else {
			false
		}
	}

	/// Head of the streak.
	pub fn head(&self) -> (f64, f64) {
		(
			self.x + self.angle.cos() * self.length,
			self.y + self.angle.sin() * self.length,
		)
	}
}

/// Growable, never-shrinking set of shooting stars.
#[derive(Clone, Debug, Default)]
pub struct StarPool {
	stars: Vec<ShootingStar>,
	last_added: f64,
}

impl StarPool {
	/// Starting batch, with the addition clock set to `now`.
	pub fn seeded(rng: &mut Rng, config: &FieldConfig, width: f64, height: f64, now: f64) -> Self {
		let stars = (0..config.initial_shooting_stars())
			.map(|_| ShootingStar::spawn(rng, config, width, height))
			.collect();
		Self {
			stars,
			last_added: now,
		}
	}

	pub fn stars(&self) -> &[ShootingStar] {
		&self.stars
	}

	pub fn len(&self) -> usize {
		self.stars.len()
	}

	pub fn is_empty(&self) -> bool {
		self.stars.is_empty()
	}

	/// Append one star if below the cap and the interval has passed.
	pub fn maybe_grow(
		&mut self,
		rng: &mut Rng,
		config: &FieldConfig,
		width: f64,
		height: f64,
		now: f64,
	) -> bool {
		if self.stars.len() >= config.max_shooting_stars
			|| now - self.last_added <= config.shooting_star_interval_ms
		{
			return false;
		}
		self.stars
			.push(ShootingStar::spawn(rng, config, width, height));
		self.last_added = now;
		true
	}

	pub fn update(&mut self, rng: &mut Rng, config: &FieldConfig, width: f64, height: f64) {
		for star in &mut self.stars {
			star.update(rng, config, width, height);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn star_at(x: f64, y: f64) -> ShootingStar {
		ShootingStar {
			x,
			y,
			length: 60.0,
			speed: 5.0,
			angle: FRAC_PI_4,
			opacity: 1.0,
		}
	}

	#[test]
	fn test_spawn_starts_off_edge() {
		let mut rng = Rng::with_seed(11);
		let config = FieldConfig::default();
		for _ in 0..200 {
			let s = ShootingStar::spawn(&mut rng, &config, 800.0, 600.0);
			assert_eq!(s.opacity, 1.0);
			let left = s.x <= 0.0 && (0.0..=600.0).contains(&s.y);
			let top = s.y <= 0.0 && (0.0..=800.0).contains(&s.x);
			assert!(left || top, "unexpected start ({}, {})", s.x, s.y);
			assert!(s.x >= -400.0 && s.y >= -300.0);
			assert!(s.length >= 40.0 && s.length < 120.0);
			assert!(s.speed >= 4.0 && s.speed < 8.0);
			assert!((s.angle - FRAC_PI_4).abs() <= 0.1);
		}
	}

	#[test]
	fn test_twenty_steps_fade_to_point_seven() {
		let mut rng = Rng::with_seed(12);
		let config = FieldConfig::default();
		let mut star = star_at(-40.0, 100.0);
		for _ in 0..20 {
			assert!(!star.update(&mut rng, &config, 800.0, 600.0));
		}
		assert!((star.opacity - 0.7).abs() < 1e-9);
		let expected_x = -40.0 + 20.0 * 5.0 * FRAC_PI_4.cos();
		assert!((star.x - expected_x).abs() < 1e-9);
	}

	#[test]
	fn test_opacity_strictly_decreases_until_reset() {
		let mut rng = Rng::with_seed(13);
		let config = FieldConfig::default();
		let mut star = star_at(0.0, 0.0);
		star.speed = 0.1;
		let mut previous = star.opacity;
		loop {
			if star.update(&mut rng, &config, 800.0, 600.0) {
				assert_eq!(star.opacity, 1.0);
				break;
			}
			assert!(star.opacity < previous);
			previous = star.opacity;
		}
	}

	#[test]
	fn test_leaving_canvas_resets() {
		let mut rng = Rng::with_seed(14);
		let config = FieldConfig::default();
		let mut star = star_at(800.0 + 58.0, 100.0);
		star.opacity = 0.5;
		assert!(star.update(&mut rng, &config, 800.0, 600.0));
		assert_eq!(star.opacity, 1.0);
		assert!(star.x <= 800.0);
	}

	#[test]
	fn test_head_is_length_away() {
		let star = star_at(10.0, 20.0);
		let (hx, hy) = star.head();
		let d = ((hx - 10.0).powi(2) + (hy - 20.0).powi(2)).sqrt();
		assert!((d - 60.0).abs() < 1e-9);
		assert!(hx > 10.0 && hy > 20.0);
	}

	#[test]
	fn test_pool_grows_on_interval_up_to_max() {
		let mut rng = Rng::with_seed(15);
		let config = FieldConfig::default();
		let mut pool = StarPool::seeded(&mut rng, &config, 800.0, 600.0, 1000.0);
		assert_eq!(pool.len(), 2);

		// Too soon
		assert!(!pool.maybe_grow(&mut rng, &config, 800.0, 600.0, 3000.0));
		assert_eq!(pool.len(), 2);

		assert!(pool.maybe_grow(&mut rng, &config, 800.0, 600.0, 3600.0));
		assert_eq!(pool.len(), 3);

		// At the cap, no matter how long we wait
		assert!(!pool.maybe_grow(&mut rng, &config, 800.0, 600.0, 1.0e9));
		assert_eq!(pool.len(), 3);
	}

	#[test]
	fn test_pool_size_monotone_and_bounded() {
		let mut rng = Rng::with_seed(16);
		let config = FieldConfig {
			max_shooting_stars: 6,
			..FieldConfig::default()
		};
		let mut pool = StarPool::seeded(&mut rng, &config, 640.0, 480.0, 0.0);
		let mut previous = pool.len();
		let mut now = 0.0;
		for _ in 0..5000 {
			now += 16.0;
			pool.maybe_grow(&mut rng, &config, 640.0, 480.0, now);
			pool.update(&mut rng, &config, 640.0, 480.0);
			assert!(pool.len() >= previous);
			assert!(pool.len() <= config.max_shooting_stars);
			previous = pool.len();
		}
		assert_eq!(pool.len(), 6);
	}

	#[test]
	fn test_empty_pool_when_max_is_zero() {
		let mut rng = Rng::with_seed(17);
		let config = FieldConfig {
			max_shooting_stars: 0,
			..FieldConfig::default()
		};
		let mut pool = StarPool::seeded(&mut rng, &config, 100.0, 100.0, 0.0);
		assert!(pool.is_empty());
		assert!(!pool.maybe_grow(&mut rng, &config, 100.0, 100.0, 1.0e6));
	}
}
