//! Per-canvas field state and the opacity math shared by the renderer.
//!
//! `FieldState` is plain data: it never reads a clock or touches the DOM.
//! Callers pass `now` (milliseconds, `performance.now()` scale) and the
//! canvas-relative pointer in, which keeps every rule here testable on the
//! host.

use fastrand::Rng;

use super::config::FieldConfig;
use super::particles::{Particle, link_constellations, spawn_population};
use super::shooting_star::StarPool;
use crate::components::pointer::PointerPosition;

/// Euclidean distance between two points.
pub fn distance(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
	((x2 - x1).powi(2) + (y2 - y1).powi(2)).sqrt()
}

/// Global opacity ramp after a reset, clamped to `[0, 1]`.
///
/// Non-finite ratios (a broken clock) count as not started, except positive
/// infinity which is simply "long ago".
pub fn fade_in_factor(elapsed: f64, duration: f64) -> f64 {
	if duration <= 0.0 {
		return 1.0;
	}
	let t = elapsed / duration;
	if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) }
}

/// Opacity added by pointer proximity: `max_glow` at distance 0, falling
/// linearly to 0 at `radius`.
pub fn glow_boost(dist: f64, radius: f64, max_glow: f64) -> f64 {
	if dist < radius {
		(1.0 - dist / radius) * max_glow
	} else {
		0.0
	}
}

/// Final draw opacity: base plus glow, capped at 1, then faded in.
pub fn compose_opacity(base: f64, glow: f64, fade: f64) -> f64 {
	(base + glow).min(1.0) * fade
}

/// Everything one galaxy canvas animates.
pub struct FieldState {
	pub config: FieldConfig,
	/// Constellation links are computed and drawn only when set.
	pub constellations: bool,
	pub width: f64,
	pub height: f64,
	pub particles: Vec<Particle>,
	pub stars: StarPool,
	/// Clock value of the last reset, origin of the fade-in.
	pub started_at: f64,
	rng: Rng,
}

impl FieldState {
	/// An empty field; nothing exists until the first [`reset`](Self::reset).
	pub fn new(config: FieldConfig, with_constellations: bool, rng: Rng) -> Self {
		let constellations = with_constellations && config.constellations;
		Self {
			config,
			constellations,
			width: 0.0,
			height: 0.0,
			particles: Vec::new(),
			stars: StarPool::default(),
			started_at: 0.0,
			rng,
		}
	}

	/// Throw away the whole field and rebuild it for a new canvas size.
	pub fn reset(&mut self, width: f64, height: f64, now: f64) {
		self.width = width.max(0.0);
		self.height = height.max(0.0);

		let mut particles = spawn_population(&mut self.rng, &self.config, self.width, self.height);
		if self.constellations {
			link_constellations(
				&mut particles,
				self.config.connection_distance,
				self.config.max_connections,
			);
		}
		self.particles = particles;

		self.stars = StarPool::seeded(&mut self.rng, &self.config, self.width, self.height, now);
		self.started_at = now;
	}

	/// One frame of motion: particles drift, the star pool may grow, stars move.
	pub fn advance(&mut self, now: f64) {
		let (width, height) = (self.width, self.height);

		for particle in &mut self.particles {
			particle.drift(&mut self.rng, &self.config, width, height);
		}

		self.stars
			.maybe_grow(&mut self.rng, &self.config, width, height, now);
		self.stars
			.update(&mut self.rng, &self.config, width, height);
	}

	pub fn fade_in(&self, now: f64) -> f64 {
		fade_in_factor(now - self.started_at, self.config.fade_in_ms)
	}

	/// Glow boost at `(x, y)` for a pointer in canvas coordinates.
	pub fn glow_at(&self, x: f64, y: f64, pointer: PointerPosition) -> f64 {
		if !pointer.is_tracked() {
			return 0.0;
		}
		glow_boost(
			distance(x, y, pointer.x, pointer.y),
			self.config.glow_radius,
			self.config.max_glow,
		)
	}

	/// `(opacity, glow)` for drawing a particle this frame.
	pub fn particle_opacity(
		&self,
		particle: &Particle,
		pointer: PointerPosition,
		fade: f64,
	) -> (f64, f64) {
		let glow = self.glow_at(particle.x, particle.y, pointer);
		(compose_opacity(particle.base_opacity(), glow, fade), glow)
	}

	/// Opacity of the link `a -> b`, from their current separation plus
	/// pointer glow at the midpoint.
	pub fn edge_opacity(
		&self,
		a: &Particle,
		b: &Particle,
		pointer: PointerPosition,
		fade: f64,
	) -> f64 {
		let base = (1.0 - distance(a.x, a.y, b.x, b.y) / self.config.connection_distance).max(0.0);
		let glow = self.glow_at((a.x + b.x) / 2.0, (a.y + b.y) / 2.0, pointer);
		compose_opacity(base, glow, fade)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::galaxy::particles::ShapeKind;

	fn field(with_constellations: bool) -> FieldState {
		FieldState::new(FieldConfig::default(), with_constellations, Rng::with_seed(21))
	}

	#[test]
	fn test_fade_in_endpoints() {
		assert_eq!(fade_in_factor(0.0, 3000.0), 0.0);
		assert_eq!(fade_in_factor(1500.0, 3000.0), 0.5);
		assert_eq!(fade_in_factor(3000.0, 3000.0), 1.0);
		assert_eq!(fade_in_factor(10_000.0, 3000.0), 1.0);
	}

	#[test]
	fn test_fade_in_clamps_bad_clocks() {
		assert_eq!(fade_in_factor(-500.0, 3000.0), 0.0);
		assert_eq!(fade_in_factor(f64::NEG_INFINITY, 3000.0), 0.0);
		assert_eq!(fade_in_factor(f64::INFINITY, 3000.0), 1.0);
		assert_eq!(fade_in_factor(f64::NAN, 3000.0), 0.0);
		assert_eq!(fade_in_factor(100.0, 0.0), 1.0);
	}

	#[test]
	fn test_fade_in_monotone() {
		let mut previous = 0.0;
		for step in -100..400 {
			let f = fade_in_factor(step as f64 * 10.0, 3000.0);
			assert!((0.0..=1.0).contains(&f));
			assert!(f >= previous);
			previous = f;
		}
	}

	#[test]
	fn test_glow_linear_falloff() {
		assert_eq!(glow_boost(0.0, 150.0, 0.6), 0.6);
		assert!((glow_boost(75.0, 150.0, 0.6) - 0.3).abs() < 1e-12);
		assert_eq!(glow_boost(150.0, 150.0, 0.6), 0.0);
		assert_eq!(glow_boost(400.0, 150.0, 0.6), 0.0);
	}

	#[test]
	fn test_compose_caps_at_one() {
		assert_eq!(compose_opacity(0.8, 0.6, 1.0), 1.0);
		assert_eq!(compose_opacity(0.8, 0.6, 0.5), 0.5);
		assert!((compose_opacity(0.3, 0.2, 1.0) - 0.5).abs() < 1e-12);
	}

	#[test]
	fn test_reset_spawns_full_population() {
		let mut state = field(true);
		state.reset(800.0, 600.0, 0.0);
		assert_eq!(state.particles.len(), 280);
		assert_eq!(state.stars.len(), 2);
		assert!(state.particles.iter().any(|p| !p.connections.is_empty()));
	}

	#[test]
	fn test_no_links_without_constellations() {
		let mut state = field(false);
		state.reset(800.0, 600.0, 0.0);
		assert!(state.particles.iter().all(|p| p.connections.is_empty()));
	}

	#[test]
	fn test_config_can_disable_constellations() {
		let config = FieldConfig {
			constellations: false,
			..FieldConfig::default()
		};
		let state = FieldState::new(config, true, Rng::with_seed(22));
		assert!(!state.constellations);
	}

	#[test]
	fn test_resize_replaces_population() {
		let mut state = field(true);
		state.reset(400.0, 300.0, 0.0);
		for _ in 0..50 {
			state.advance(16.0);
		}
		state.reset(800.0, 600.0, 5000.0);

		assert_eq!(state.particles.len(), 280);
		assert!(
			state
				.particles
				.iter()
				.all(|p| (0.0..=800.0).contains(&p.x) && (0.0..=600.0).contains(&p.y))
		);
		// Particles spread over the larger area, not just the old corner.
		assert!(state.particles.iter().any(|p| p.x > 400.0 || p.y > 300.0));
		assert_eq!(state.started_at, 5000.0);
		assert_eq!(state.fade_in(5000.0), 0.0);
	}

	#[test]
	fn test_repeated_resizes_are_clean() {
		let mut state = field(true);
		for i in 0..10 {
			let w = 200.0 + 50.0 * i as f64;
			state.reset(w, w * 0.75, i as f64);
			assert_eq!(state.particles.len(), 280);
			assert_eq!(state.stars.len(), 2);
			for p in &state.particles {
				assert!(p.connections.iter().all(|&j| j < state.particles.len()));
			}
		}
	}

	#[test]
	fn test_advance_keeps_invariants() {
		let mut state = field(true);
		state.reset(300.0, 200.0, 0.0);
		let links: Vec<Vec<usize>> = state.particles.iter().map(|p| p.connections.clone()).collect();
		let mut now = 0.0;
		for _ in 0..2000 {
			now += 16.0;
			state.advance(now);
			for p in &state.particles {
				assert!(p.speed() <= state.config.drift_speed + 1e-12);
				assert!((0.0..=300.0).contains(&p.x) && (0.0..=200.0).contains(&p.y));
			}
			assert!(state.stars.len() <= state.config.max_shooting_stars);
		}
		// Links are never recomputed while drifting.
		let after: Vec<Vec<usize>> = state.particles.iter().map(|p| p.connections.clone()).collect();
		assert_eq!(links, after);
		assert_eq!(state.stars.len(), 3);
	}

	#[test]
	fn test_particle_glow_near_pointer() {
		let state = field(false);
		let p = Particle::new(100.0, 100.0, 2.0, 0.5, ShapeKind::Square);

		let (opacity, glow) = state.particle_opacity(&p, PointerPosition::new(100.0, 100.0), 1.0);
		assert_eq!(glow, 0.6);
		assert_eq!(opacity, 1.0);

		let (opacity, glow) = state.particle_opacity(&p, PointerPosition::new(100.0, 400.0), 0.5);
		assert_eq!(glow, 0.0);
		assert_eq!(opacity, 0.25);
	}

	#[test]
	fn test_pointer_leaving_kills_glow() {
		let mut state = field(true);
		state.reset(800.0, 600.0, 0.0);
		let pointer = PointerPosition::OFF_CANVAS;
		for p in &state.particles {
			assert_eq!(state.glow_at(p.x, p.y, pointer), 0.0);
			let (opacity, glow) = state.particle_opacity(p, pointer, 1.0);
			assert_eq!(glow, 0.0);
			assert_eq!(opacity, p.base_opacity());
		}
	}

	#[test]
	fn test_edge_opacity_tracks_current_distance() {
		let state = field(true);
		let a = Particle::new(0.0, 0.0, 1.0, 0.5, ShapeKind::Circle);
		let mut b = Particle::new(60.0, 0.0, 1.0, 0.5, ShapeKind::Circle);
		let off = PointerPosition::OFF_CANVAS;

		assert!((state.edge_opacity(&a, &b, off, 1.0) - 0.5).abs() < 1e-12);
		b.x = 200.0;
		assert_eq!(state.edge_opacity(&a, &b, off, 1.0), 0.0);

		// Pointer at the midpoint adds the full glow.
		b.x = 60.0;
		let at_mid = PointerPosition::new(30.0, 0.0);
		assert!((state.edge_opacity(&a, &b, at_mid, 1.0) - 1.0).abs() < 1e-12);
		assert!((state.edge_opacity(&a, &b, at_mid, 0.5) - 0.5).abs() < 1e-12);
	}
}
