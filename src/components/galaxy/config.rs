//! Tunable constants for the galaxy field.
//!
//! Every value has a default matching the live site. The struct deserializes
//! with `#[serde(default)]`, so a JSON override only needs the fields it
//! changes.

use serde::Deserialize;

/// Simulation and effect parameters for one galaxy canvas.
///
/// Distances are in canvas pixels, durations in milliseconds (the unit of
/// `performance.now()`), and per-step quantities are applied once per frame.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct FieldConfig {
	/// Particles created on every reset.
	pub particle_count: usize,
	/// Smallest particle size (radius-like).
	pub size_min: f64,
	/// Largest particle size (exclusive).
	pub size_max: f64,
	/// Lowest base opacity.
	pub opacity_min: f64,
	/// Highest base opacity (exclusive).
	pub opacity_max: f64,
	/// Velocity magnitude ceiling, enforced after every step.
	pub drift_speed: f64,
	/// Width of the random velocity perturbation applied per step.
	pub drift_jitter: f64,
	/// Width of the rotation velocity range, centred on zero.
	pub rotation_speed: f64,

	/// Whether constellation links are drawn at all (AND-ed with the per-canvas flag).
	pub constellations: bool,
	/// Particles closer than this at reset time get linked.
	pub connection_distance: f64,
	/// Outgoing links per particle.
	pub max_connections: usize,

	/// Pointer distance at which glow falls to zero.
	pub glow_radius: f64,
	/// Glow added at zero pointer distance.
	pub max_glow: f64,
	/// Time for the whole field to fade in after a reset.
	pub fade_in_ms: f64,

	/// Upper bound on the shooting-star pool.
	pub max_shooting_stars: usize,
	/// Minimum gap between two pool additions.
	pub shooting_star_interval_ms: f64,
	/// Opacity lost by a star on each update.
	pub shooting_star_fade: f64,
	/// Shortest streak.
	pub star_length_min: f64,
	/// Longest streak (exclusive).
	pub star_length_max: f64,
	/// Slowest star, in pixels per step.
	pub star_speed_min: f64,
	/// Fastest star (exclusive).
	pub star_speed_max: f64,
	/// Half-width of the random angle offset around 45 degrees, in radians.
	pub star_angle_jitter: f64,
}

impl Default for FieldConfig {
	fn default() -> Self {
		Self {
			particle_count: 280,
			size_min: 1.0,
			size_max: 3.0,
			opacity_min: 0.3,
			opacity_max: 0.8,
			drift_speed: 0.06,
			drift_jitter: 0.001,
			rotation_speed: 0.02,

			constellations: true,
			connection_distance: 120.0,
			max_connections: 4,

			glow_radius: 150.0,
			max_glow: 0.6,
			fade_in_ms: 3000.0,

			max_shooting_stars: 3,
			shooting_star_interval_ms: 2500.0,
			shooting_star_fade: 0.015,
			star_length_min: 40.0,
			star_length_max: 120.0,
			star_speed_min: 4.0,
			star_speed_max: 8.0,
			star_angle_jitter: 0.1,
		}
	}
}

impl FieldConfig {
	/// Size of the starting shooting-star batch: half the pool, rounded up.
	pub fn initial_shooting_stars(&self) -> usize {
		self.max_shooting_stars.div_ceil(2)
	}
}
