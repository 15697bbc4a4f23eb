//! Drifting background shapes and their constellation links.

use std::f64::consts::TAU;

use fastrand::Rng;

use super::config::FieldConfig;
use super::state::distance;

/// Outline drawn for a particle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeKind {
	Circle,
	Square,
	Triangle,
	Hexagon,
}

impl ShapeKind {
	pub const ALL: [ShapeKind; 4] = [
		ShapeKind::Circle,
		ShapeKind::Square,
		ShapeKind::Triangle,
		ShapeKind::Hexagon,
	];

	/// Uniform pick over [`ShapeKind::ALL`].
	pub fn random(rng: &mut Rng) -> Self {
		Self::ALL[rng.usize(..Self::ALL.len())]
	}
}

/// A single drifting shape.
///
/// `size` and `opacity` are fixed at creation; everything else moves.
#[derive(Clone, Debug)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub dx: f64,
	pub dy: f64,
	pub rotation: f64,
	pub d_rotation: f64,
	pub shape: ShapeKind,
	/// Indices of linked peers in the owning population.
	pub connections: Vec<usize>,
	size: f64,
	opacity: f64,
}

impl Particle {
	/// A motionless particle at `(x, y)`.
	pub fn new(x: f64, y: f64, size: f64, opacity: f64, shape: ShapeKind) -> Self {
		Self {
			x,
			y,
			dx: 0.0,
			dy: 0.0,
			rotation: 0.0,
			d_rotation: 0.0,
			shape,
			connections: Vec::new(),
			size,
			opacity,
		}
	}

	/// Random particle somewhere inside a `width` x `height` canvas.
	pub fn spawn(rng: &mut Rng, config: &FieldConfig, width: f64, height: f64) -> Self {
		let mut particle = Self::new(
			rng.f64() * width,
			rng.f64() * height,
			config.size_min + rng.f64() * (config.size_max - config.size_min),
			config.opacity_min + rng.f64() * (config.opacity_max - config.opacity_min),
			ShapeKind::random(rng),
		);
		particle.dx = (rng.f64() - 0.5) * config.drift_speed;
		particle.dy = (rng.f64() - 0.5) * config.drift_speed;
		particle.rotation = rng.f64() * TAU;
		particle.d_rotation = (rng.f64() - 0.5) * config.rotation_speed;
		particle
	}

	pub fn size(&self) -> f64 {
		self.size
	}

	pub fn base_opacity(&self) -> f64 {
		self.opacity
	}

	pub fn speed(&self) -> f64 {
		(self.dx * self.dx + self.dy * self.dy).sqrt()
	}

	/// Advance one frame: move, bounce off the canvas edges, wobble the
	/// velocity a little and cap it at `drift_speed`.
	pub fn drift(&mut self, rng: &mut Rng, config: &FieldConfig, width: f64, height: f64) {
		self.x += self.dx;
		self.y += self.dy;
		self.rotation += self.d_rotation;

		(self.x, self.dx) = reflect(self.x, self.dx, width);
		(self.y, self.dy) = reflect(self.y, self.dy, height);

		self.dx += (rng.f64() - 0.5) * config.drift_jitter;
		self.dy += (rng.f64() - 0.5) * config.drift_jitter;

		let speed = self.speed();
		if speed > config.drift_speed {
			self.dx = self.dx / speed * config.drift_speed;
			self.dy = self.dy / speed * config.drift_speed;
		}
	}
}

/// Mirror a coordinate that left `[0, extent]` back inside and point its
/// velocity inwards.
fn reflect(pos: f64, vel: f64, extent: f64) -> (f64, f64) {
	let extent = extent.max(0.0);
	if pos < 0.0 {
		((-pos).min(extent), vel.abs())
	} else if pos > extent {
		((2.0 * extent - pos).max(0.0), -vel.abs())
	} else {
		(pos, vel)
	}
}

/// Fresh population for a `width` x `height` canvas.
pub fn spawn_population(
	rng: &mut Rng,
	config: &FieldConfig,
	width: f64,
	height: f64,
) -> Vec<Particle> {
	(0..config.particle_count)
		.map(|_| Particle::spawn(rng, config, width, height))
		.collect()
}

/// Link nearby particles using their current positions.
///
/// Each particle scans the whole population in index order and keeps the
/// first `max_links` peers closer than `max_distance`. Links are stored on
/// the scanning particle only, so a capped particle can be linked to without
/// linking back.
pub fn link_constellations(particles: &mut [Particle], max_distance: f64, max_links: usize) {
	let positions: Vec<(f64, f64)> = particles.iter().map(|p| (p.x, p.y)).collect();

	for (i, particle) in particles.iter_mut().enumerate() {
		particle.connections.clear();
		for (j, &(x, y)) in positions.iter().enumerate() {
			if particle.connections.len() >= max_links {
				break;
			}
			if i != j && distance(particle.x, particle.y, x, y) < max_distance {
				particle.connections.push(j);
			}
		}
	}
}
