//! Visual theming for the galaxy backgrounds.
//!
//! Colors and stroke settings only; anything that changes motion lives in
//! [`FieldConfig`](super::config::FieldConfig).

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// Always emits `rgba(...)`, even when opaque, so per-frame alpha
	/// changes never switch notation.
	pub fn to_css(self) -> String {
		format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
	}
}

/// Colors and strokes for particles, constellation edges and shooting stars.
#[derive(Clone, Debug)]
pub struct GalaxyTheme {
	/// Particle fill and shadow color
	pub particle: Color,
	/// Constellation edge stroke
	pub constellation: Color,
	pub constellation_width: f64,
	/// Shooting star stroke
	pub shooting_star: Color,
	pub shooting_star_width: f64,
	/// Shadow blur per unit of particle size
	pub shadow_per_size: f64,
	/// Extra shadow blur per unit of glow boost
	pub shadow_per_glow: f64,
}

impl Default for GalaxyTheme {
	fn default() -> Self {
		Self {
			particle: Color::rgb(139, 58, 58),
			constellation: Color::rgb(169, 77, 77),
			constellation_width: 1.0,
			shooting_star: Color::rgb(139, 58, 58),
			shooting_star_width: 2.0,
			shadow_per_size: 4.0,
			shadow_per_glow: 8.0,
		}
	}
}

/// Radial highlight drawn under the cursor.
#[derive(Clone, Debug)]
pub struct SpotlightTheme {
	pub color: Color,
	/// Gradient circle radius in CSS pixels
	pub radius: f64,
	/// Alpha at the centre
	pub inner_alpha: f64,
	/// Alpha at `mid_stop`
	pub mid_alpha: f64,
	/// Percent of the radius where the falloff ring sits
	pub mid_stop: f64,
	/// Percent of the radius where the gradient becomes transparent
	pub outer_stop: f64,
	/// Stacking order; above page content, below interactive controls
	pub z_index: i32,
}

impl Default for SpotlightTheme {
	fn default() -> Self {
		Self {
			color: Color::rgb(139, 58, 58),
			radius: 800.0,
			inner_alpha: 0.12,
			mid_alpha: 0.06,
			mid_stop: 30.0,
			outer_stop: 60.0,
			z_index: 30,
		}
	}
}
