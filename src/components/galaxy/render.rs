//! Canvas rendering for a galaxy field.
//!
//! Draw order per frame:
//! 1. Particles, each with a soft shadow scaled by size and pointer glow
//! 2. Constellation edges (when enabled)
//! 3. Shooting stars

use std::f64::consts::{FRAC_PI_3, TAU};

use web_sys::CanvasRenderingContext2d;

use super::particles::{Particle, ShapeKind};
use super::state::FieldState;
use super::theme::GalaxyTheme;
use crate::components::pointer::PointerPosition;

/// Draws one frame of `state`. `pointer` must already be canvas-relative.
pub fn render(
	state: &FieldState,
	ctx: &CanvasRenderingContext2d,
	theme: &GalaxyTheme,
	pointer: PointerPosition,
	now: f64,
) {
	ctx.clear_rect(0.0, 0.0, state.width, state.height);

	let fade = state.fade_in(now);

	draw_particles(state, ctx, theme, pointer, fade);

	if state.constellations {
		draw_constellations(state, ctx, theme, pointer, fade);
	}

	draw_shooting_stars(state, ctx, theme, fade);
}

fn draw_particles(
	state: &FieldState,
	ctx: &CanvasRenderingContext2d,
	theme: &GalaxyTheme,
	pointer: PointerPosition,
	fade: f64,
) {
	for p in &state.particles {
		let (opacity, glow) = state.particle_opacity(p, pointer, fade);
		let color = theme.particle.with_alpha(opacity).to_css();

		ctx.set_shadow_blur(p.size() * theme.shadow_per_size + glow * theme.shadow_per_glow);
		ctx.set_shadow_color(&color);
		ctx.set_fill_style_str(&color);

		draw_shape(ctx, p);
	}
	ctx.set_shadow_blur(0.0);
}

fn draw_shape(ctx: &CanvasRenderingContext2d, p: &Particle) {
	let size = p.size();

	ctx.save();
	let _ = ctx.translate(p.x, p.y);
	let _ = ctx.rotate(p.rotation);

	match p.shape {
		ShapeKind::Circle => {
			ctx.begin_path();
			let _ = ctx.arc(0.0, 0.0, size, 0.0, TAU);
			ctx.fill();
		}
		ShapeKind::Square => {
			ctx.fill_rect(-size, -size, size * 2.0, size * 2.0);
		}
		ShapeKind::Triangle => {
			ctx.begin_path();
			ctx.move_to(0.0, -size * 1.2);
			ctx.line_to(size * 1.2, size * 0.8);
			ctx.line_to(-size * 1.2, size * 0.8);
			ctx.close_path();
			ctx.fill();
		}
		ShapeKind::Hexagon => {
			ctx.begin_path();
			for i in 0..6 {
				let angle = i as f64 * FRAC_PI_3;
				let (px, py) = (angle.cos() * size, angle.sin() * size);
				if i == 0 {
					ctx.move_to(px, py);
				} else {
					ctx.line_to(px, py);
				}
			}
			ctx.close_path();
			ctx.fill();
		}
	}

	ctx.restore();
}

fn draw_constellations(
	state: &FieldState,
	ctx: &CanvasRenderingContext2d,
	theme: &GalaxyTheme,
	pointer: PointerPosition,
	fade: f64,
) {
	ctx.set_line_width(theme.constellation_width);

	for a in &state.particles {
		for &j in &a.connections {
			let Some(b) = state.particles.get(j) else {
				continue;
			};
			let opacity = state.edge_opacity(a, b, pointer, fade);
			if opacity <= 0.0 {
				continue;
			}

			ctx.set_stroke_style_str(&theme.constellation.with_alpha(opacity).to_css());
			ctx.begin_path();
			ctx.move_to(a.x, a.y);
			ctx.line_to(b.x, b.y);
			ctx.stroke();
		}
	}
}

fn draw_shooting_stars(
	state: &FieldState,
	ctx: &CanvasRenderingContext2d,
	theme: &GalaxyTheme,
	fade: f64,
) {
	ctx.set_line_width(theme.shooting_star_width);

	for star in state.stars.stars() {
		let (hx, hy) = star.head();
		ctx.set_stroke_style_str(
			&theme
				.shooting_star
				.with_alpha(star.opacity * fade)
				.to_css(),
		);
		ctx.begin_path();
		ctx.move_to(star.x, star.y);
		ctx.line_to(hx, hy);
		ctx.stroke();
	}
}
