//! Cursor-following radial highlight over the whole viewport.

use leptos::prelude::*;

use super::galaxy::theme::SpotlightTheme;
use super::pointer::{PointerPosition, use_pointer};

/// CSS `background` value centred on `pointer`.
pub fn spotlight_background(pointer: PointerPosition, theme: &SpotlightTheme) -> String {
	format!(
		"radial-gradient({}px circle at {}px {}px, {}, {} {}%, transparent {}%)",
		theme.radius,
		pointer.x,
		pointer.y,
		theme.color.with_alpha(theme.inner_alpha).to_css(),
		theme.color.with_alpha(theme.mid_alpha).to_css(),
		theme.mid_stop,
		theme.outer_stop,
	)
}

/// Full inline style for the overlay layer. The layer never takes pointer
/// events.
pub fn spotlight_style(pointer: PointerPosition, theme: &SpotlightTheme) -> String {
	format!(
		"position: fixed; inset: 0; pointer-events: none; z-index: {}; background: {};",
		theme.z_index,
		spotlight_background(pointer, theme)
	)
}

/// Fixed overlay redrawn whenever the shared pointer moves.
#[component]
pub fn PointerSpotlight() -> impl IntoView {
	let pointer = use_pointer();
	let theme = SpotlightTheme::default();

	view! {
		<div
			class="pointer-spotlight"
			aria-hidden="true"
			style=move || spotlight_style(pointer.get(), &theme)
		/>
	}
}
