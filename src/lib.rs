//! galaxy-backdrop: animated canvas backgrounds for a portfolio site.
//!
//! This crate provides WASM components that fill page sections with drifting
//! geometric particles, constellation links and shooting stars, plus a
//! full-viewport spotlight that follows the cursor.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::galaxy::{FieldConfig, GalaxyCanvas, GalaxyTheme, SpotlightTheme};
pub use components::pointer::{PointerPosition, PointerTracker};
pub use components::spotlight::PointerSpotlight;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("galaxy-backdrop: logging initialized");
}

/// Load field overrides from a script element with id="galaxy-config".
/// Expected format: a JSON object with any subset of [`FieldConfig`] fields.
fn load_field_config() -> Option<FieldConfig> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("galaxy-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match serde_json::from_str::<FieldConfig>(&json_text) {
		Ok(config) => {
			info!(
				"galaxy-backdrop: loaded config ({} particles, {} shooting stars)",
				config.particle_count, config.max_shooting_stars
			);
			Some(config)
		}
		Err(e) => {
			warn!("galaxy-backdrop: failed to parse galaxy config: {}", e);
			None
		}
	}
}

/// A full-height page section with its own galaxy background.
#[component]
fn Section(
	#[prop(into)] id: String,
	#[prop(into)] canvas_id: String,
	#[prop(default = false)] with_constellations: bool,
	children: Children,
) -> impl IntoView {
	view! {
		<section id=id class="galaxy-section">
			<GalaxyCanvas id=canvas_id with_constellations=with_constellations />
			<div class="galaxy-section-content">{children()}</div>
		</section>
	}
}

/// Main application component.
/// Installs pointer tracking, provides shared context and lays out the
/// page sections, each with its own animated background.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	provide_context(load_field_config().unwrap_or_default());

	let tracker = PointerTracker::install();
	provide_context(tracker.position());
	let tracker = StoredValue::new_local(Some(tracker));
	on_cleanup(move || {
		let _ = tracker.try_update_value(|t| {
			if let Some(t) = t.take() {
				t.detach();
			}
		});
	});

	view! {
		<Html attr:lang="fr" />
		<Title text="DG PROJECTS | Web & Software Development" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />
		<Meta name="description" content="Web & Software Development" />

		<PointerSpotlight />

		<main>
			<Section id="home" canvas_id="homeCanvas" with_constellations=true>
				<h1>"DG PROJECTS"</h1>
				<p class="subtitle">"Web & Software Development"</p>
			</Section>
			<Section id="about" canvas_id="aboutCanvas" with_constellations=true>
				<h2>"About"</h2>
			</Section>
			<Section id="projects" canvas_id="projectsCanvas">
				<h2>"Projects"</h2>
			</Section>
			<Section id="services" canvas_id="servicesCanvas">
				<h2>"Services"</h2>
			</Section>
		</main>
	}
}
