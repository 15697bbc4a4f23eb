//! Leptos component wrapping one galaxy canvas.
//!
//! On mount the component acquires a 2D context, builds a [`FieldState`]
//! sized to the canvas's layout box and starts a `requestAnimationFrame`
//! loop. Window resizes rebuild the whole field. Unmounting cancels the
//! pending frame and removes the resize listener.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use fastrand::Rng;
use leptos::prelude::*;
use log::{debug, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::config::FieldConfig;
use super::render;
use super::state::FieldState;
use super::theme::GalaxyTheme;
use crate::components::listener::WindowListener;
use crate::components::pointer::{PointerPosition, use_pointer};

/// Current `performance.now()`, or 0 when no clock is available.
fn now() -> f64 {
	web_sys::window()
		.and_then(|w| w.performance())
		.map(|p| p.now())
		.unwrap_or(0.0)
}

/// The running animation behind one mounted canvas.
///
/// Callbacks handed to the browser only hold a `Weak` to this, so dropping
/// the last `Rc` after [`teardown`](Self::teardown) frees everything.
struct GalaxyRenderer {
	id: String,
	canvas: HtmlCanvasElement,
	ctx: CanvasRenderingContext2d,
	state: RefCell<FieldState>,
	theme: GalaxyTheme,
	pointer: ReadSignal<PointerPosition>,
	animate: RefCell<Option<Closure<dyn FnMut()>>>,
	frame_id: Cell<Option<i32>>,
	resize_cb: RefCell<Option<WindowListener>>,
	attached: Cell<bool>,
}

impl GalaxyRenderer {
	/// Set up the field and start animating. `None` when the canvas has no
	/// 2D context; nothing is registered in that case.
	fn mount(
		id: String,
		canvas: HtmlCanvasElement,
		config: FieldConfig,
		with_constellations: bool,
		pointer: ReadSignal<PointerPosition>,
	) -> Option<Rc<Self>> {
		let window: Window = web_sys::window()?;
		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")
			.ok()
			.flatten()?
			.dyn_into()
			.ok()?;

		let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
		let state = FieldState::new(config, with_constellations, Rng::with_seed(seed));

		let renderer = Rc::new(Self {
			id,
			canvas,
			ctx,
			state: RefCell::new(state),
			theme: GalaxyTheme::default(),
			pointer,
			animate: RefCell::new(None),
			frame_id: Cell::new(None),
			resize_cb: RefCell::new(None),
			attached: Cell::new(true),
		});
		renderer.resize();

		let weak = Rc::downgrade(&renderer);
		*renderer.resize_cb.borrow_mut() = WindowListener::attach(&window, "resize", move |_| {
			if let Some(r) = weak.upgrade() {
				r.resize();
			}
		});

		let weak = Rc::downgrade(&renderer);
		*renderer.animate.borrow_mut() = Some(Closure::new(move || {
			if let Some(r) = weak.upgrade() {
				r.frame();
			}
		}));
		renderer.schedule(&window);

		Some(renderer)
	}

	/// Match the pixel buffer to the layout box and rebuild the field.
	fn resize(&self) {
		let (w, h) = (
			self.canvas.offset_width().max(0),
			self.canvas.offset_height().max(0),
		);
		self.canvas.set_width(w as u32);
		self.canvas.set_height(h as u32);
		self.state.borrow_mut().reset(w as f64, h as f64, now());
		debug!("galaxy-backdrop: #{} reset at {}x{}", self.id, w, h);
	}

	fn frame(&self) {
		self.frame_id.set(None);
		if !self.attached.get() {
			return;
		}

		let t = now();
		let rect = self.canvas.get_bounding_client_rect();
		let pointer = self
			.pointer
			.try_get_untracked()
			.unwrap_or_default()
			.relative_to(rect.left(), rect.top());

		{
			let mut state = self.state.borrow_mut();
			state.advance(t);
			render::render(&state, &self.ctx, &self.theme, pointer, t);
		}

		if let Some(window) = web_sys::window() {
			self.schedule(&window);
		}
	}

	fn schedule(&self, window: &Window) {
		if !self.attached.get() {
			return;
		}
		if let Some(ref cb) = *self.animate.borrow() {
			match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
				Ok(id) => self.frame_id.set(Some(id)),
				Err(err) => warn!("galaxy-backdrop: #{} could not schedule frame: {:?}", self.id, err),
			}
		}
	}

	/// Stop the loop and unregister listeners. Safe to call more than once.
	fn teardown(&self) {
		if !self.attached.replace(false) {
			return;
		}
		if let Some(id) = self.frame_id.take() {
			if let Some(window) = web_sys::window() {
				let _ = window.cancel_animation_frame(id);
			}
		}
		if let Some(listener) = self.resize_cb.borrow_mut().take() {
			listener.detach();
		}
		self.animate.borrow_mut().take();
		debug!("galaxy-backdrop: #{} torn down", self.id);
	}
}

/// Animated galaxy background filling its positioned parent.
///
/// `id` becomes the canvas element id. With `with_constellations`, nearby
/// particles are linked by faint lines. Field parameters come from a
/// [`FieldConfig`] in context (defaults otherwise) and pointer glow from the
/// shared pointer signal.
#[component]
pub fn GalaxyCanvas(
	#[prop(into)] id: String,
	#[prop(default = false)] with_constellations: bool,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let config = use_context::<FieldConfig>().unwrap_or_default();
	let pointer = use_pointer();
	let mounted = StoredValue::new_local(None::<Rc<GalaxyRenderer>>);
	let canvas_id = id.clone();

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		if mounted.with_value(|r| r.is_some()) {
			return;
		}

		match GalaxyRenderer::mount(
			canvas_id.clone(),
			canvas,
			config.clone(),
			with_constellations,
			pointer,
		) {
			Some(renderer) => mounted.set_value(Some(renderer)),
			None => warn!(
				"galaxy-backdrop: #{} has no 2d context, background disabled",
				canvas_id
			),
		}
	});

	on_cleanup(move || {
		let _ = mounted.try_update_value(|renderer| {
			if let Some(r) = renderer.take() {
				r.teardown();
			}
		});
	});

	view! {
		<canvas
			node_ref=canvas_ref
			id=id
			class="galaxy-canvas"
			aria-hidden="true"
			style="position: absolute; top: 0; left: 0; width: 100%; height: 100%; z-index: 0;"
		/>
	}
}
