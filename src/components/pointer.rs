//! Process-wide pointer tracking.
//!
//! One [`PointerTracker`] listens on `window` and writes the latest client
//! coordinates into a signal. Every galaxy canvas and the spotlight read that
//! signal through Leptos context (see [`use_pointer`]).

use leptos::prelude::*;
use log::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::{Event, MouseEvent};

use super::listener::WindowListener;

/// Last observed pointer coordinates, or the off-canvas sentinel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerPosition {
	pub x: f64,
	pub y: f64,
}

/// A raw pointer observation from the window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerSample {
	Moved { x: f64, y: f64 },
	Left,
}

impl PointerPosition {
	/// Far enough outside any canvas that no glow radius reaches it.
	pub const OFF_CANVAS: Self = Self::new(-1000.0, -1000.0);

	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	pub fn is_tracked(self) -> bool {
		self != Self::OFF_CANVAS
	}

	/// Position after applying a window observation.
	pub fn observe(sample: PointerSample) -> Self {
		match sample {
			PointerSample::Moved { x, y } => Self::new(x, y),
			PointerSample::Left => Self::OFF_CANVAS,
		}
	}

	/// Convert client coordinates to coordinates relative to an element's
	/// top-left corner. The sentinel stays the sentinel.
	pub fn relative_to(self, left: f64, top: f64) -> Self {
		if self.is_tracked() {
			Self::new(self.x - left, self.y - top)
		} else {
			self
		}
	}
}

impl Default for PointerPosition {
	fn default() -> Self {
		Self::OFF_CANVAS
	}
}

/// Owns the global pointer listeners and the signal they write.
pub struct PointerTracker {
	position: RwSignal<PointerPosition>,
	listeners: Vec<WindowListener>,
}

impl PointerTracker {
	/// Start listening for `mousemove` and for the pointer leaving the viewport.
	pub fn install() -> Self {
		let position = RwSignal::new(PointerPosition::OFF_CANVAS);
		let mut listeners = Vec::new();

		let Some(window) = web_sys::window() else {
			warn!("galaxy-backdrop: no window, pointer stays off-canvas");
			return Self {
				position,
				listeners,
			};
		};

		listeners.extend(WindowListener::attach(&window, "mousemove", move |ev: Event| {
			if let Some(ev) = ev.dyn_ref::<MouseEvent>() {
				position.set(PointerPosition::observe(PointerSample::Moved {
					x: ev.client_x() as f64,
					y: ev.client_y() as f64,
				}));
			}
		}));

		// `mouseout` with no related target means the pointer left the document.
		listeners.extend(WindowListener::attach(&window, "mouseout", move |ev: Event| {
			if let Some(ev) = ev.dyn_ref::<MouseEvent>() {
				if ev.related_target().is_none() {
					position.set(PointerPosition::observe(PointerSample::Left));
				}
			}
		}));

		debug!("galaxy-backdrop: pointer tracker installed");
		Self {
			position,
			listeners,
		}
	}

	pub fn position(&self) -> ReadSignal<PointerPosition> {
		self.position.read_only()
	}

	pub fn detach(self) {
		for listener in self.listeners {
			listener.detach();
		}
		debug!("galaxy-backdrop: pointer tracker detached");
	}
}

/// The shared pointer signal, or a signal pinned to the sentinel when no
/// tracker was provided.
pub fn use_pointer() -> ReadSignal<PointerPosition> {
	use_context::<ReadSignal<PointerPosition>>().unwrap_or_else(|| {
		warn!("galaxy-backdrop: no pointer context, glow disabled");
		RwSignal::new(PointerPosition::OFF_CANVAS).read_only()
	})
}
