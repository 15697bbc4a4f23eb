//! Window-level event listeners that can be removed again.

use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::{Event, Window};

/// A callback registered on `window` for one event type.
///
/// The closure stays alive as long as this value does; call
/// [`detach`](Self::detach) to unregister it before dropping.
pub struct WindowListener {
	event: &'static str,
	callback: Closure<dyn FnMut(Event)>,
}

impl WindowListener {
	pub fn attach(
		window: &Window,
		event: &'static str,
		handler: impl FnMut(Event) + 'static,
	) -> Option<Self> {
		let callback = Closure::<dyn FnMut(Event)>::new(handler);
		match window.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref()) {
			Ok(()) => Some(Self { event, callback }),
			Err(err) => {
				warn!("galaxy-backdrop: could not listen for '{}': {:?}", event, err);
				None
			}
		}
	}

	pub fn detach(self) {
		if let Some(window) = web_sys::window() {
			let _ = window
				.remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
		}
	}
}
