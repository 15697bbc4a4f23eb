//! Animated "galaxy" canvas backgrounds.
//!
//! Each canvas runs its own field of drifting shapes with:
//! - Optional constellation links between particles that start close together
//! - A small, recycled pool of shooting stars
//! - Glow around the shared pointer position
//! - A fade-in after every (re)initialization
//!
//! # Example
//!
//! ```ignore
//! use galaxy_backdrop::GalaxyCanvas;
//!
//! view! {
//!     <section id="home" style="position: relative;">
//!         <GalaxyCanvas id="homeCanvas" with_constellations=true />
//!     </section>
//! }
//! ```

mod component;
pub mod config;
pub mod particles;
mod render;
pub mod shooting_star;
pub mod state;
pub mod theme;

pub use component::GalaxyCanvas;
pub use config::FieldConfig;
pub use state::FieldState;
pub use theme::{GalaxyTheme, SpotlightTheme};
