//! UI components: galaxy backgrounds, pointer tracking and the spotlight overlay.

pub mod galaxy;
mod listener;
pub mod pointer;
pub mod spotlight;
