//! Playback - one controller keeping the deck controls in step with one media element.

mod controller;
mod events;
mod handle_detached;
#[cfg(target_arch = "wasm32")]
mod handle_web;
mod shortcuts;

pub use controller::*;
pub use events::*;
pub use handle_detached::*;
#[cfg(target_arch = "wasm32")]
pub use handle_web::*;
pub use shortcuts::*;
