//! The components module contains the deck UI and its playback controller.

mod playback;
mod player;

pub use playback::*;
pub use player::*;
