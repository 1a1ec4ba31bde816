// Desktop pet
//
// This module contains everything about the pet itself:
// - Walk/pause state machine and the controller that drives it
// - Walk cycle animation and directional sprite sets
// - Drag sessions, settings and the context menu model
// - Behaviour configuration

pub mod animation;
pub mod config;
pub mod controller;
pub mod drag;
pub mod menu;
pub mod settings;
pub mod sprites;
pub mod state;

// Re-export commonly used types
pub use animation::FrameRef;
pub use config::PetConfig;
pub use controller::{MenuOutcome, PetController};
pub use menu::{ContextMenu, MenuCommand};
pub use sprites::SpriteSet;
