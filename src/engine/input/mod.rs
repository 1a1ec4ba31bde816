// Input handling
//
// - `action`: what the user can do to the pet and the default bindings
// - `pointer`: per-window pointer tracking, used to turn window-local cursor
//   positions into screen coordinates while dragging

pub mod action;
pub mod pointer;

// Re-export commonly used types
pub use action::{Action, InputBindings, InputSource};
pub use pointer::{popup_origin, PointerTracker};
