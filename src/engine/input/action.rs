// Pet action definitions and mappings

use std::collections::HashMap;
use winit::event::{ElementState, MouseButton};
use winit::keyboard::KeyCode;

/// Represents everything the user can do to the pet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Start dragging (and play the click sound)
    Grab,
    /// Stop dragging
    Release,
    /// Show the context menu
    OpenMenu,
    /// Hide the context menu without choosing anything
    DismissMenu,
}

/// Represents an input source (keyboard key or mouse button)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputSource {
    Keyboard(KeyCode),
    Mouse(MouseButton),
}

impl InputSource {
    /// Create a keyboard input source
    pub fn key(code: KeyCode) -> Self {
        Self::Keyboard(code)
    }

    /// Create a mouse button input source
    pub fn mouse(button: MouseButton) -> Self {
        Self::Mouse(button)
    }
}

/// Default mouse/keyboard bindings, keyed by the press that triggers them
pub fn default_bindings() -> Vec<(InputSource, Action)> {
    vec![
        (InputSource::mouse(MouseButton::Left), Action::Grab),
        (InputSource::mouse(MouseButton::Right), Action::OpenMenu),
        (InputSource::key(KeyCode::Escape), Action::DismissMenu),
    ]
}

/// Lookup table from input sources to actions
#[derive(Debug, Clone)]
pub struct InputBindings {
    bindings: HashMap<InputSource, Action>,
}

impl InputBindings {
    /// Create bindings from a list of pairs; later pairs win
    pub fn from_bindings(bindings: Vec<(InputSource, Action)>) -> Self {
        Self {
            bindings: bindings.into_iter().collect(),
        }
    }

    /// Action for a press or release of `source`.
    ///
    /// Releasing the grab source yields `Release`; other releases do nothing.
    pub fn resolve(&self, source: InputSource, state: ElementState) -> Option<Action> {
        let action = *self.bindings.get(&source)?;
        match (state, action) {
            (ElementState::Pressed, action) => Some(action),
            (ElementState::Released, Action::Grab) => Some(Action::Release),
            (ElementState::Released, _) => None,
        }
    }
}

impl Default for InputBindings {
    fn default() -> Self {
        Self::from_bindings(default_bindings())
    }
}
