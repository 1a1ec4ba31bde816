// User-toggled settings

/// Flags flipped from the context menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub always_on_top: bool,
    pub sound_enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            always_on_top: true,
            sound_enabled: true,
        }
    }
}

impl Settings {
    /// Flip the always-on-top flag and return the new value
    pub fn toggle_always_on_top(&mut self) -> bool {
        self.always_on_top = !self.always_on_top;
        self.always_on_top
    }

    /// Flip the sound flag and return the new value
    pub fn toggle_sound(&mut self) -> bool {
        self.sound_enabled = !self.sound_enabled;
        self.sound_enabled
    }
}
