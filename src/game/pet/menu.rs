// Right-click context menu model

use super::settings::Settings;

/// Commands offered by the context menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuCommand {
    ToggleAlwaysOnTop,
    ToggleSound,
    Exit,
}

/// A labelled menu entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub command: MenuCommand,
    pub label: String,
}

/// Geometry of the menu window in logical pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MenuLayout {
    pub width: f32,
    pub row_height: f32,
}

impl Default for MenuLayout {
    fn default() -> Self {
        Self {
            width: 180.0,
            row_height: 28.0,
        }
    }
}

pub fn sound_label(enabled: bool) -> &'static str {
    if enabled {
        "Sound: On"
    } else {
        "Sound: Off"
    }
}

/// The context menu's items and layout
#[derive(Debug, Clone)]
pub struct ContextMenu {
    items: Vec<MenuItem>,
    layout: MenuLayout,
}

impl ContextMenu {
    /// Build the menu with labels reflecting the current settings
    pub fn new(settings: &Settings) -> Self {
        let items = vec![
            MenuItem {
                command: MenuCommand::ToggleAlwaysOnTop,
                label: "Toggle Always on Top".to_string(),
            },
            MenuItem {
                command: MenuCommand::ToggleSound,
                label: sound_label(settings.sound_enabled).to_string(),
            },
            MenuItem {
                command: MenuCommand::Exit,
                label: "Exit".to_string(),
            },
        ];

        Self {
            items,
            layout: MenuLayout::default(),
        }
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn layout(&self) -> MenuLayout {
        self.layout
    }

    /// Logical window size needed to show every item
    pub fn size(&self) -> (f32, f32) {
        (
            self.layout.width,
            self.layout.row_height * self.items.len() as f32,
        )
    }

    /// Label currently shown for a command
    #[cfg(test)]
    pub fn label(&self, command: MenuCommand) -> Option<&str> {
        self.items
            .iter()
            .find(|item| item.command == command)
            .map(|item| item.label.as_str())
    }

    /// Replace a command's label. Returns true if the text changed.
    pub fn set_label(&mut self, command: MenuCommand, label: &str) -> bool {
        let Some(item) = self.items.iter_mut().find(|item| item.command == command) else {
            return false;
        };
        if item.label == label {
            return false;
        }
        item.label = label.to_string();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn menu() -> ContextMenu {
        ContextMenu::new(&Settings::default())
    }

    #[test]
    fn test_default_items() {
        let menu = menu();
        let commands: Vec<MenuCommand> = menu.items().iter().map(|i| i.command).collect();
        assert_eq!(
            commands,
            vec![
                MenuCommand::ToggleAlwaysOnTop,
                MenuCommand::ToggleSound,
                MenuCommand::Exit
            ]
        );
        assert_eq!(menu.label(MenuCommand::ToggleSound), Some("Sound: On"));
    }

    #[test]
    fn test_sound_label_reflects_settings() {
        let settings = Settings {
            sound_enabled: false,
            ..Settings::default()
        };
        let menu = ContextMenu::new(&settings);
        assert_eq!(menu.label(MenuCommand::ToggleSound), Some("Sound: Off"));
    }

    #[test]
    fn test_set_label_reports_changes() {
        let mut menu = menu();
        assert!(menu.set_label(MenuCommand::ToggleSound, "Sound: Off"));
        assert!(!menu.set_label(MenuCommand::ToggleSound, "Sound: Off"));
        assert_eq!(menu.label(MenuCommand::ToggleSound), Some("Sound: Off"));
    }

    #[test]
    fn test_size_matches_rows() {
        let menu = menu();
        let (width, height) = menu.size();
        assert_eq!(width, menu.layout().width);
        assert_eq!(height, menu.layout().row_height * 3.0);
    }
}
