// Keyboard input for the chooser dialog

use crate::app::{Action, DirChooserApp};
use eframe::egui;

impl DirChooserApp {
    /// Moves the cursor directly and returns any navigation the keys asked for.
    pub fn handle_input(&mut self, ctx: &egui::Context) -> Option<Action> {
        // Modals own the keyboard while open
        if let Some(name) = &self.ui.new_folder_name {
            if ctx.input(|i| i.key_pressed(egui::Key::Enter)) && !name.trim().is_empty() {
                return Some(Action::CreateFolder(name.trim().to_string()));
            }
            if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
                self.ui.new_folder_name = None;
            }
            return None;
        }

        if self.ui.show_help {
            if ctx.input(|i| i.key_pressed(egui::Key::Escape) || i.key_pressed(egui::Key::F1)) {
                return Some(Action::ToggleHelp);
            }
            return None;
        }

        // The path field is being edited
        if ctx.wants_keyboard_input() {
            return None;
        }

        if ctx.input(|i| i.key_pressed(egui::Key::ArrowDown)) {
            self.chooser.move_cursor(1);
        }
        if ctx.input(|i| i.key_pressed(egui::Key::ArrowUp)) {
            self.chooser.move_cursor(-1);
        }

        let cursor = self.chooser.selection().cursor;
        ctx.input(|i| {
            let alt = i.modifiers.alt;
            if i.key_pressed(egui::Key::ArrowLeft) && alt {
                Some(Action::Back)
            } else if i.key_pressed(egui::Key::ArrowLeft) || i.key_pressed(egui::Key::Backspace) {
                Some(Action::Up)
            } else if i.key_pressed(egui::Key::ArrowRight) || i.key_pressed(egui::Key::Enter) {
                cursor.map(Action::Open)
            } else if i.key_pressed(egui::Key::Space) {
                match cursor {
                    Some(idx) if self.chooser.selection().checked() == Some(idx) => {
                        Some(Action::Uncheck)
                    }
                    other => other.map(Action::Check),
                }
            } else if i.key_pressed(egui::Key::F5) {
                Some(Action::Refresh)
            } else if i.key_pressed(egui::Key::N) && i.modifiers.command {
                Some(Action::ShowNewFolder)
            } else if i.key_pressed(egui::Key::F1) {
                Some(Action::ToggleHelp)
            } else if i.key_pressed(egui::Key::Escape) {
                Some(Action::Cancel)
            } else {
                None
            }
        })
    }
}
