// Modal windows: new folder prompt and key bindings help

use crate::app::{Action, DirChooserApp};
use crate::style;
use eframe::egui;
use std::cell::RefCell;

impl DirChooserApp {
    pub(crate) fn render_new_folder_modal(
        &mut self,
        ctx: &egui::Context,
        pending: &RefCell<Option<Action>>,
    ) {
        let Some(name) = self.ui.new_folder_name.as_mut() else {
            return;
        };
        let mut cancelled = false;

        egui::Window::new("New Folder")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .default_width(style::modal_width(ctx))
            .show(ctx, |ui| {
                ui.label(format!("Create in {}", self.chooser.current_dir_label()));
                let response = ui.text_edit_singleline(name);
                response.request_focus();
                ui.horizontal(|ui| {
                    let trimmed = name.trim();
                    if ui
                        .add_enabled(!trimmed.is_empty(), egui::Button::new("Create"))
                        .clicked()
                    {
                        *pending.borrow_mut() = Some(Action::CreateFolder(trimmed.to_string()));
                    }
                    if ui.button("Cancel").clicked() {
                        cancelled = true;
                    }
                });
            });

        if cancelled {
            self.ui.new_folder_name = None;
        }
    }

    pub(crate) fn render_help_modal(&self, ctx: &egui::Context, pending: &RefCell<Option<Action>>) {
        if !self.ui.show_help {
            return;
        }
        egui::Window::new("Help")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .default_width(style::modal_width(ctx))
            .show(ctx, |ui| {
                ui.set_max_height(style::modal_max_height(ctx));
                ui.heading("Key Bindings");
                ui.separator();
                egui::Grid::new("help_grid").striped(true).show(ui, |ui| {
                    for (keys, what) in [
                        ("Up / Down", "Move cursor"),
                        ("Enter / Right", "Open directory"),
                        ("Backspace / Left", "Parent directory"),
                        ("Alt + Left", "Previous directory"),
                        ("Space", "Check / uncheck"),
                        ("F5", "Refresh"),
                        ("Ctrl+N", "New folder"),
                        ("F1", "Toggle help"),
                        ("Esc", "Cancel"),
                    ] {
                        ui.label(keys);
                        ui.label(what);
                        ui.end_row();
                    }
                });
                ui.separator();
                if ui.button("Close").clicked() {
                    *pending.borrow_mut() = Some(Action::ToggleHelp);
                }
            });
    }
}
