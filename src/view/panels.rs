// Panel rendering for the chooser dialog
// Breadcrumb on the left, the current listing in the middle

use crate::app::{Action, DirChooserApp};
use crate::style;
use chrono::{DateTime, Local};
use eframe::egui;
use std::cell::RefCell;
use std::path::PathBuf;

impl DirChooserApp {
    pub(crate) fn render_top_bar(&mut self, ctx: &egui::Context, pending: &RefCell<Option<Action>>) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                if ui.button("\u{2b06} Up").clicked() {
                    *pending.borrow_mut() = Some(Action::Up);
                }
                if ui
                    .add_enabled(
                        self.chooser.browser().last_dir().is_some(),
                        egui::Button::new("\u{21a9}"),
                    )
                    .on_hover_text("Previous directory")
                    .clicked()
                {
                    *pending.borrow_mut() = Some(Action::Back);
                }
                if ui.button("\u{27f3}").on_hover_text("Refresh").clicked() {
                    *pending.borrow_mut() = Some(Action::Refresh);
                }
                if ui.button("+ Folder").clicked() {
                    *pending.borrow_mut() = Some(Action::ShowNewFolder);
                }

                let response = ui.add_sized(
                    [(ui.available_width() - 40.0).max(80.0), ui.spacing().interact_size.y],
                    egui::TextEdit::singleline(&mut self.ui.path_input),
                );
                if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    *pending.borrow_mut() = Some(Action::GoTo(PathBuf::from(&self.ui.path_input)));
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("\u{25d0}").on_hover_text("Toggle theme").clicked() {
                        *pending.borrow_mut() = Some(Action::ToggleTheme);
                    }
                });
            });
            ui.add_space(4.0);
            ui.heading(self.chooser.current_dir_label());
            ui.add_space(2.0);
        });
    }

    pub(crate) fn render_bottom_bar(&self, ctx: &egui::Context, pending: &RefCell<Option<Action>>) {
        egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.label(format!("{} items", self.chooser.browser().entries().len()));
                if let Some((err, _)) = &self.ui.error_message {
                    ui.colored_label(egui::Color32::RED, format!(" | {}", err));
                } else if let Some((info, _)) = &self.ui.info_message {
                    ui.colored_label(egui::Color32::LIGHT_GREEN, format!(" | {}", info));
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let selected = self.chooser.selected_directory();
                    if ui
                        .add_enabled(selected.is_some(), egui::Button::new("Choose"))
                        .clicked()
                    {
                        *pending.borrow_mut() = Some(Action::Choose);
                    }
                    if ui.button("Cancel").clicked() {
                        *pending.borrow_mut() = Some(Action::Cancel);
                    }
                    if let Some(path) = selected {
                        style::truncated_label_with_sense(
                            ui,
                            path.display().to_string(),
                            egui::Sense::hover(),
                        );
                    }
                });
            });
            ui.add_space(4.0);
        });
    }

    pub(crate) fn render_breadcrumb_pane(
        &self,
        ctx: &egui::Context,
        pending: &RefCell<Option<Action>>,
    ) {
        egui::SidePanel::left("breadcrumb_panel")
            .resizable(true)
            .min_width(style::BREADCRUMB_MIN)
            .default_width(style::BREADCRUMB_DEFAULT)
            .show(ctx, |ui| {
                ui.add_space(4.0);
                ui.vertical_centered(|ui| {
                    ui.heading("Path");
                });
                ui.separator();
                let crumbs = self.chooser.breadcrumb();
                let accent = egui::Color32::from_rgb(120, 180, 255);

                egui::ScrollArea::vertical()
                    .id_salt("breadcrumb_scroll")
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        for (index, crumb) in crumbs.iter().enumerate() {
                            let response = style::truncated_label_with_sense(
                                ui,
                                egui::RichText::new(crumb).color(accent),
                                egui::Sense::click(),
                            );
                            if response.clicked() {
                                *pending.borrow_mut() = Some(Action::Ancestor(index));
                            }
                        }
                        ui.label(egui::RichText::new(self.chooser.current_dir_label()).strong());
                    });
            });
    }

    pub(crate) fn render_entries_pane(
        &self,
        ctx: &egui::Context,
        pending: &RefCell<Option<Action>>,
    ) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let entries = self.chooser.browser().entries();
            if entries.is_empty() {
                ui.centered_and_justified(|ui| {
                    ui.label("Empty directory");
                });
                return;
            }

            let cursor = self.chooser.selection().cursor;
            let checked = self.chooser.selection().checked();

            use egui_extras::{Column, TableBuilder};
            let mut table = TableBuilder::new(ui)
                .striped(true)
                .resizable(false)
                .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                .column(Column::exact(style::CHECK_COL_WIDTH))
                .column(Column::exact(style::ICON_COL_WIDTH))
                .column(Column::remainder().clip(true))
                .column(Column::auto().at_least(70.0))
                .column(Column::auto().at_least(110.0));

            if let Some(idx) = cursor {
                table = table.scroll_to_row(idx, None);
            }

            table
                .header(style::HEADER_HEIGHT, |mut header| {
                    header.col(|ui| {
                        ui.label("");
                    });
                    header.col(|ui| {
                        ui.label("");
                    });
                    header.col(|ui| {
                        ui.strong("Name");
                    });
                    header.col(|ui| {
                        ui.strong("Size");
                    });
                    header.col(|ui| {
                        ui.strong("Modified");
                    });
                })
                .body(|body| {
                    body.rows(style::ROW_HEIGHT, entries.len(), |mut row| {
                        let index = row.index();
                        let entry = &entries[index];
                        row.set_selected(cursor == Some(index));

                        row.col(|ui| {
                            let mut is_checked = checked == Some(index);
                            let response = ui.add_enabled(
                                entry.is_writable,
                                egui::Checkbox::without_text(&mut is_checked),
                            );
                            if response.changed() {
                                *pending.borrow_mut() = Some(if is_checked {
                                    Action::Check(index)
                                } else {
                                    Action::Uncheck
                                });
                            }
                        });
                        row.col(|ui| {
                            ui.label(entry.get_icon());
                        });
                        row.col(|ui| {
                            let response = style::truncated_label_with_sense(
                                ui,
                                entry.display_name(),
                                egui::Sense::click(),
                            );
                            if response.clicked() {
                                *pending.borrow_mut() = Some(Action::Open(index));
                            }
                        });
                        row.col(|ui| {
                            if entry.is_dir {
                                ui.label("-");
                            } else {
                                ui.label(bytesize::ByteSize(entry.size).to_string());
                            }
                        });
                        row.col(|ui| {
                            let datetime: DateTime<Local> = entry.modified.into();
                            ui.label(datetime.format("%Y-%m-%d %H:%M").to_string());
                        });
                    });
                });
        });
    }
}
