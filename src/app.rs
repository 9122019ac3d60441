use crate::chooser::DirChooser;
use crate::config::Config;
use crate::style::{self, Theme};
use eframe::egui;
use std::cell::{Cell, RefCell};
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Instant;

/// A user gesture, collected while rendering and applied afterwards.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Open(usize),
    Check(usize),
    Uncheck,
    Up,
    Back,
    Ancestor(usize),
    Refresh,
    GoTo(PathBuf),
    ShowNewFolder,
    CreateFolder(String),
    ToggleHelp,
    ToggleTheme,
    Choose,
    Cancel,
}

pub struct UiState {
    pub theme: Theme,
    pub error_message: Option<(String, Instant)>,
    pub info_message: Option<(String, Instant)>,
    pub path_input: String,
    /// Name being typed in the "new folder" modal, `Some` while it is open.
    pub new_folder_name: Option<String>,
    pub show_help: bool,
}

impl UiState {
    pub fn set_error(&mut self, message: String) {
        self.error_message = Some((message, Instant::now()));
    }

    pub fn set_info(&mut self, message: String) {
        self.info_message = Some((message, Instant::now()));
    }

    pub fn clear_expired_messages(&mut self, timeout_secs: u64) {
        if let Some((_, time)) = &self.error_message {
            if time.elapsed().as_secs() >= timeout_secs {
                self.error_message = None;
            }
        }
        if let Some((_, time)) = &self.info_message {
            if time.elapsed().as_secs() >= timeout_secs {
                self.info_message = None;
            }
        }
    }
}

pub struct DirChooserApp {
    pub chooser: DirChooser,
    pub ui: UiState,
    config: Config,
    outcome: Rc<Cell<Option<PathBuf>>>,
    applied_theme: Option<Theme>,
}

impl DirChooserApp {
    pub fn new(chooser: DirChooser, config: Config, outcome: Rc<Cell<Option<PathBuf>>>) -> Self {
        let path_input = chooser.browser().path();
        Self {
            ui: UiState {
                theme: Theme::from_config(&config.theme.mode),
                error_message: None,
                info_message: None,
                path_input,
                new_folder_name: None,
                show_help: false,
            },
            chooser,
            config,
            outcome,
            applied_theme: None,
        }
    }

    pub fn apply(&mut self, action: Action, ctx: &egui::Context) {
        log::trace!("action {:?}", action);
        match action {
            Action::Open(index) => {
                let is_dir = self
                    .chooser
                    .browser()
                    .entry(index)
                    .map(|e| e.is_dir)
                    .unwrap_or(false);
                if is_dir && !self.chooser.open_entry(index) {
                    self.ui.set_error("Cannot open directory".into());
                }
            }
            Action::Check(index) => {
                if !self.chooser.check(index) {
                    self.ui.set_error("Only writable entries can be chosen".into());
                }
            }
            Action::Uncheck => self.chooser.uncheck(),
            Action::Up => {
                if !self.chooser.go_up() {
                    self.ui.set_error("Cannot open parent directory".into());
                }
            }
            Action::Back => {
                if !self.chooser.go_back() {
                    self.ui.set_error("No previous directory".into());
                }
            }
            Action::Ancestor(index) => {
                if !self.chooser.go_to_ancestor(index) {
                    self.ui.set_error("Cannot open directory".into());
                }
            }
            Action::Refresh => {
                if !self.chooser.refresh() {
                    self.ui.set_error("Cannot read current directory".into());
                }
            }
            Action::GoTo(path) => {
                if !self.chooser.navigate_to(&path) {
                    self.ui.set_error(format!("Cannot reach {}", path.display()));
                }
            }
            Action::ShowNewFolder => self.ui.new_folder_name = Some(String::new()),
            Action::CreateFolder(name) => {
                self.ui.new_folder_name = None;
                if self.chooser.create_directory(&name) {
                    self.chooser.refresh();
                    self.ui.set_info(format!("Created {}", name));
                } else {
                    self.ui.set_error(format!("Could not create {}", name));
                }
            }
            Action::ToggleHelp => self.ui.show_help = !self.ui.show_help,
            Action::ToggleTheme => {
                self.ui.theme = self.ui.theme.toggle();
                self.config.theme.mode = self.ui.theme.as_config().to_string();
                if let Err(e) = self.config.save() {
                    log::warn!("Failed to save config: {}", e);
                }
            }
            Action::Choose => match self.chooser.selected_directory() {
                Some(path) => {
                    self.outcome.set(Some(path.to_path_buf()));
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
                None => self.ui.set_error("Nothing selected".into()),
            },
            Action::Cancel => {
                self.outcome.set(None);
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
        }
        self.ui.path_input = self.chooser.browser().path();
    }
}

impl eframe::App for DirChooserApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.applied_theme != Some(self.ui.theme) {
            ctx.set_visuals(self.ui.theme.visuals());
            self.applied_theme = Some(self.ui.theme);
        }
        self.ui.clear_expired_messages(style::MESSAGE_TIMEOUT_SECS);

        let pending = RefCell::new(self.handle_input(ctx));

        self.render_top_bar(ctx, &pending);
        self.render_bottom_bar(ctx, &pending);
        self.render_breadcrumb_pane(ctx, &pending);
        self.render_entries_pane(ctx, &pending);
        self.render_new_folder_modal(ctx, &pending);
        self.render_help_modal(ctx, &pending);

        if let Some(action) = pending.into_inner() {
            self.apply(action, ctx);
        }

        if self.ui.error_message.is_some() || self.ui.info_message.is_some() {
            ctx.request_repaint_after(std::time::Duration::from_secs(1));
        }
    }
}
