use clap::Parser;
use dirchooser::app::DirChooserApp;
use dirchooser::config::Config;
use dirchooser::{DirChooser, FilterMode};
use eframe::egui;
use std::cell::Cell;
use std::path::PathBuf;
use std::process::ExitCode;
use std::rc::Rc;

/// Pick a directory and print its absolute path.
#[derive(Parser, Debug, Default, PartialEq)]
#[command(name = "dirchooser", version)]
#[command(about = "Choose a directory and print its path", long_about = None)]
#[command(after_help = "Exits 0 after printing the chosen directory, 1 when cancelled.")]
struct Args {
    /// Directory to start browsing in (default: config, then home)
    start_dir: Option<PathBuf>,

    /// Walk from the filesystem root down to this directory before showing the dialog
    #[arg(long)]
    goto: Option<PathBuf>,

    /// Also list files whose name contains PATTERN (repeatable)
    #[arg(long = "files", value_name = "PATTERN")]
    patterns: Vec<String>,
}

impl Args {
    fn filter(&self, config: &Config) -> FilterMode {
        if self.patterns.is_empty() {
            FilterMode::new(config.browser.dirs_only, config.browser.patterns.clone())
        } else {
            FilterMode::Patterns(self.patterns.clone())
        }
    }
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let config = Config::load();

    let start_dir = args
        .start_dir
        .clone()
        .unwrap_or_else(|| config.resolve_start_dir());
    let mut chooser = DirChooser::new(&start_dir, args.filter(&config))?;
    if let Some(target) = &args.goto {
        if !chooser.navigate_to(target) {
            log::warn!("stopped short of {}", target.display());
        }
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_title("Choose Directory"),
        ..Default::default()
    };

    let outcome = Rc::new(Cell::new(None));
    let app_outcome = outcome.clone();
    let font_size = config.font.font_size;
    eframe::run_native(
        "dirchooser",
        options,
        Box::new(move |cc| {
            cc.egui_ctx.style_mut(|style| {
                for font in style.text_styles.values_mut() {
                    font.size = font_size;
                }
            });
            Ok(Box::new(DirChooserApp::new(chooser, config, app_outcome)))
        }),
    )?;

    match outcome.take() {
        Some(path) => {
            println!("{}", path.display());
            Ok(ExitCode::SUCCESS)
        }
        None => Ok(ExitCode::FAILURE),
    }
}
