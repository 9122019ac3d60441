//! Directory chooser: a small file-picker dialog built on a synchronous
//! directory-browsing state machine.
//!
//! [`state::FileBrowser`] is the core. [`chooser::DirChooser`] adds the
//! single-entry selection that the dialog in [`app`] renders from.

pub mod app;
pub mod chooser;
pub mod config;
pub mod entry;
pub mod error;
mod input;
pub mod io;
pub mod state;
pub mod style;
mod view;

pub use chooser::DirChooser;
pub use error::ListingError;
pub use state::{FileBrowser, FilterMode};
