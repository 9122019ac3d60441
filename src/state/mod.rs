pub mod browser;
pub mod filter;
pub mod selection;

pub use browser::FileBrowser;
pub use filter::FilterMode;
pub use selection::SelectionState;
