mod directory;
mod ops;

pub use directory::read_directory;
pub use ops::create_directory;
