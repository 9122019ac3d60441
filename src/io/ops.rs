use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Creates `parent/name` as a new directory and returns its path.
///
/// `name` must be a single path component.
pub fn create_directory(parent: &Path, name: &str) -> io::Result<PathBuf> {
    if !is_valid_name(name) {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("invalid directory name: {:?}", name),
        ));
    }
    let new_dir = parent.join(name);
    fs::create_dir(&new_dir)?;
    Ok(new_dir)
}

fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.chars().any(std::path::is_separator)
}
