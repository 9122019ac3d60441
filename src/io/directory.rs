use crate::entry::FileEntry;
use crate::error::ListingError;
use crate::state::FilterMode;
use std::fs;
use std::path::Path;

/// Reads the immediate children of `path`, dropping hidden entries and
/// anything `filter` rejects, sorted by path.
pub fn read_directory(path: &Path, filter: &FilterMode) -> Result<Vec<FileEntry>, ListingError> {
    let metadata = fs::metadata(path).map_err(|e| ListingError::from_io(path, e))?;
    if !metadata.is_dir() {
        return Err(ListingError::NotADirectory(path.to_path_buf()));
    }

    let read_dir = fs::read_dir(path).map_err(|e| ListingError::from_io(path, e))?;

    let mut entries = Vec::new();
    for entry in read_dir.flatten() {
        let Some(file_entry) = FileEntry::from_path(entry.path()) else {
            continue;
        };
        if file_entry.is_hidden {
            continue;
        }
        if !filter.accepts(&file_entry.name, file_entry.is_dir) {
            continue;
        }
        entries.push(file_entry);
    }
    entries.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(entries)
}
