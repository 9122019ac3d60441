use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

#[cfg(windows)]
use std::os::windows::fs::MetadataExt;

#[cfg(windows)]
const FILE_ATTRIBUTE_HIDDEN: u32 = 0x2;

/// A single child of the directory being browsed.
#[derive(Clone, Debug, PartialEq)]
pub struct FileEntry {
    pub path: PathBuf,
    pub name: String,
    pub is_dir: bool,
    pub is_symlink: bool,
    pub is_hidden: bool,
    pub is_writable: bool,
    pub size: u64,
    pub modified: SystemTime,
}

impl FileEntry {
    /// Builds an entry from a path. Returns `None` when the path has no
    /// file name or cannot be stat'ed at all.
    ///
    /// A dangling symlink still produces an entry; it reports as a
    /// non-directory and is not writable.
    pub fn from_path(path: PathBuf) -> Option<Self> {
        let symlink_meta = fs::symlink_metadata(&path).ok()?;
        let is_symlink = symlink_meta.is_symlink();

        let name = path.file_name()?.to_string_lossy().to_string();

        let metadata = fs::metadata(&path).ok();
        let is_dir = metadata.as_ref().map(|m| m.is_dir()).unwrap_or(false);
        let is_writable = metadata
            .as_ref()
            .map(|m| writable_by_us(&path, m))
            .unwrap_or(false);
        let size = metadata.as_ref().map(|m| m.len()).unwrap_or(0);
        let modified = metadata
            .as_ref()
            .and_then(|m| m.modified().ok())
            .or_else(|| symlink_meta.modified().ok())
            .unwrap_or(SystemTime::UNIX_EPOCH);

        #[cfg(windows)]
        let is_hidden =
            name.starts_with('.') || symlink_meta.file_attributes() & FILE_ATTRIBUTE_HIDDEN != 0;
        #[cfg(not(windows))]
        let is_hidden = name.starts_with('.');

        Some(Self {
            path,
            name,
            is_dir,
            is_symlink,
            is_hidden,
            is_writable,
            size,
            modified,
        })
    }

    pub fn get_icon(&self) -> &str {
        if self.is_dir {
            return "\u{1f4c1}";
        }
        "\u{1f4c4}"
    }

    pub fn display_name(&self) -> String {
        match (self.is_dir, self.is_symlink) {
            (true, true) => format!("{}/ \u{2192}", self.name),
            (true, false) => format!("{}/", self.name),
            (false, true) => format!("{} \u{2192}", self.name),
            (false, false) => self.name.clone(),
        }
    }
}

/// Whether the current user may write to `path`, as access(2) answers it.
#[cfg(unix)]
fn writable_by_us(path: &Path, _metadata: &fs::Metadata) -> bool {
    use nix::unistd::{access, AccessFlags};
    access(path, AccessFlags::W_OK).is_ok()
}

#[cfg(not(unix))]
fn writable_by_us(_path: &Path, metadata: &fs::Metadata) -> bool {
    !metadata.permissions().readonly()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_from_path_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("photos");
        fs::create_dir(&dir).unwrap();

        let entry = FileEntry::from_path(dir.clone()).unwrap();
        assert_eq!(entry.name, "photos");
        assert_eq!(entry.path, dir);
        assert!(entry.is_dir);
        assert!(!entry.is_hidden);
        assert!(entry.is_writable);
        assert_eq!(entry.display_name(), "photos/");
    }

    #[test]
    fn test_from_path_hidden_file() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join(".profile");
        fs::write(&file, "x").unwrap();

        let entry = FileEntry::from_path(file).unwrap();
        assert!(entry.is_hidden);
        assert!(!entry.is_dir);
        assert_eq!(entry.size, 1);
    }

    #[test]
    fn test_from_path_missing() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(FileEntry::from_path(tmp.path().join("nope")).is_none());
    }

    #[cfg(unix)]
    #[test]
    fn test_writable_matches_what_we_can_actually_write() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("locked");
        fs::create_dir(&dir).unwrap();
        fs::set_permissions(&dir, fs::Permissions::from_mode(0o555)).unwrap();

        // Mode bits alone are not the answer: root can still write here.
        let entry = FileEntry::from_path(dir.clone()).unwrap();
        let can_write = fs::create_dir(dir.join("scratch")).is_ok();
        assert_eq!(entry.is_writable, can_write);

        fs::set_permissions(&dir, fs::Permissions::from_mode(0o755)).unwrap();
    }
}
