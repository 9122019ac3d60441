// Browser state - current directory, its listing and the ancestor stack
use crate::entry::FileEntry;
use crate::error::ListingError;
use crate::io;
use crate::state::FilterMode;
use std::path::{self, Path, PathBuf};

/// Directory-browsing state machine behind the chooser dialog.
///
/// Every navigation re-lists the filesystem. A navigation either lists its
/// destination successfully and advances, or fails and leaves the visible
/// state untouched. The one exception is [`FileBrowser::jump_to_ancestor`],
/// which truncates the ancestor stack before listing.
pub struct FileBrowser {
    current_dir: PathBuf,
    last_dir: Option<PathBuf>,
    entries: Vec<FileEntry>,
    ancestors: Vec<PathBuf>,
    filter: FilterMode,
}

impl FileBrowser {
    /// Lists `start_dir` and makes it current. Fails if it cannot be listed.
    pub fn new(start_dir: impl AsRef<Path>, filter: FilterMode) -> Result<Self, ListingError> {
        let start_dir = start_dir.as_ref();
        let current_dir =
            path::absolute(start_dir).map_err(|e| ListingError::from_io(start_dir, e))?;
        let entries = io::read_directory(&current_dir, &filter)?;
        log::debug!("browsing {} ({} entries)", current_dir.display(), entries.len());

        Ok(Self {
            current_dir,
            last_dir: None,
            entries,
            ancestors: Vec::new(),
            filter,
        })
    }

    pub fn current_dir(&self) -> &Path {
        &self.current_dir
    }

    /// Absolute path of the current directory as a display string.
    pub fn path(&self) -> String {
        self.current_dir.display().to_string()
    }

    /// Final component of the current directory. Empty at a Unix filesystem
    /// root, the drive prefix on Windows.
    pub fn current_name(&self) -> String {
        dir_name(&self.current_dir)
    }

    pub fn last_dir(&self) -> Option<&Path> {
        self.last_dir.as_deref()
    }

    pub fn entries(&self) -> &[FileEntry] {
        &self.entries
    }

    pub fn entry(&self, index: usize) -> Option<&FileEntry> {
        self.entries.get(index)
    }

    pub fn ancestors(&self) -> &[PathBuf] {
        &self.ancestors
    }

    pub fn ancestor_names(&self) -> Vec<String> {
        self.ancestors.iter().map(|p| dir_name(p)).collect()
    }

    pub fn filter(&self) -> &FilterMode {
        &self.filter
    }

    /// Enters the directory at `index` in the current listing.
    pub fn descend_into(&mut self, index: usize) -> bool {
        let target = match self.entries.get(index) {
            Some(entry) if entry.is_dir => entry.path.clone(),
            Some(entry) => {
                log::debug!("{} is not a directory", entry.path.display());
                return false;
            }
            None => return false,
        };
        self.hop(target)
    }

    /// Moves to the filesystem parent. The ancestor stack is left alone.
    pub fn ascend_to_parent(&mut self) -> bool {
        let Some(parent) = self.current_dir.parent().map(Path::to_path_buf) else {
            return false;
        };
        let result = self.go_dir(parent);
        report(result)
    }

    /// Jumps back to the ancestor at `index`, discarding it and every
    /// ancestor above it.
    ///
    /// The stack stays truncated even when the listing fails.
    pub fn jump_to_ancestor(&mut self, index: usize) -> bool {
        if index >= self.ancestors.len() {
            return false;
        }
        let target = self.ancestors.split_off(index).swap_remove(0);
        let result = self.go_dir(target);
        report(result)
    }

    /// Goes back to the directory that was current before the last listing.
    pub fn return_to_last(&mut self) -> bool {
        let Some(last) = self.last_dir.clone() else {
            return false;
        };
        let result = self.go_dir(last);
        report(result)
    }

    /// Walks from the filesystem root down to `target`, one directory at a
    /// time, pushing onto the ancestor stack as [`FileBrowser::descend_into`]
    /// would. Stops at the first directory that cannot be listed.
    ///
    /// Only valid while the current directory is a filesystem root; called
    /// anywhere else it fails without touching anything. Returns `true` only
    /// if `target` was reached.
    pub fn navigate_to(&mut self, target: impl AsRef<Path>) -> bool {
        let target = target.as_ref();
        if self.current_dir.parent().is_some() {
            log::warn!(
                "cannot navigate to {} from {}: not a filesystem root",
                target.display(),
                self.current_dir.display()
            );
            return false;
        }
        if !target.exists() {
            log::warn!("cannot navigate to {}: no such path", target.display());
            return false;
        }
        let target = match path::absolute(target) {
            Ok(target) => target,
            Err(e) => return report(Err(ListingError::from_io(target, e))),
        };

        let mut chain: Vec<PathBuf> = target.ancestors().map(Path::to_path_buf).collect();
        chain.reverse();
        for dir in chain {
            if dir == self.current_dir {
                continue;
            }
            if !self.hop(dir) {
                return false;
            }
        }
        true
    }

    /// Re-lists the current directory to pick up filesystem changes.
    pub fn refresh(&mut self) -> bool {
        let current = self.current_dir.clone();
        let result = self.go_dir(current);
        report(result)
    }

    /// Creates a subdirectory of the current directory. The listing is not
    /// refreshed.
    pub fn create_directory(&self, name: &str) -> bool {
        match io::create_directory(&self.current_dir, name) {
            Ok(created) => {
                log::info!("created directory {}", created.display());
                true
            }
            Err(e) => {
                log::warn!("cannot create {:?} in {}: {}", name, self.current_dir.display(), e);
                false
            }
        }
    }

    /// Descend-equivalent hop: lists `target` and pushes the prior directory.
    fn hop(&mut self, target: PathBuf) -> bool {
        let previous = self.current_dir.clone();
        match self.go_dir(target) {
            Ok(()) => {
                self.ancestors.push(previous);
                true
            }
            Err(e) => report(Err(e)),
        }
    }

    fn go_dir(&mut self, dir: PathBuf) -> Result<(), ListingError> {
        let entries = io::read_directory(&dir, &self.filter)?;
        log::debug!("browsing {} ({} entries)", dir.display(), entries.len());
        self.last_dir = Some(std::mem::replace(&mut self.current_dir, dir));
        self.entries = entries;
        Ok(())
    }
}

fn report(result: Result<(), ListingError>) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            log::warn!("{}", e);
            false
        }
    }
}

fn dir_name(dir: &Path) -> String {
    match dir.file_name() {
        Some(name) => name.to_string_lossy().to_string(),
        None => dir
            .display()
            .to_string()
            .trim_end_matches(path::is_separator)
            .to_string(),
    }
}
