// Selection state - keyboard cursor and the single checked entry
use crate::entry::FileEntry;

#[derive(Debug, Default)]
pub struct SelectionState {
    /// Highlighted row, moved by the arrow keys.
    pub cursor: Option<usize>,
    checked: Option<usize>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn checked(&self) -> Option<usize> {
        self.checked
    }

    /// Checks the entry at `index` if it exists and is writable.
    /// A rejected check leaves the previous one in place.
    pub fn check(&mut self, index: usize, entries: &[FileEntry]) -> bool {
        match entries.get(index) {
            Some(entry) if entry.is_writable => {
                self.checked = Some(index);
                true
            }
            _ => false,
        }
    }

    pub fn uncheck(&mut self) {
        self.checked = None;
    }

    /// Forgets everything tied to the previous listing.
    pub fn reset(&mut self, entry_count: usize) {
        self.checked = None;
        self.cursor = if entry_count > 0 { Some(0) } else { None };
    }

    pub fn move_cursor(&mut self, delta: isize, entry_count: usize) {
        if entry_count == 0 {
            self.cursor = None;
            return;
        }
        let current = self.cursor.unwrap_or(0) as isize;
        let max_idx = entry_count as isize - 1;
        self.cursor = Some((current + delta).clamp(0, max_idx) as usize);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::time::SystemTime;

    fn entry(name: &str, is_writable: bool) -> FileEntry {
        FileEntry {
            path: PathBuf::from("/data").join(name),
            name: name.to_string(),
            is_dir: true,
            is_symlink: false,
            is_hidden: false,
            is_writable,
            size: 0,
            modified: SystemTime::UNIX_EPOCH,
        }
    }

    #[test]
    fn test_check_writable_entry() {
        let entries = vec![entry("a", true), entry("b", true)];
        let mut selection = SelectionState::new();
        assert!(selection.check(1, &entries));
        assert_eq!(selection.checked(), Some(1));
    }

    #[test]
    fn test_check_read_only_entry_rejected() {
        let entries = vec![entry("a", true), entry("ro", false)];
        let mut selection = SelectionState::new();
        assert!(!selection.check(1, &entries));
        assert_eq!(selection.checked(), None);

        assert!(selection.check(0, &entries));
        assert!(!selection.check(1, &entries));
        assert_eq!(selection.checked(), Some(0));
        assert!(!selection.check(7, &entries));
    }

    #[test]
    fn test_reset_clears_check_and_homes_cursor() {
        let entries = vec![entry("a", true)];
        let mut selection = SelectionState::new();
        selection.check(0, &entries);
        selection.cursor = Some(4);

        selection.reset(3);
        assert_eq!(selection.checked(), None);
        assert_eq!(selection.cursor, Some(0));

        selection.reset(0);
        assert_eq!(selection.cursor, None);
    }

    #[test]
    fn test_move_cursor_clamps() {
        let mut selection = SelectionState::new();
        selection.move_cursor(1, 3);
        assert_eq!(selection.cursor, Some(1));
        selection.move_cursor(10, 3);
        assert_eq!(selection.cursor, Some(2));
        selection.move_cursor(-10, 3);
        assert_eq!(selection.cursor, Some(0));
        selection.move_cursor(1, 0);
        assert_eq!(selection.cursor, None);
    }
}
