// Chooser session - what the dialog renders from and calls into
use crate::error::ListingError;
use crate::state::{FileBrowser, FilterMode, SelectionState};
use std::path::{self, Path};

/// One directory-choosing session.
///
/// Wraps the [`FileBrowser`] together with the selection that belongs to
/// its current listing. Every successful navigation invalidates the
/// selection, since row indices no longer refer to the same entries.
pub struct DirChooser {
    browser: FileBrowser,
    selection: SelectionState,
}

impl DirChooser {
    pub fn new(start_dir: impl AsRef<Path>, filter: FilterMode) -> Result<Self, ListingError> {
        let browser = FileBrowser::new(start_dir, filter)?;
        let mut selection = SelectionState::new();
        selection.reset(browser.entries().len());
        Ok(Self { browser, selection })
    }

    pub fn browser(&self) -> &FileBrowser {
        &self.browser
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn open_entry(&mut self, index: usize) -> bool {
        let ok = self.browser.descend_into(index);
        self.after_navigation(ok)
    }

    pub fn go_up(&mut self) -> bool {
        let ok = self.browser.ascend_to_parent();
        self.after_navigation(ok)
    }

    pub fn go_to_ancestor(&mut self, index: usize) -> bool {
        let ok = self.browser.jump_to_ancestor(index);
        self.after_navigation(ok)
    }

    pub fn go_back(&mut self) -> bool {
        let ok = self.browser.return_to_last();
        self.after_navigation(ok)
    }

    /// Restarts browsing at the filesystem root of `target` and walks down to
    /// it with [`FileBrowser::navigate_to`], so the ancestor stack ends up as
    /// the path from the root.
    ///
    /// The session switches over if the walk got anywhere, even when it
    /// stopped short of `target`. Otherwise nothing changes.
    pub fn navigate_to(&mut self, target: impl AsRef<Path>) -> bool {
        let target = target.as_ref();
        let root = match path::absolute(target) {
            Ok(absolute) => absolute.ancestors().last().map(Path::to_path_buf),
            Err(e) => {
                log::warn!("{}", ListingError::from_io(target, e));
                return false;
            }
        };
        let Some(root) = root else {
            return false;
        };
        let mut browser = match FileBrowser::new(&root, self.browser.filter().clone()) {
            Ok(browser) => browser,
            Err(e) => {
                log::warn!("{}", e);
                return false;
            }
        };

        let reached = browser.navigate_to(target);
        if reached || !browser.ancestors().is_empty() {
            self.browser = browser;
            self.selection.reset(self.browser.entries().len());
        }
        reached
    }

    pub fn refresh(&mut self) -> bool {
        let ok = self.browser.refresh();
        self.after_navigation(ok)
    }

    pub fn create_directory(&self, name: &str) -> bool {
        self.browser.create_directory(name)
    }

    pub fn check(&mut self, index: usize) -> bool {
        self.selection.check(index, self.browser.entries())
    }

    pub fn uncheck(&mut self) {
        self.selection.uncheck();
    }

    pub fn move_cursor(&mut self, delta: isize) {
        self.selection
            .move_cursor(delta, self.browser.entries().len());
    }

    pub fn set_cursor(&mut self, index: usize) {
        if index < self.browser.entries().len() {
            self.selection.cursor = Some(index);
        }
    }

    /// Absolute path of the checked entry, `None` when nothing is checked.
    pub fn selected_directory(&self) -> Option<&Path> {
        self.selection
            .checked()
            .and_then(|i| self.browser.entry(i))
            .map(|e| e.path.as_path())
    }

    pub fn current_dir_label(&self) -> String {
        format!("{}/", self.browser.current_name())
    }

    pub fn breadcrumb(&self) -> Vec<String> {
        self.browser
            .ancestor_names()
            .into_iter()
            .map(|name| format!("{}/", name))
            .collect()
    }

    fn after_navigation(&mut self, ok: bool) -> bool {
        if ok {
            self.selection.reset(self.browser.entries().len());
        }
        ok
    }
}
