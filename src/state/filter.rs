// Filter policy for directory listings

/// Which entries a listing keeps. Directories always pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FilterMode {
    #[default]
    DirectoriesOnly,
    /// Files pass when their name contains any of these substrings.
    Patterns(Vec<String>),
}

impl FilterMode {
    pub fn new(dirs_only: bool, patterns: Vec<String>) -> Self {
        if dirs_only {
            Self::DirectoriesOnly
        } else {
            Self::Patterns(patterns)
        }
    }

    pub fn accepts(&self, name: &str, is_dir: bool) -> bool {
        if is_dir {
            return true;
        }
        match self {
            Self::DirectoriesOnly => false,
            Self::Patterns(patterns) => patterns.iter().any(|p| name.contains(p.as_str())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directories_always_pass() {
        assert!(FilterMode::DirectoriesOnly.accepts("src", true));
        assert!(FilterMode::Patterns(vec![".mp3".into()]).accepts("src", true));
    }

    #[test]
    fn test_default_is_dirs_only() {
        assert_eq!(FilterMode::default(), FilterMode::DirectoriesOnly);
    }

    #[test]
    fn test_dirs_only_rejects_files() {
        assert!(!FilterMode::DirectoriesOnly.accepts("notes.txt", false));
    }

    #[test]
    fn test_patterns_match_substrings() {
        let filter = FilterMode::new(false, vec![".mp3".into(), ".ogg".into()]);
        assert!(filter.accepts("song.mp3", false));
        assert!(filter.accepts("a.ogg.bak", false));
        assert!(!filter.accepts("cover.jpg", false));
    }

    #[test]
    fn test_empty_patterns_behave_like_dirs_only() {
        let filter = FilterMode::new(false, Vec::new());
        assert_ne!(filter, FilterMode::default());
        assert!(!filter.accepts("anything", false));
        assert!(filter.accepts("dir", true));
    }
}
