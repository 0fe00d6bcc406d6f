//! Cycle guard for walks that follow symlinks

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Canonical paths of every directory entered so far.
#[derive(Debug, Default)]
pub(crate) struct VisitedDirs {
    seen: HashSet<PathBuf>,
}

impl VisitedDirs {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Record `dir` as entered. Returns false if its canonical path was
    /// already entered through some other route.
    pub(crate) fn enter(&mut self, dir: &Path) -> io::Result<bool> {
        let canonical = fs::canonicalize(dir)?;
        Ok(self.seen.insert(canonical))
    }

    pub(crate) fn len(&self) -> usize {
        self.seen.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_same_directory_entered_once() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();

        let mut visited = VisitedDirs::new();
        assert!(visited.enter(dir.path()).unwrap());
        assert!(visited.enter(&dir.path().join("sub")).unwrap());
        // Different spelling, same directory
        assert!(!visited.enter(&dir.path().join("sub").join("..")).unwrap());
        assert_eq!(visited.len(), 2);
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let dir = TempDir::new().unwrap();
        let mut visited = VisitedDirs::new();
        assert!(visited.enter(&dir.path().join("gone")).is_err());
        assert_eq!(visited.len(), 0);
    }
}
