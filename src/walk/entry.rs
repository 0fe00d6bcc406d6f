//! Entry snapshots produced during a walk

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// One filesystem node as seen at traversal time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Path joined from the walk root down to this node
    pub path: PathBuf,
    /// Base name exactly as stored on disk
    pub name: OsString,
    pub is_dir: bool,
    pub is_symlink: bool,
    /// 0 for the root
    pub depth: usize,
}

/// Pending work inside a frontier: an entry plus the path used to list it.
///
/// `resolved` equals `entry.path` unless a symlinked directory was followed,
/// in which case it is the link's canonical target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    pub entry: Entry,
    pub resolved: PathBuf,
}

impl WorkItem {
    pub fn new(entry: Entry) -> Self {
        let resolved = entry.path.clone();
        Self { entry, resolved }
    }

    pub fn with_resolved(entry: Entry, resolved: PathBuf) -> Self {
        Self { entry, resolved }
    }
}

/// Get the name printed for a path.
///
/// Paths without a final normal component (`.`, `./`, `/`, `a/..`) have no
/// file name, so their last component is used instead.
pub fn display_name(path: &Path) -> OsString {
    if let Some(name) = path.file_name() {
        return name.to_os_string();
    }
    path.components()
        .next_back()
        .map(|component| component.as_os_str().to_os_string())
        .unwrap_or_else(|| OsString::from("."))
}
