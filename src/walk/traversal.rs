//! Traversal state shared by every strategy.
//!
//! Strategies differ only in where pending work is kept. Resolving the root,
//! reporting an entry and listing a directory's children all happen here.

use std::fs;
use std::path::Path;

use tracing::{debug, trace};

use super::config::{SiblingOrder, SymlinkPolicy, WalkerConfig};
use super::entry::{Entry, WorkItem, display_name};
use super::error::{Result, WalkError};
use super::sink::EntrySink;
use super::visited::VisitedDirs;
use super::walker::WalkSummary;

pub(crate) struct Traversal<'a, S: EntrySink + ?Sized> {
    config: &'a WalkerConfig,
    sink: &'a mut S,
    visited: Option<VisitedDirs>,
    summary: WalkSummary,
}

impl<'a, S: EntrySink + ?Sized> Traversal<'a, S> {
    pub fn new(config: &'a WalkerConfig, sink: &'a mut S) -> Self {
        let visited = match config.symlinks {
            SymlinkPolicy::Follow => Some(VisitedDirs::new()),
            SymlinkPolicy::Skip => None,
        };
        Self {
            config,
            sink,
            visited,
            summary: WalkSummary::default(),
        }
    }

    /// Resolve the root. A symlinked root is always followed.
    pub fn root(&self, path: &Path) -> Result<WorkItem> {
        let metadata = fs::metadata(path).map_err(|source| WalkError::metadata(path, source))?;
        Ok(WorkItem::new(Entry {
            path: path.to_path_buf(),
            name: display_name(path),
            is_dir: metadata.is_dir(),
            is_symlink: path.is_symlink(),
            depth: 0,
        }))
    }

    pub fn emit(&mut self, entry: &Entry) -> Result<()> {
        trace!(
            path = %entry.path.display(),
            depth = entry.depth,
            is_dir = entry.is_dir,
            is_symlink = entry.is_symlink,
            "visit"
        );
        self.sink.visit(entry).map_err(WalkError::Output)?;
        if entry.is_dir {
            self.summary.dirs += 1;
        } else {
            self.summary.files += 1;
        }
        Ok(())
    }

    /// List the children of `item` in sibling order. Non-directories and
    /// directories already entered through another route have none.
    pub fn expand(&mut self, item: &WorkItem) -> Result<Vec<WorkItem>> {
        if !item.entry.is_dir {
            return Ok(Vec::new());
        }

        if let Some(visited) = self.visited.as_mut() {
            let first_visit = visited
                .enter(&item.resolved)
                .map_err(|source| WalkError::metadata(&item.entry.path, source))?;
            if !first_visit {
                debug!(path = %item.entry.path.display(), "directory already entered, not descending");
                return Ok(Vec::new());
            }
        }

        let listing = fs::read_dir(&item.resolved)
            .map_err(|source| WalkError::listing(&item.entry.path, source))?;

        let mut children = Vec::new();
        for dir_entry in listing {
            let dir_entry =
                dir_entry.map_err(|source| WalkError::listing(&item.entry.path, source))?;
            children.push(self.child(item, &dir_entry)?);
        }

        if self.config.order == SiblingOrder::Name {
            children.sort_by(|a, b| a.entry.name.cmp(&b.entry.name));
        }

        trace!(path = %item.entry.path.display(), children = children.len(), "listed directory");
        Ok(children)
    }

    fn child(&self, parent: &WorkItem, dir_entry: &fs::DirEntry) -> Result<WorkItem> {
        let file_name = dir_entry.file_name();
        let path = parent.entry.path.join(&file_name);
        let mut resolved = parent.resolved.join(&file_name);

        // DirEntry::metadata does not traverse symlinks
        let metadata = dir_entry
            .metadata()
            .map_err(|source| WalkError::metadata(&path, source))?;
        let is_symlink = metadata.file_type().is_symlink();
        let mut is_dir = metadata.is_dir();

        if is_symlink && self.config.symlinks == SymlinkPolicy::Follow {
            match fs::canonicalize(&resolved) {
                Ok(target) => {
                    is_dir = target.is_dir();
                    resolved = target;
                }
                Err(err) => {
                    debug!(path = %path.display(), error = %err, "unresolvable symlink, reporting as leaf");
                }
            }
        }

        Ok(WorkItem::with_resolved(
            Entry {
                path,
                name: file_name,
                is_dir,
                is_symlink,
                depth: parent.entry.depth + 1,
            },
            resolved,
        ))
    }

    pub fn finish(self) -> Result<WalkSummary> {
        if let Some(visited) = &self.visited {
            debug!(entered = visited.len(), "distinct directories entered");
        }
        self.sink.finish(&self.summary).map_err(WalkError::Output)?;
        Ok(self.summary)
    }
}
