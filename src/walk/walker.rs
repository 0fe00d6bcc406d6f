//! TreeWalker - streams every reachable entry to a sink

use std::path::Path;

use tracing::{debug, trace};

use super::config::{Strategy, WalkerConfig};
use super::entry::WorkItem;
use super::error::Result;
use super::frontier::{Frontier, QueueFrontier, StackFrontier};
use super::sink::EntrySink;
use super::traversal::Traversal;

/// Counts of what a completed walk reported. The root is included.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkSummary {
    pub dirs: usize,
    pub files: usize,
}

impl WalkSummary {
    pub fn total(&self) -> usize {
        self.dirs + self.files
    }
}

/// Walks a tree with the configured strategy.
///
/// Every strategy reports the same set of entries. Recursive and stack
/// walks report them in identical pre-order; queue walks report them level
/// by level. The first filesystem or sink error aborts the walk.
pub struct TreeWalker {
    config: WalkerConfig,
}

impl TreeWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self { config }
    }

    pub fn walk<S: EntrySink + ?Sized>(&self, root: &Path, sink: &mut S) -> Result<WalkSummary> {
        debug!(root = %root.display(), strategy = ?self.config.strategy, "starting walk");

        let mut traversal = Traversal::new(&self.config, sink);
        let root_item = traversal.root(root)?;

        match self.config.strategy {
            Strategy::Recursive => self.walk_recursive(&mut traversal, root_item, 0)?,
            Strategy::Stack => drain(&mut traversal, StackFrontier::with_root(root_item))?,
            Strategy::Queue => drain(&mut traversal, QueueFrontier::with_root(root_item))?,
        }

        let summary = traversal.finish()?;
        debug!(dirs = summary.dirs, files = summary.files, "walk complete");
        Ok(summary)
    }

    fn walk_recursive<S: EntrySink + ?Sized>(
        &self,
        traversal: &mut Traversal<'_, S>,
        item: WorkItem,
        call_depth: usize,
    ) -> Result<()> {
        if call_depth >= self.config.recursion_limit {
            // The stack frontier yields the same pre-order without growing the call stack
            trace!(path = %item.entry.path.display(), "recursion limit reached, continuing on explicit stack");
            return drain(traversal, StackFrontier::with_root(item));
        }

        traversal.emit(&item.entry)?;
        for child in traversal.expand(&item)? {
            self.walk_recursive(traversal, child, call_depth + 1)?;
        }
        Ok(())
    }
}

impl Default for TreeWalker {
    fn default() -> Self {
        Self::new(WalkerConfig::default())
    }
}

fn drain<S, F>(traversal: &mut Traversal<'_, S>, mut frontier: F) -> Result<()>
where
    S: EntrySink + ?Sized,
    F: Frontier,
{
    while let Some(item) = frontier.pop() {
        traversal.emit(&item.entry)?;
        let children = traversal.expand(&item)?;
        frontier.push_children(children);
    }
    Ok(())
}
