//! dirwalk - print every file and directory under a path

pub mod logging;
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
pub mod walk;

pub use walk::{
    CollectNames, Entry, EntrySink, NameWriter, SiblingOrder, Strategy, SymlinkPolicy,
    TreeWalker, WalkError, WalkSummary, WalkerConfig,
};
