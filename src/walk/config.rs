//! Configuration types for tree walkers

use clap::ValueEnum;

/// Call depth at which the recursive strategy hands the rest of a subtree
/// to an explicit stack.
pub const DEFAULT_RECURSION_LIMIT: usize = 256;

/// Traversal order used by `TreeWalker`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Strategy {
    /// Depth-first pre-order on the call stack
    #[default]
    Recursive,
    /// Depth-first pre-order on an explicit stack
    Stack,
    /// Breadth-first level order on an explicit queue
    Queue,
}

/// How siblings inside one directory are ordered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SiblingOrder {
    /// Whatever order the directory listing returns
    #[default]
    Native,
    /// Sorted by file name
    Name,
}

/// What to do with symlinks found below the root.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SymlinkPolicy {
    /// Report the link itself and never enter it
    #[default]
    Skip,
    /// Enter linked directories, at most once per canonical path
    Follow,
}

/// Configuration for tree walking behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkerConfig {
    pub strategy: Strategy,
    pub order: SiblingOrder,
    pub symlinks: SymlinkPolicy,
    /// Only consulted by `Strategy::Recursive`.
    pub recursion_limit: usize,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            order: SiblingOrder::default(),
            symlinks: SymlinkPolicy::default(),
            recursion_limit: DEFAULT_RECURSION_LIMIT,
        }
    }
}

impl WalkerConfig {
    pub fn with_strategy(strategy: Strategy) -> Self {
        Self {
            strategy,
            ..Default::default()
        }
    }

    pub fn sorted(mut self) -> Self {
        self.order = SiblingOrder::Name;
        self
    }

    pub fn following_symlinks(mut self) -> Self {
        self.symlinks = SymlinkPolicy::Follow;
        self
    }
}
