//! Directory tree walking logic
//!
//! `TreeWalker` reports the root and every entry below it to an `EntrySink`.
//! Three strategies are available:
//!
//! - `Strategy::Recursive`: depth-first pre-order on the call stack
//! - `Strategy::Stack`: the same pre-order driven by an explicit stack
//! - `Strategy::Queue`: breadth-first level order driven by a queue

mod config;
mod entry;
mod error;
mod frontier;
mod sink;
mod traversal;
mod visited;
mod walker;

// Re-export public types
pub use config::{DEFAULT_RECURSION_LIMIT, SiblingOrder, Strategy, SymlinkPolicy, WalkerConfig};
pub use entry::{Entry, WorkItem, display_name};
pub use error::{Result, WalkError};
pub use frontier::{Frontier, QueueFrontier, StackFrontier};
pub use sink::{CollectNames, EntrySink, NameWriter};
pub use walker::{TreeWalker, WalkSummary};
