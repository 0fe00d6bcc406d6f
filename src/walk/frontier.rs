//! Pending-work collections that drive the iterative strategies.
//!
//! A frontier only decides which item comes out next. `push_children` takes
//! siblings in listing order; each variant inserts them so that, among
//! themselves, they are popped in that same order.

use std::collections::VecDeque;

use super::entry::WorkItem;

pub trait Frontier {
    fn push(&mut self, item: WorkItem);

    fn pop(&mut self) -> Option<WorkItem>;

    fn push_children(&mut self, children: Vec<WorkItem>);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Last-in-first-out frontier. Yields depth-first pre-order.
#[derive(Debug, Default)]
pub struct StackFrontier {
    items: Vec<WorkItem>,
}

impl StackFrontier {
    pub fn with_root(root: WorkItem) -> Self {
        Self { items: vec![root] }
    }
}

impl Frontier for StackFrontier {
    fn push(&mut self, item: WorkItem) {
        self.items.push(item);
    }

    fn pop(&mut self) -> Option<WorkItem> {
        self.items.pop()
    }

    fn push_children(&mut self, children: Vec<WorkItem>) {
        // Reversed so the first listed child sits on top
        self.items.extend(children.into_iter().rev());
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

/// First-in-first-out frontier. Yields breadth-first level order.
#[derive(Debug, Default)]
pub struct QueueFrontier {
    items: VecDeque<WorkItem>,
}

impl QueueFrontier {
    pub fn with_root(root: WorkItem) -> Self {
        Self {
            items: VecDeque::from([root]),
        }
    }
}

impl Frontier for QueueFrontier {
    fn push(&mut self, item: WorkItem) {
        self.items.push_back(item);
    }

    fn pop(&mut self) -> Option<WorkItem> {
        self.items.pop_front()
    }

    fn push_children(&mut self, children: Vec<WorkItem>) {
        self.items.extend(children);
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}
