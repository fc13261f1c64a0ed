//! Default tree consumer of the CLI.

use unql_lib::{Node, TreeConsumer};

/// Visits every node in pre-order and logs its label.
#[derive(Debug, Default)]
pub struct LoggingWalker {
    visited: usize,
}

impl LoggingWalker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes seen so far.
    pub fn visited(&self) -> usize {
        self.visited
    }

    fn walk(&mut self, node: Node<'_>) {
        self.visited += 1;
        tracing::info!("Gone walking {}", node.label());
        for index in 0..node.child_count() {
            if let Some(child) = node.child_at(index) {
                self.walk(child);
            }
        }
    }
}

impl TreeConsumer for LoggingWalker {
    fn consume(&mut self, root: Node<'_>) {
        self.walk(root);
    }
}
