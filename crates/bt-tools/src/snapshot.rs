#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use bt_core::Status;
use bt_nodes::{Node, NodeKind};

/// Owned copy of a tree's names, kinds and statuses.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TreeSnapshot {
    pub name: String,
    pub kind: NodeKind,
    pub status: Status,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Vec::is_empty"))]
    pub children: Vec<TreeSnapshot>,
}

impl TreeSnapshot {
    pub fn capture(node: &dyn Node) -> Self {
        Self {
            name: node.name().to_string(),
            kind: node.kind(),
            status: node.status(),
            children: node
                .children()
                .iter()
                .map(|c| TreeSnapshot::capture(&**c))
                .collect(),
        }
    }

    /// First node named `name`, depth first.
    pub fn find(&self, name: &str) -> Option<&TreeSnapshot> {
        if self.name == name {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(name))
    }

    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(TreeSnapshot::node_count).sum::<usize>()
    }
}
