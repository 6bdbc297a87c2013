//! Behavior-tree nodes and the tick protocol built on `bt-core`.
//!
//! Every tick is a full re-evaluation: `tick` resets the subtree to `Idle` and then runs it,
//! so no status ever leaks from one tick into the next.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod control;
pub mod decorator;
pub mod leaf;
pub mod node;
pub mod tree;

pub use control::{
    Composition, ControlNode, ParallelRule, ParallelSequence, Selector, SelectorRule,
    Sequence, SequenceRule,
};
pub use decorator::{Decoration, Decorator, Invert, Inverter};
pub use leaf::{Action, Condition, FnLeaf, Leaf};
pub use node::{Node, NodeCore, NodeKind};
pub use tree::{Tree, TreeOutcome};
