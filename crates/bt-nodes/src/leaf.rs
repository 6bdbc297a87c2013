use bt_core::{BtError, Result, Scope, SharedBlackboard, Status};
use tracing::trace;

use crate::node::{Node, NodeCore, NodeKind};

/// Application-supplied leaf behavior.
///
/// `run` must resolve to `Success`, `Failure` or `Running`. Every blackboard access made
/// through `blackboard` is attributed to the owning leaf node.
pub trait Leaf: 'static {
    fn run(&mut self, blackboard: &mut Scope<'_>) -> Result<Status>;
}

/// Adapter turning a closure into a [`Leaf`].
pub struct FnLeaf<F>(F);

impl<F> Leaf for FnLeaf<F>
where
    F: FnMut(&mut Scope<'_>) -> Result<Status> + 'static,
{
    fn run(&mut self, blackboard: &mut Scope<'_>) -> Result<Status> {
        (self.0)(blackboard)
    }
}

fn run_leaf<L: Leaf>(core: &mut NodeCore, leaf: &mut L) -> Result<Status> {
    let shared = core.blackboard()?.clone();
    let mut board = shared
        .try_borrow_mut()
        .map_err(|_| BtError::BlackboardBusy {
            node: core.name().to_string(),
        })?;
    let status = {
        let mut scope = board.scope(core.name());
        leaf.run(&mut scope)?
    };
    if !status.is_resolved() {
        return Err(BtError::Unresolved {
            node: core.name().to_string(),
        });
    }
    core.set_status(status);
    trace!(node = core.name(), %status, "leaf resolved");
    Ok(status)
}

macro_rules! leaf_node {
    ($(#[$meta:meta])* $ty:ident, $kind:expr) => {
        $(#[$meta])*
        pub struct $ty<L> {
            core: NodeCore,
            leaf: L,
        }

        impl<L: Leaf> $ty<L> {
            pub fn new(name: impl Into<String>, leaf: L) -> Self {
                Self {
                    core: NodeCore::new(name),
                    leaf,
                }
            }

            pub fn leaf(&self) -> &L {
                &self.leaf
            }

            pub fn leaf_mut(&mut self) -> &mut L {
                &mut self.leaf
            }
        }

        impl<F> $ty<FnLeaf<F>>
        where
            F: FnMut(&mut Scope<'_>) -> Result<Status> + 'static,
        {
            pub fn from_fn(name: impl Into<String>, f: F) -> Self {
                Self::new(name, FnLeaf(f))
            }
        }

        impl<L: Leaf> Node for $ty<L> {
            fn name(&self) -> &str {
                self.core.name()
            }

            fn kind(&self) -> NodeKind {
                $kind
            }

            fn status(&self) -> Status {
                self.core.status()
            }

            fn attach_blackboard(&mut self, blackboard: &SharedBlackboard) {
                self.core.attach(blackboard);
            }

            fn run(&mut self) -> Result<Status> {
                run_leaf(&mut self.core, &mut self.leaf)
            }

            fn reset(&mut self) {
                self.core.reset();
            }
        }
    };
}

leaf_node!(
    /// Leaf that acts on the world / blackboard.
    Action,
    NodeKind::Action
);

leaf_node!(
    /// Leaf used for branching. By convention it only reads the blackboard; this is not
    /// enforced.
    Condition,
    NodeKind::Condition
);
