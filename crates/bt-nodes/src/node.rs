use bt_core::{BtError, Result, SharedBlackboard, Status};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Structural role of a node, used by tooling to pick glyphs and labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum NodeKind {
    Sequence,
    Selector,
    Parallel,
    Decorator,
    Action,
    Condition,
}

impl NodeKind {
    pub fn is_leaf(self) -> bool {
        matches!(self, NodeKind::Action | NodeKind::Condition)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Sequence => "sequence",
            NodeKind::Selector => "selector",
            NodeKind::Parallel => "parallel",
            NodeKind::Decorator => "decorator",
            NodeKind::Action => "action",
            NodeKind::Condition => "condition",
        }
    }
}

/// A behavior-tree node.
///
/// `run` evaluates the node against the current state of its subtree and stores the result
/// as the node's status; `tick` is the driver entry point and always starts from a clean
/// (`Idle`) subtree. Structural problems are returned as errors and abort the tick; a
/// `Failure` status is never an error.
pub trait Node: 'static {
    fn name(&self) -> &str;

    fn kind(&self) -> NodeKind;

    fn status(&self) -> Status;

    /// Owned children, in evaluation order.
    fn children(&self) -> &[Box<dyn Node>] {
        &[]
    }

    /// Attach `blackboard` to this node and, recursively, to every current descendant.
    fn attach_blackboard(&mut self, blackboard: &SharedBlackboard);

    fn run(&mut self) -> Result<Status>;

    /// Set this node and every descendant back to `Idle`.
    fn reset(&mut self);

    /// Check the subtree for assembly defects before it is ticked.
    fn validate(&self) -> Result<()> {
        self.children().iter().try_for_each(|c| c.validate())
    }

    fn tick(&mut self) -> Result<Status> {
        self.reset();
        self.run()
    }
}

/// Identity, status and blackboard handle shared by every node type.
#[derive(Debug, Clone)]
pub struct NodeCore {
    name: String,
    status: Status,
    blackboard: Option<SharedBlackboard>,
}

impl NodeCore {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: Status::Idle,
            blackboard: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn set_status(&mut self, status: Status) {
        self.status = status;
    }

    pub fn reset(&mut self) {
        self.status = Status::Idle;
    }

    pub fn attach(&mut self, blackboard: &SharedBlackboard) {
        self.blackboard = Some(blackboard.clone());
    }

    pub fn attached(&self) -> Option<&SharedBlackboard> {
        self.blackboard.as_ref()
    }

    pub fn blackboard(&self) -> Result<&SharedBlackboard> {
        self.blackboard.as_ref().ok_or_else(|| BtError::NoBlackboard {
            node: self.name.clone(),
        })
    }
}

/// Run `child` and reject an `Idle` result.
pub(crate) fn run_child(child: &mut dyn Node) -> Result<Status> {
    let status = child.run()?;
    if status.is_resolved() {
        Ok(status)
    } else {
        Err(BtError::Unresolved {
            node: child.name().to_string(),
        })
    }
}
