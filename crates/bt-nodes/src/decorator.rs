use bt_core::{BtError, Result, SharedBlackboard, Status};
use tracing::trace;

use crate::node::{run_child, Node, NodeCore, NodeKind};

/// Status mapping applied by a decorator to its child's result.
pub trait Decoration: 'static {
    fn decorate(&self, child: Status) -> Status;
}

/// `Success` and `Failure` swap; `Running` passes through.
#[derive(Debug, Clone, Copy, Default)]
pub struct Invert;

impl Decoration for Invert {
    fn decorate(&self, child: Status) -> Status {
        child.invert()
    }
}

/// A node wrapping exactly one child.
///
/// The child may be set before or after a blackboard is attached. Ticking a decorator
/// without a child is an error, and `Tree::new` rejects such trees up front.
pub struct Decorator<D> {
    core: NodeCore,
    child: Option<Box<dyn Node>>,
    decoration: D,
}

pub type Inverter = Decorator<Invert>;

impl<D: Decoration + Default> Decorator<D> {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_decoration(name, D::default())
    }
}

impl<D: Decoration> Decorator<D> {
    pub fn with_decoration(name: impl Into<String>, decoration: D) -> Self {
        Self {
            core: NodeCore::new(name),
            child: None,
            decoration,
        }
    }

    pub fn with_child(mut self, child: impl Node) -> Self {
        self.set_child(child);
        self
    }

    pub fn set_child(&mut self, child: impl Node) {
        self.set_boxed_child(Box::new(child));
    }

    /// Replace the child, propagating the attached blackboard (if any).
    pub fn set_boxed_child(&mut self, mut child: Box<dyn Node>) {
        if let Some(bb) = self.core.attached() {
            child.attach_blackboard(bb);
        }
        self.child = Some(child);
    }

    pub fn child(&self) -> Option<&dyn Node> {
        self.child.as_deref()
    }

    fn missing_child(&self) -> BtError {
        BtError::MissingChild {
            node: self.core.name().to_string(),
        }
    }
}

impl<D: Decoration> Node for Decorator<D> {
    fn name(&self) -> &str {
        self.core.name()
    }

    fn kind(&self) -> NodeKind {
        NodeKind::Decorator
    }

    fn status(&self) -> Status {
        self.core.status()
    }

    fn children(&self) -> &[Box<dyn Node>] {
        self.child.as_slice()
    }

    fn attach_blackboard(&mut self, blackboard: &SharedBlackboard) {
        self.core.attach(blackboard);
        if let Some(child) = self.child.as_mut() {
            child.attach_blackboard(blackboard);
        }
    }

    fn run(&mut self) -> Result<Status> {
        let child_status = match self.child.as_mut() {
            Some(child) => run_child(child.as_mut())?,
            None => return Err(self.missing_child()),
        };
        let status = self.decoration.decorate(child_status);
        self.core.set_status(status);
        trace!(node = self.core.name(), child = %child_status, %status, "decorator resolved");
        Ok(status)
    }

    fn reset(&mut self) {
        self.core.reset();
        if let Some(child) = self.child.as_mut() {
            child.reset();
        }
    }

    fn validate(&self) -> Result<()> {
        match self.child.as_ref() {
            Some(child) => child.validate(),
            None => Err(self.missing_child()),
        }
    }
}
