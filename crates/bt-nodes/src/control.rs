use std::marker::PhantomData;

use bt_core::{Result, SharedBlackboard, Status};
use tracing::trace;

use crate::node::{run_child, Node, NodeCore, NodeKind};

/// Aggregation rule of a control node.
pub trait Composition: 'static {
    const KIND: NodeKind;

    /// Run `children` in order (or as many as the rule requires) and derive the result.
    fn evaluate(children: &mut [Box<dyn Node>]) -> Result<Status>;
}

/// AND: stop at the first child that is not `Success`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequenceRule;

impl Composition for SequenceRule {
    const KIND: NodeKind = NodeKind::Sequence;

    fn evaluate(children: &mut [Box<dyn Node>]) -> Result<Status> {
        for child in children.iter_mut() {
            match run_child(child.as_mut())? {
                Status::Success => continue,
                other => return Ok(other),
            }
        }
        Ok(Status::Success)
    }
}

/// OR: stop at the first child that is not `Failure`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectorRule;

impl Composition for SelectorRule {
    const KIND: NodeKind = NodeKind::Selector;

    fn evaluate(children: &mut [Box<dyn Node>]) -> Result<Status> {
        for child in children.iter_mut() {
            match run_child(child.as_mut())? {
                Status::Failure => continue,
                other => return Ok(other),
            }
        }
        Ok(Status::Failure)
    }
}

/// Every child runs; `Failure` beats `Running` beats `Success`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParallelRule;

impl Composition for ParallelRule {
    const KIND: NodeKind = NodeKind::Parallel;

    fn evaluate(children: &mut [Box<dyn Node>]) -> Result<Status> {
        let mut failed = false;
        let mut running = false;
        for child in children.iter_mut() {
            match run_child(child.as_mut())? {
                Status::Failure => failed = true,
                Status::Running => running = true,
                _ => {}
            }
        }
        Ok(if failed {
            Status::Failure
        } else if running {
            Status::Running
        } else {
            Status::Success
        })
    }
}

/// A node owning an ordered list of children.
pub struct ControlNode<C> {
    core: NodeCore,
    children: Vec<Box<dyn Node>>,
    _rule: PhantomData<fn() -> C>,
}

pub type Sequence = ControlNode<SequenceRule>;
pub type Selector = ControlNode<SelectorRule>;
pub type ParallelSequence = ControlNode<ParallelRule>;

impl<C: Composition> ControlNode<C> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            core: NodeCore::new(name),
            children: Vec::new(),
            _rule: PhantomData,
        }
    }

    pub fn with_children(name: impl Into<String>, children: Vec<Box<dyn Node>>) -> Self {
        let mut node = Self::new(name);
        for child in children {
            node.append(child);
        }
        node
    }

    pub fn with_child(mut self, child: impl Node) -> Self {
        self.push(child);
        self
    }

    pub fn push(&mut self, child: impl Node) {
        self.append(Box::new(child));
    }

    /// Append `child` after the existing children. If a blackboard is already attached it is
    /// propagated to the new subtree.
    pub fn append(&mut self, mut child: Box<dyn Node>) {
        if let Some(bb) = self.core.attached() {
            child.attach_blackboard(bb);
        }
        self.children.push(child);
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl<C: Composition> Node for ControlNode<C> {
    fn name(&self) -> &str {
        self.core.name()
    }

    fn kind(&self) -> NodeKind {
        C::KIND
    }

    fn status(&self) -> Status {
        self.core.status()
    }

    fn children(&self) -> &[Box<dyn Node>] {
        &self.children
    }

    fn attach_blackboard(&mut self, blackboard: &SharedBlackboard) {
        self.core.attach(blackboard);
        for child in self.children.iter_mut() {
            child.attach_blackboard(blackboard);
        }
    }

    fn run(&mut self) -> Result<Status> {
        let status = C::evaluate(&mut self.children)?;
        self.core.set_status(status);
        trace!(node = self.core.name(), kind = C::KIND.as_str(), %status, "control node resolved");
        Ok(status)
    }

    fn reset(&mut self) {
        self.core.reset();
        for child in self.children.iter_mut() {
            child.reset();
        }
    }
}
