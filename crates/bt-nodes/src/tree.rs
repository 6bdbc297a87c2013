use bt_core::{Result, SharedBlackboard, Status};
use tracing::debug;

use crate::node::Node;

/// How a [`Tree::run`] call ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeOutcome {
    pub status: Status,
    /// Ticks performed by this call.
    pub ticks: u64,
}

/// Root driver: owns the tree, shares the blackboard, counts ticks.
pub struct Tree {
    root: Box<dyn Node>,
    blackboard: SharedBlackboard,
    ticks: u64,
}

impl Tree {
    /// Validate the topology and attach `blackboard` to every node.
    pub fn new(root: impl Node, blackboard: SharedBlackboard) -> Result<Self> {
        Self::from_boxed(Box::new(root), blackboard)
    }

    pub fn from_boxed(mut root: Box<dyn Node>, blackboard: SharedBlackboard) -> Result<Self> {
        root.validate()?;
        root.attach_blackboard(&blackboard);
        Ok(Self {
            root,
            blackboard,
            ticks: 0,
        })
    }

    pub fn root(&self) -> &dyn Node {
        self.root.as_ref()
    }

    pub fn blackboard(&self) -> &SharedBlackboard {
        &self.blackboard
    }

    pub fn status(&self) -> Status {
        self.root.status()
    }

    /// Total ticks since construction.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn tick(&mut self) -> Result<Status> {
        self.ticks = self.ticks.saturating_add(1);
        let status = self.root.tick()?;
        debug!(tick = self.ticks, root = self.root.name(), %status, "tree ticked");
        Ok(status)
    }

    pub fn reset(&mut self) {
        self.root.reset();
    }

    /// Tick until the root resolves to `Success`/`Failure` or `max_ticks` ticks were spent.
    pub fn run(&mut self, max_ticks: u64) -> Result<TreeOutcome> {
        self.run_with(max_ticks, |_| {})
    }

    /// Like [`Tree::run`], calling `on_tick` after every tick.
    pub fn run_with(
        &mut self,
        max_ticks: u64,
        mut on_tick: impl FnMut(&Tree),
    ) -> Result<TreeOutcome> {
        let mut ticks = 0;
        let mut status = self.status();
        while ticks < max_ticks {
            status = self.tick()?;
            ticks += 1;
            on_tick(self);
            if status.is_terminal() {
                break;
            }
        }
        Ok(TreeOutcome { status, ticks })
    }
}
