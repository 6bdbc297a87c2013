//! Autonomous-driving mission.
//!
//! A vehicle follows a lane towards a goal. A static obstacle may block the way, in which
//! case it dodges; the dodge takes a few ticks and ends either clear of the obstacle or in a
//! collision. The mission succeeds once no distance to the goal remains.

use bt_core::{Blackboard, Result, Scope, Status};
use bt_nodes::{Action, Condition, Inverter, Leaf, Selector, Sequence, Tree};

use crate::config::DriveConfig;
use crate::rng::{DeterministicRng, SplitMix64};

pub const DISTANCE_TO_GOAL: &str = "distance_to_goal";
pub const GOAL_REACHED: &str = "goal_reached";
pub const FAILURE_INFO: &str = "failure_info";

/// Coin flip: `Success` or `Failure`.
pub struct RandomStatus {
    rng: SplitMix64,
}

impl RandomStatus {
    pub fn new(rng: SplitMix64) -> Self {
        Self { rng }
    }
}

impl Leaf for RandomStatus {
    fn run(&mut self, _blackboard: &mut Scope<'_>) -> Result<Status> {
        Ok(if self.rng.next_bool() {
            Status::Success
        } else {
            Status::Failure
        })
    }
}

/// Two in five ticks the dodge completes, two in five it makes half a unit of progress and
/// keeps running, one in five it collides.
pub struct DodgeStaticObstacle {
    rng: SplitMix64,
}

impl DodgeStaticObstacle {
    pub fn new(rng: SplitMix64) -> Self {
        Self { rng }
    }
}

impl Leaf for DodgeStaticObstacle {
    fn run(&mut self, blackboard: &mut Scope<'_>) -> Result<Status> {
        match self.rng.next_below(5) {
            1 | 2 => Ok(Status::Success),
            3 | 4 => {
                let distance = blackboard.read_as::<f64>(DISTANCE_TO_GOAL)?;
                blackboard.write(DISTANCE_TO_GOAL, distance - 0.5);
                Ok(Status::Running)
            }
            _ => {
                blackboard.write(FAILURE_INFO, "Collision occurred!");
                Ok(Status::Failure)
            }
        }
    }
}

/// One unit of progress per tick.
pub struct FollowLane;

impl Leaf for FollowLane {
    fn run(&mut self, blackboard: &mut Scope<'_>) -> Result<Status> {
        let distance = blackboard.read_as::<f64>(DISTANCE_TO_GOAL)? - 1.0;
        blackboard.write(DISTANCE_TO_GOAL, distance);
        if distance <= 0.0 {
            blackboard.write(GOAL_REACHED, true);
            Ok(Status::Success)
        } else {
            Ok(Status::Running)
        }
    }
}

/// Seed the blackboard and assemble:
///
/// ```text
/// ROOT (sequence)
///   Dodging (selector)
///     Inverter
///       <StaticObstacleAhead>?
///     DodgeStaticObstacle
///   FollowLane
/// ```
pub fn build(config: &DriveConfig) -> Result<Tree> {
    let seed = config.scenario.seed;

    let mut blackboard = Blackboard::from_config(&config.blackboard);
    blackboard.write(DISTANCE_TO_GOAL, config.scenario.distance_to_goal);
    blackboard.write(GOAL_REACHED, false);

    let mut inverter = Inverter::new("Inverter");
    inverter.set_child(Condition::new(
        "StaticObstacleAhead",
        RandomStatus::new(SplitMix64::for_stream(seed, "StaticObstacleAhead")),
    ));

    let mut dodging = Selector::new("Dodging");
    dodging.push(inverter);
    dodging.push(Action::new(
        "DodgeStaticObstacle",
        DodgeStaticObstacle::new(SplitMix64::for_stream(seed, "DodgeStaticObstacle")),
    ));

    let mut root = Sequence::new("ROOT");
    root.push(dodging);
    root.push(Action::new("FollowLane", FollowLane));

    Tree::new(root, blackboard.into_shared())
}
