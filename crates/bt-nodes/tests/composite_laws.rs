use std::cell::Cell;
use std::rc::Rc;

use bt_core::{Blackboard, Result, Scope, Status};
use bt_nodes::{
    Action, Composition, ControlNode, Leaf, ParallelRule, SelectorRule, SequenceRule, Tree,
};
use proptest::prelude::*;

struct Fixed {
    status: Status,
    runs: Rc<Cell<u32>>,
}

impl Leaf for Fixed {
    fn run(&mut self, _blackboard: &mut Scope<'_>) -> Result<Status> {
        self.runs.set(self.runs.get() + 1);
        Ok(self.status)
    }
}

fn build<C: Composition>(statuses: &[Status]) -> (Tree, Vec<Rc<Cell<u32>>>) {
    let mut root = ControlNode::<C>::new("root");
    let mut counters = Vec::new();
    for (i, status) in statuses.iter().enumerate() {
        let runs = Rc::new(Cell::new(0));
        root.push(Action::new(
            format!("leaf{i}"),
            Fixed {
                status: *status,
                runs: runs.clone(),
            },
        ));
        counters.push(runs);
    }
    let tree = Tree::new(root, Blackboard::new().into_shared()).unwrap();
    (tree, counters)
}

fn resolved_status() -> impl Strategy<Value = Status> {
    prop_oneof![
        Just(Status::Success),
        Just(Status::Failure),
        Just(Status::Running),
    ]
}

proptest! {
    #[test]
    fn sequence_returns_first_non_success(statuses in prop::collection::vec(resolved_status(), 0..8)) {
        let (mut tree, counters) = build::<SequenceRule>(&statuses);
        let result = tree.tick().unwrap();

        let stop = statuses.iter().position(|s| *s != Status::Success);
        let expected = stop.map(|i| statuses[i]).unwrap_or(Status::Success);
        prop_assert_eq!(result, expected);
        for (i, c) in counters.iter().enumerate() {
            let ran = stop.map_or(true, |p| i <= p);
            prop_assert_eq!(c.get(), u32::from(ran));
        }
    }

    #[test]
    fn selector_returns_first_non_failure(statuses in prop::collection::vec(resolved_status(), 0..8)) {
        let (mut tree, counters) = build::<SelectorRule>(&statuses);
        let result = tree.tick().unwrap();

        let stop = statuses.iter().position(|s| *s != Status::Failure);
        let expected = stop.map(|i| statuses[i]).unwrap_or(Status::Failure);
        prop_assert_eq!(result, expected);
        for (i, c) in counters.iter().enumerate() {
            let ran = stop.map_or(true, |p| i <= p);
            prop_assert_eq!(c.get(), u32::from(ran));
        }
    }

    #[test]
    fn parallel_ticks_all_and_prioritises_failure(statuses in prop::collection::vec(resolved_status(), 0..8)) {
        let (mut tree, counters) = build::<ParallelRule>(&statuses);
        let result = tree.tick().unwrap();

        let expected = if statuses.contains(&Status::Failure) {
            Status::Failure
        } else if statuses.contains(&Status::Running) {
            Status::Running
        } else {
            Status::Success
        };
        prop_assert_eq!(result, expected);
        prop_assert!(counters.iter().all(|c| c.get() == 1));
    }

    #[test]
    fn repeated_ticks_are_deterministic(statuses in prop::collection::vec(resolved_status(), 0..6)) {
        let (mut tree, _) = build::<SequenceRule>(&statuses);
        let first = tree.tick().unwrap();
        let second = tree.tick().unwrap();
        prop_assert_eq!(first, second);
        prop_assert_eq!(tree.ticks(), 2);
    }
}
