use bt_core::{AccessMode, ActivityFilter, Blackboard, BtError, Value, UNATTRIBUTED};

#[test]
fn write_then_read_roundtrip_logs_both_accesses_in_order() {
    let mut bb = Blackboard::new();
    {
        let mut scope = bb.scope("Writer");
        scope.write("distance", 5.0);
    }
    let read = {
        let mut scope = bb.scope("Reader");
        scope.read_as::<f64>("distance").unwrap()
    };
    assert_eq!(read, 5.0);

    let log: Vec<_> = bb.activity().collect();
    assert_eq!(log.len(), 2);
    assert_eq!(log[0].mode, AccessMode::Write);
    assert_eq!(log[0].key, "distance");
    assert_eq!(log[0].client.as_deref(), Some("Writer"));
    assert_eq!(log[0].value, Some(Value::Float(5.0)));
    assert_eq!(log[1].mode, AccessMode::Read);
    assert_eq!(log[1].key, "distance");
    assert_eq!(log[1].client.as_deref(), Some("Reader"));
    assert_eq!(log[1].value, None);
}

#[test]
fn scope_attributes_every_access_during_its_lifetime() {
    let mut bb = Blackboard::new();
    bb.write("distance", 3);

    let mut scope = bb.scope("FollowLane");
    let d = scope.read_as::<i64>("distance").unwrap();
    scope.write("distance", d - 1);
    scope.write("goal_reached", false);
    drop(scope);

    let clients: Vec<_> = bb.activity().map(|r| r.client.clone()).collect();
    assert_eq!(
        clients,
        vec![
            None,
            Some("FollowLane".to_string()),
            Some("FollowLane".to_string()),
            Some("FollowLane".to_string()),
        ]
    );
}

#[test]
fn activity_log_is_bounded_and_evicts_oldest_first() {
    let mut bb = Blackboard::with_activity_len(3);
    for i in 0..5 {
        bb.write(format!("k{i}"), i);
    }
    let keys: Vec<_> = bb.activity().map(|r| r.key.as_str()).collect();
    assert_eq!(keys, vec!["k2", "k3", "k4"]);

    bb.set_activity_len(1);
    let keys: Vec<_> = bb.activity().map(|r| r.key.as_str()).collect();
    assert_eq!(keys, vec!["k4"]);
}

#[test]
fn default_bound_is_one_thousand() {
    let mut bb = Blackboard::new();
    assert_eq!(bb.activity_len(), 1000);
    for i in 0..1500 {
        bb.write("counter", i);
    }
    assert_eq!(bb.activity().count(), 1000);
    assert_eq!(
        bb.activity().next().and_then(|r| r.value.clone()),
        Some(Value::Int(500))
    );
}

#[test]
fn reading_absent_key_fails_loudly() {
    let mut bb = Blackboard::new();
    let err = bb.scope("Probe").read("missing").unwrap_err();
    assert_eq!(
        err,
        BtError::KeyNotFound {
            key: "missing".to_string()
        }
    );
}

#[test]
fn typed_read_rejects_wrong_shape() {
    let mut bb = Blackboard::new();
    bb.write("failure_info", "Collision occurred!");
    let err = bb.read_as::<f64>("failure_info").unwrap_err();
    assert_eq!(
        err,
        BtError::TypeMismatch {
            key: "failure_info".to_string(),
            expected: "float",
            found: "str",
        }
    );
}

#[test]
fn peek_does_not_touch_the_log() {
    let mut bb = Blackboard::new();
    bb.write("a", true);
    bb.clear_activity();
    assert_eq!(bb.peek("a"), Some(&Value::Bool(true)));
    assert!(bb.contains("a"));
    assert_eq!(bb.keys().collect::<Vec<_>>(), vec!["a"]);
    assert_eq!(bb.activity().count(), 0);
}

#[test]
fn get_activity_filters_by_mode_key_and_client() {
    let mut bb = Blackboard::new();
    bb.write("distance_to_goal", 5.0);
    {
        let mut s = bb.scope("FollowLane");
        let d = s.read_as::<f64>("distance_to_goal").unwrap();
        s.write("distance_to_goal", d - 1.0);
    }
    {
        let mut s = bb.scope("DodgeStaticObstacle");
        s.write("failure_info", "Collision occurred!");
    }

    let writes = bb.get_activity(&ActivityFilter::new().with_mode(AccessMode::Write));
    assert_eq!(writes.len(), 3);

    let follow = bb.get_activity(
        &ActivityFilter::new()
            .with_mode(AccessMode::Write)
            .with_client("FollowLane")
            .with_key("distance_to_goal"),
    );
    assert_eq!(follow.len(), 1);
    assert_eq!(follow[0].value, Some(Value::Float(4.0)));

    let by_key = bb.get_activity(&ActivityFilter::new().with_key("distance_to_goal"));
    assert_eq!(by_key.len(), 3);
}

#[test]
fn client_filter_selects_unattributed_accesses_by_label() {
    let mut bb = Blackboard::new();
    bb.write("distance_to_goal", 5.0);
    bb.scope("FollowLane").write("distance_to_goal", 4.0);

    let outside = bb.get_activity(&ActivityFilter::new().with_client(UNATTRIBUTED));
    assert_eq!(outside.len(), 1);
    assert_eq!(outside[0].client, None);
    assert_eq!(outside[0].value, Some(Value::Float(5.0)));

    let inside = bb.get_activity(&ActivityFilter::new().with_client("FollowLane"));
    assert_eq!(inside.len(), 1);
    assert_eq!(inside[0].value, Some(Value::Float(4.0)));
}

#[test]
fn scope_inspection_is_not_logged() {
    let mut bb = Blackboard::new();
    bb.write("goal_reached", false);
    bb.clear_activity();

    let scope = bb.scope("FollowLane");
    assert_eq!(scope.client(), "FollowLane");
    assert!(scope.contains("goal_reached"));
    assert!(!scope.contains("failure_info"));
    assert_eq!(scope.peek("goal_reached"), Some(&Value::Bool(false)));
    assert_eq!(scope.peek("failure_info"), None);
    assert_eq!(bb.activity().count(), 0);
}

#[test]
fn get_activity_max_len_keeps_most_recent_matches_in_order() {
    let mut bb = Blackboard::new();
    for i in 0..4 {
        bb.write("x", i);
    }
    let recent = bb.get_activity(&ActivityFilter::new().with_max_len(2));
    let values: Vec<_> = recent.iter().map(|r| r.value.clone()).collect();
    assert_eq!(values, vec![Some(Value::Int(2)), Some(Value::Int(3))]);
}
