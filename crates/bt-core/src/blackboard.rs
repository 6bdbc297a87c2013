use std::cell::RefCell;
use std::collections::{BTreeMap, VecDeque};
use std::rc::Rc;

use tracing::trace;

use crate::activity::{ActivityFilter, ActivityRecord, UNATTRIBUTED};
use crate::config::{BlackboardConfig, DEFAULT_ACTIVITY_LEN};
use crate::error::{BtError, Result};
use crate::value::{FromValue, Value};

/// Handle every node of a tree keeps to the (externally owned) blackboard.
pub type SharedBlackboard = Rc<RefCell<Blackboard>>;

/// String-keyed scratch memory with a bounded access log.
///
/// Every `read`/`write` appends an [`ActivityRecord`]. Accesses made directly on the
/// blackboard are unattributed; leaves go through a [`Scope`], which stamps each access with
/// the leaf's name for as long as the scope lives.
#[derive(Debug, Clone)]
pub struct Blackboard {
    values: BTreeMap<String, Value>,
    activity: VecDeque<ActivityRecord>,
    activity_len: usize,
}

impl Default for Blackboard {
    fn default() -> Self {
        Self::with_activity_len(DEFAULT_ACTIVITY_LEN)
    }
}

impl Blackboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_activity_len(activity_len: usize) -> Self {
        Self {
            values: BTreeMap::new(),
            activity: VecDeque::new(),
            activity_len,
        }
    }

    pub fn from_config(config: &BlackboardConfig) -> Self {
        Self::with_activity_len(config.activity_len)
    }

    pub fn into_shared(self) -> SharedBlackboard {
        Rc::new(RefCell::new(self))
    }

    /// Logged, unattributed read.
    pub fn read(&mut self, key: &str) -> Result<&Value> {
        self.access_read(None, key)
    }

    pub fn read_as<T: FromValue>(&mut self, key: &str) -> Result<T> {
        self.access_read_as(None, key)
    }

    /// Logged, unattributed write.
    pub fn write(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.access_write(None, key.into(), value.into());
    }

    /// Attributed view for one client (normally a leaf during its `run`).
    pub fn scope<'a>(&'a mut self, client: &'a str) -> Scope<'a> {
        Scope {
            board: self,
            client,
        }
    }

    /// Unlogged lookup, for diagnostics.
    pub fn peek(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Full activity log, oldest first.
    pub fn activity(&self) -> impl Iterator<Item = &ActivityRecord> {
        self.activity.iter()
    }

    pub fn activity_len(&self) -> usize {
        self.activity_len
    }

    /// Change the log bound; the log is pruned right away.
    pub fn set_activity_len(&mut self, activity_len: usize) {
        self.activity_len = activity_len;
        self.prune_activity();
    }

    pub fn clear_activity(&mut self) {
        self.activity.clear();
    }

    /// Ordered subsequence of the log matching `filter`.
    pub fn get_activity(&self, filter: &ActivityFilter) -> Vec<&ActivityRecord> {
        let mut matches: Vec<&ActivityRecord> =
            self.activity.iter().filter(|r| filter.matches(r)).collect();
        if let Some(max) = filter.max_len {
            if matches.len() > max {
                matches.drain(..matches.len() - max);
            }
        }
        matches
    }

    fn access_read(&mut self, client: Option<&str>, key: &str) -> Result<&Value> {
        self.record(ActivityRecord::read(client, key));
        self.values.get(key).ok_or_else(|| BtError::KeyNotFound {
            key: key.to_string(),
        })
    }

    fn access_read_as<T: FromValue>(&mut self, client: Option<&str>, key: &str) -> Result<T> {
        let value = self.access_read(client, key)?;
        T::from_value(value).ok_or_else(|| BtError::TypeMismatch {
            key: key.to_string(),
            expected: T::KIND,
            found: value.kind(),
        })
    }

    fn access_write(&mut self, client: Option<&str>, key: String, value: Value) {
        self.record(ActivityRecord::write(client, &key, value.clone()));
        self.values.insert(key, value);
    }

    fn record(&mut self, record: ActivityRecord) {
        trace!(
            client = record.client.as_deref().unwrap_or(UNATTRIBUTED),
            mode = record.mode.as_str(),
            key = record.key.as_str(),
            value = ?record.value,
            "blackboard access"
        );
        self.activity.push_back(record);
        self.prune_activity();
    }

    fn prune_activity(&mut self) {
        while self.activity.len() > self.activity_len {
            self.activity.pop_front();
        }
    }
}

/// A blackboard borrowed on behalf of one client.
///
/// Every access made through a scope is attributed to its client, for the whole lifetime
/// of the scope.
#[derive(Debug)]
pub struct Scope<'a> {
    board: &'a mut Blackboard,
    client: &'a str,
}

impl Scope<'_> {
    pub fn client(&self) -> &str {
        self.client
    }

    pub fn read(&mut self, key: &str) -> Result<&Value> {
        self.board.access_read(Some(self.client), key)
    }

    pub fn read_as<T: FromValue>(&mut self, key: &str) -> Result<T> {
        self.board.access_read_as(Some(self.client), key)
    }

    pub fn write(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.board
            .access_write(Some(self.client), key.into(), value.into());
    }

    /// Unlogged lookup.
    pub fn peek(&self, key: &str) -> Option<&Value> {
        self.board.peek(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.board.contains(key)
    }
}
