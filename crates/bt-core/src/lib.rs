//! Status, blackboard and error primitives for the behavior-tree engine.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod activity;
pub mod blackboard;
pub mod config;
pub mod error;
pub mod status;
pub mod value;

pub use activity::{AccessMode, ActivityFilter, ActivityRecord, UNATTRIBUTED};
pub use blackboard::{Blackboard, Scope, SharedBlackboard};
pub use config::{BlackboardConfig, DEFAULT_ACTIVITY_LEN};
pub use error::{BtError, Result};
pub use status::Status;
pub use value::{FromValue, Value};
