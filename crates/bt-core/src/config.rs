#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default bound on the blackboard activity log.
pub const DEFAULT_ACTIVITY_LEN: usize = 1000;

/// Blackboard settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BlackboardConfig {
    /// Maximum number of activity records kept; older records are evicted first.
    pub activity_len: usize,
}

impl Default for BlackboardConfig {
    fn default() -> Self {
        Self {
            activity_len: DEFAULT_ACTIVITY_LEN,
        }
    }
}
