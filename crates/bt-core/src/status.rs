#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result of evaluating a node.
///
/// `Idle` is the "not evaluated yet" marker: every node holds it before its first tick and
/// right after `reset()`. A completed tick always leaves a node in one of the three resolved
/// states.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Status {
    Success,
    Failure,
    Running,
    #[default]
    Idle,
}

impl Status {
    /// `Success` or `Failure`.
    pub fn is_terminal(self) -> bool {
        matches!(self, Status::Success | Status::Failure)
    }

    /// Anything but `Idle`.
    pub fn is_resolved(self) -> bool {
        self != Status::Idle
    }

    /// Swap `Success` and `Failure`; `Running` and `Idle` are unchanged.
    pub fn invert(self) -> Self {
        match self {
            Status::Success => Status::Failure,
            Status::Failure => Status::Success,
            other => other,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Status::Success => "success",
            Status::Failure => "failure",
            Status::Running => "running",
            Status::Idle => "idle",
        }
    }
}

impl core::fmt::Display for Status {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::Status;

    #[test]
    fn invert_twice_is_identity() {
        for s in [Status::Success, Status::Failure, Status::Running, Status::Idle] {
            assert_eq!(s.invert().invert(), s);
        }
        assert_eq!(Status::Running.invert(), Status::Running);
    }

    #[test]
    fn default_is_idle() {
        assert_eq!(Status::default(), Status::Idle);
        assert!(!Status::Idle.is_resolved());
        assert!(Status::Running.is_resolved());
        assert!(!Status::Running.is_terminal());
    }
}
