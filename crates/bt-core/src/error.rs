use thiserror::Error;

/// Structural and precondition failures.
///
/// Domain outcomes (`Failure`, `Running`) are never errors; these variants all point at a
/// defect in how the tree was assembled or driven, and they abort the current tick.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BtError {
    #[error("no blackboard attached to node '{node}'")]
    NoBlackboard { node: String },

    #[error("blackboard key not found: '{key}'")]
    KeyNotFound { key: String },

    #[error("blackboard type mismatch for key '{key}': expected {expected}, found {found}")]
    TypeMismatch {
        key: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("decorator '{node}' has no child")]
    MissingChild { node: String },

    #[error("node '{node}' finished its run without resolving a status")]
    Unresolved { node: String },

    #[error("blackboard is already borrowed while running node '{node}'")]
    BlackboardBusy { node: String },
}

pub type Result<T> = std::result::Result<T, BtError>;
