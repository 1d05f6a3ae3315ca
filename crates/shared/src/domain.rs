use serde::{Deserialize, Serialize};

/// Lifecycle of a fact fetch. Exactly one variant is active at any instant;
/// entering `Loading` discards any previous value or message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FetchState {
    Idle,
    Loading,
    Success { value: String },
    Failed { message: String },
}

impl FetchState {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    /// True for `Success` and `Failed`, the two states a completed fetch can
    /// leave behind.
    pub fn is_terminal(&self) -> bool {
        matches!(self, FetchState::Success { .. } | FetchState::Failed { .. })
    }
}
